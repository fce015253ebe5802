use crate::areas::hosting::{CommitDetail, CommitSource};
use crate::areas::ledger::{LedgerRow, LedgerStore};
use crate::artifacts::history::{NO_FILE_SENTINEL, file_type_label};
use colored::Colorize;
use derive_new::new;
use std::collections::BTreeSet;

/// Reads commit details from a source and forwards them to the ledger,
/// one row per changed file (or a single sentinel row for an empty commit).
#[derive(new)]
pub struct SyncOrchestrator<S: CommitSource> {
    source: S,
    repository_label: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub recorded_commits: usize,
    pub recorded_rows: usize,
    pub skipped_commits: usize,
}

impl<S: CommitSource> SyncOrchestrator<S> {
    /// Mirror the newest `count` commits into the ledger, oldest first.
    /// Commits whose hash is already in the ledger are skipped.
    pub async fn sync_recent(
        &self,
        ledger: &mut impl LedgerStore,
        count: usize,
    ) -> anyhow::Result<SyncOutcome> {
        let known_hashes = ledger
            .read_rows()?
            .into_iter()
            .map(|row| row.hash)
            .collect::<BTreeSet<_>>();

        let ids = self.source.recent_commit_ids(count).await?;
        let mut outcome = SyncOutcome::default();

        // ids come newest first; append oldest first to keep the ledger
        // chronological
        for id in ids.iter().rev() {
            if known_hashes.contains(id) {
                outcome.skipped_commits += 1;
                continue;
            }

            let detail = self.source.commit_detail(id).await?;
            let rows = self.flatten(&detail);
            ledger.append_rows(&rows)?;

            outcome.recorded_commits += 1;
            outcome.recorded_rows += rows.len();
        }

        Ok(outcome)
    }

    fn flatten(&self, detail: &CommitDetail) -> Vec<LedgerRow> {
        let recorded_at = chrono::Local::now().to_rfc3339();
        let row = |file: String, file_type: String| LedgerRow {
            hash: detail.id.clone(),
            message: detail.comment.clone(),
            author: detail.author.name.clone(),
            date: detail.author.date.clone(),
            file,
            file_type,
            repository_label: self.repository_label.clone(),
            recorded_at: recorded_at.clone(),
        };

        if detail.changes.is_empty() {
            return vec![row(NO_FILE_SENTINEL.to_string(), "none".to_string())];
        }

        detail
            .changes
            .iter()
            .map(|change| row(change.path.clone(), file_type_label(&change.path)))
            .collect()
    }
}

pub async fn run<S: CommitSource>(
    source: S,
    ledger: &mut impl LedgerStore,
    repository_label: String,
    count: usize,
) -> anyhow::Result<()> {
    let orchestrator = SyncOrchestrator::new(source, repository_label);
    let outcome = orchestrator.sync_recent(ledger, count).await?;

    println!(
        "{} {} commit(s) ({} row(s)), skipped {} already recorded",
        "Synced".green().bold(),
        outcome.recorded_commits,
        outcome.recorded_rows,
        outcome.skipped_commits
    );

    Ok(())
}
