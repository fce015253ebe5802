#![allow(dead_code)]

use gitledger::areas::hosting::{ChangedPath, CommitAuthor, CommitDetail};
use gitledger::artifacts::history::CommitFileRow;
use gitledger::artifacts::status::change_record::ChangeRecord;
use gitledger::artifacts::status::parser::{DiffScope, DiffStatSource};
use std::collections::{HashMap, HashSet};

pub fn change(file: &str, status: char, is_staged: bool, is_untracked: bool) -> ChangeRecord {
    ChangeRecord {
        status,
        file: file.to_string(),
        additions: None,
        deletions: None,
        is_staged,
        is_untracked,
    }
}

pub fn staged_change(file: &str) -> ChangeRecord {
    change(file, 'M', true, false)
}

pub fn row(hash: &str, message: &str, author: &str, date: &str, file: &str) -> CommitFileRow {
    labeled_row(hash, message, author, date, file, "repo")
}

pub fn labeled_row(
    hash: &str,
    message: &str,
    author: &str,
    date: &str,
    file: &str,
    label: &str,
) -> CommitFileRow {
    CommitFileRow {
        hash: hash.to_string(),
        message: message.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        file: file.to_string(),
        file_type: gitledger::artifacts::history::file_type_label(file),
        repository_label: label.to_string(),
    }
}

pub fn commit_detail(id: &str, comment: &str, date: &str, paths: &[&str]) -> CommitDetail {
    CommitDetail {
        id: id.to_string(),
        comment: comment.to_string(),
        author: CommitAuthor {
            name: "Test Author".to_string(),
            email: "author@example.com".to_string(),
            date: date.to_string(),
        },
        changes: paths
            .iter()
            .map(|path| ChangedPath {
                path: path.to_string(),
                change_type: "M".to_string(),
            })
            .collect(),
    }
}

/// Diff-stat source backed by a fixed table, with optional per-file
/// failures.
#[derive(Debug, Default)]
pub struct FixtureStatSource {
    counts: HashMap<(String, DiffScope), (u32, u32)>,
    failing: HashSet<String>,
}

impl FixtureStatSource {
    pub fn with_counts(mut self, file: &str, scope: DiffScope, added: u32, deleted: u32) -> Self {
        self.counts
            .insert((file.to_string(), scope), (added, deleted));
        self
    }

    pub fn failing_for(mut self, file: &str) -> Self {
        self.failing.insert(file.to_string());
        self
    }
}

impl DiffStatSource for FixtureStatSource {
    async fn diff_stat(&self, file: &str, scope: DiffScope) -> anyhow::Result<Option<(u32, u32)>> {
        if self.failing.contains(file) {
            anyhow::bail!("diff-stat lookup failed for {}", file);
        }
        Ok(self.counts.get(&(file.to_string(), scope)).copied())
    }
}
