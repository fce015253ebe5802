//! Local git working copy
//!
//! Wraps the system `git` binary. Serves both sides of the tool: the status
//! workflow (porcelain status plus per-file numstat lookups) and the local
//! sync workflow (recent commits with their changed paths).

use crate::areas::hosting::{ChangedPath, CommitAuthor, CommitDetail, CommitSource};
use crate::artifacts::status::change_record::ChangeRecord;
use crate::artifacts::status::parser::{self, DiffScope, DiffStatSource};
use anyhow::{Context, bail};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::process::Command;

static COMMIT_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z][0-9A-Za-z/_.~^-]{0,63}$").unwrap());

/// A git working copy rooted at a local directory.
#[derive(Debug, Clone)]
pub struct Worktree {
    root: PathBuf,
}

impl Worktree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Worktree { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Default repository label: the directory name of the working copy.
    pub fn label(&self) -> String {
        self.root
            .canonicalize()
            .ok()
            .as_deref()
            .unwrap_or(&self.root)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    async fn git(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .await
            .context("Failed to run git")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Raw porcelain status output, one line per changed file.
    pub async fn status_lines(&self) -> anyhow::Result<String> {
        self.git(&["status", "--porcelain", "-uall"]).await
    }

    /// Parsed change records for the current working copy state, with line
    /// counts attached where available.
    pub async fn changes(&self) -> anyhow::Result<Vec<ChangeRecord>> {
        let output = self.status_lines().await?;
        Ok(parser::parse_status(&output, self).await)
    }

    pub async fn stage(&self, paths: &[String]) -> anyhow::Result<()> {
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.git(&args).await?;
        Ok(())
    }

    /// Create a commit and return its hash.
    pub async fn commit(&self, message: &str) -> anyhow::Result<String> {
        self.git(&["commit", "-m", message]).await?;
        let hash = self.git(&["rev-parse", "HEAD"]).await?;
        Ok(hash.trim().to_string())
    }

    pub async fn push(&self) -> anyhow::Result<()> {
        self.git(&["push"]).await?;
        Ok(())
    }

    fn validate_commit_ref(commit_ref: &str) -> anyhow::Result<()> {
        if !COMMIT_REF.is_match(commit_ref) {
            bail!("Invalid commit ref: {}", commit_ref);
        }
        Ok(())
    }
}

impl DiffStatSource for Worktree {
    async fn diff_stat(&self, file: &str, scope: DiffScope) -> anyhow::Result<Option<(u32, u32)>> {
        let output = match scope {
            DiffScope::Staged => {
                self.git(&["diff", "--numstat", "--cached", "--", file])
                    .await?
            }
            DiffScope::Unstaged => self.git(&["diff", "--numstat", "--", file]).await?,
        };

        // numstat reports "-\t-\tpath" for binary files
        let counts = output.lines().next().and_then(|line| {
            let mut columns = line.split('\t');
            let added = columns.next()?.parse::<u32>().ok()?;
            let deleted = columns.next()?.parse::<u32>().ok()?;
            Some((added, deleted))
        });

        Ok(counts)
    }
}

impl CommitSource for Worktree {
    async fn recent_commit_ids(&self, count: usize) -> anyhow::Result<Vec<String>> {
        let count = count.to_string();
        let output = self.git(&["log", "-n", &count, "--format=%H"]).await?;
        Ok(output.lines().map(str::to_string).collect())
    }

    async fn commit_detail(&self, id: &str) -> anyhow::Result<CommitDetail> {
        Self::validate_commit_ref(id)?;

        let output = self
            .git(&["log", "-1", "--format=%H%n%an%n%ae%n%aI%n%s", id])
            .await?;
        let mut lines = output.lines();
        let hash = lines.next().context("Missing commit hash")?.to_string();
        let name = lines.next().context("Missing author name")?.to_string();
        let email = lines.next().context("Missing author email")?.to_string();
        let date = lines.next().context("Missing author date")?.to_string();
        let comment = lines.next().unwrap_or_default().to_string();

        let changes = self
            .git(&["show", "--name-status", "--format=", id])
            .await?
            .lines()
            .filter_map(parse_name_status_line)
            .collect();

        Ok(CommitDetail {
            id: hash,
            comment,
            author: CommitAuthor { name, email, date },
            changes,
        })
    }
}

// "M\tpath", or "R100\told\tnew" for renames (the new path is kept)
fn parse_name_status_line(line: &str) -> Option<ChangedPath> {
    let mut columns = line.split('\t');
    let status = columns.next()?.trim();
    if status.is_empty() {
        return None;
    }
    let path = columns.next_back()?.trim();
    if path.is_empty() {
        return None;
    }

    Some(ChangedPath {
        path: path.to_string(),
        change_type: status.chars().take(1).collect(),
    })
}
