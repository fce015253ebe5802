//! Commit source contract
//!
//! A commit source answers two queries: the newest N commit ids, and the
//! full detail of one commit. The local working copy implements it by
//! shelling out to git; a hosted repository service implements it over its
//! REST payloads, which deserialize into the shapes below. The transport is
//! injected at construction time; there is no process-wide client.

use anyhow::Context;

/// Author information attached to a commit. `date` is ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub date: String,
}

/// One changed path within a commit, with its change type ("A", "M", ...).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedPath {
    pub path: String,
    pub change_type: String,
}

/// Full detail of one commit as supplied by a commit source.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitDetail {
    pub id: String,
    pub comment: String,
    pub author: CommitAuthor,
    #[serde(default)]
    pub changes: Vec<ChangedPath>,
}

/// Supplies commit history, newest first.
#[allow(async_fn_in_trait)]
pub trait CommitSource {
    async fn recent_commit_ids(&self, count: usize) -> anyhow::Result<Vec<String>>;
    async fn commit_detail(&self, id: &str) -> anyhow::Result<CommitDetail>;
}

/// A commit source over an already-fetched list of commit details, oldest
/// first. Backs the "sync from a hosting service dump" workflow and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommitSource {
    commits: Vec<CommitDetail>,
}

impl InMemoryCommitSource {
    pub fn new(commits: Vec<CommitDetail>) -> Self {
        InMemoryCommitSource { commits }
    }

    /// Load from a JSON array of commit details, as returned by the hosting
    /// service's commit endpoints.
    pub fn from_json(payload: &str) -> anyhow::Result<Self> {
        let commits = serde_json::from_str::<Vec<CommitDetail>>(payload)
            .context("Invalid commit payload: expected a JSON array of commit details")?;
        Ok(InMemoryCommitSource { commits })
    }
}

impl CommitSource for InMemoryCommitSource {
    async fn recent_commit_ids(&self, count: usize) -> anyhow::Result<Vec<String>> {
        Ok(self
            .commits
            .iter()
            .rev()
            .take(count)
            .map(|commit| commit.id.clone())
            .collect())
    }

    async fn commit_detail(&self, id: &str) -> anyhow::Result<CommitDetail> {
        self.commits
            .iter()
            .find(|commit| commit.id == id)
            .cloned()
            .with_context(|| format!("Unknown commit id: {}", id))
    }
}
