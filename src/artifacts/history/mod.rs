//! Commit history aggregation
//!
//! The ledger stores one row per (commit, file) pair, appended oldest first.
//! Two aggregations read that flat history back:
//!
//! - by commit: the ordered list of synced commits with their file lists
//! - by file: one record per `(file, repository label)` key for the
//!   unique-files report, tracking first/last commit dates and a touch count
//!
//! Commit dates are expected to be ISO-8601/RFC 3339. A date that fails to
//! parse orders before every valid date, which keeps the aggregation
//! deterministic without failing the batch.

use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::path::Path;

/// Placeholder file value written for commits that touched no files, so that
/// every commit has at least one ledger row. Excluded from all aggregation.
pub const NO_FILE_SENTINEL: &str = "(no files)";

/// One (commit, file) pair as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommitFileRow {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: String,
    pub file: String,
    pub file_type: String,
    pub repository_label: String,
}

/// A synced commit with the ordered list of files it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: String,
    pub files: Vec<String>,
}

/// Per-file summary for the unique-files report, keyed by
/// `(file, repository label)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueFileRecord {
    pub file: String,
    pub file_type: String,
    pub repository_label: String,
    pub last_commit_hash: String,
    pub last_commit_message: String,
    pub last_commit_author: String,
    pub last_commit_date: String,
    pub first_commit_date: String,
    pub commit_count: usize,
}

/// Parse a commit date under the ISO-8601 contract.
pub fn parse_commit_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

/// File-type label for a path: the lowercased extension, or "none".
pub fn file_type_label(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase())
        .unwrap_or_else(|| "none".to_string())
}

fn is_reportable_file(file: &str) -> bool {
    !file.is_empty() && file != NO_FILE_SENTINEL
}

/// Group ledger rows by commit hash, preserving first-seen order.
///
/// Sentinel rows keep their commit in the listing (for audit) but contribute
/// nothing to its file list. Message, author and date are taken from the
/// first row of each group; all rows of a commit share them by
/// construction.
pub fn group_by_commit(rows: &[CommitFileRow]) -> Vec<CommitInfo> {
    let mut commits = Vec::<CommitInfo>::new();
    let mut position_by_hash = BTreeMap::<&str, usize>::new();

    for row in rows {
        let position = match position_by_hash.get(row.hash.as_str()) {
            Some(&position) => position,
            None => {
                position_by_hash.insert(&row.hash, commits.len());
                commits.push(CommitInfo {
                    hash: row.hash.clone(),
                    message: row.message.clone(),
                    author: row.author.clone(),
                    date: row.date.clone(),
                    files: Vec::new(),
                });
                commits.len() - 1
            }
        };

        if is_reportable_file(&row.file) {
            commits[position].files.push(row.file.clone());
        }
    }

    commits
}

struct FileHistory {
    record: UniqueFileRecord,
    first_seen: Option<DateTime<FixedOffset>>,
    last_seen: Option<DateTime<FixedOffset>>,
}

/// Produce one record per `(file, repository label)` key, sorted by
/// repository label then file.
///
/// `commit_count` counts every source row with the key. The first/last
/// commit fields follow timestamp comparison, not row order; on equal
/// timestamps the earliest-encountered row wins the "last" slot.
pub fn unique_files(rows: &[CommitFileRow]) -> Vec<UniqueFileRecord> {
    let mut histories = BTreeMap::<(String, String), FileHistory>::new();

    for row in rows {
        if !is_reportable_file(&row.file) {
            continue;
        }

        let key = (row.repository_label.clone(), row.file.clone());
        let parsed = parse_commit_date(&row.date);

        let history = histories.entry(key).or_insert_with(|| FileHistory {
            record: UniqueFileRecord {
                file: row.file.clone(),
                file_type: row.file_type.clone(),
                repository_label: row.repository_label.clone(),
                last_commit_hash: row.hash.clone(),
                last_commit_message: row.message.clone(),
                last_commit_author: row.author.clone(),
                last_commit_date: row.date.clone(),
                first_commit_date: row.date.clone(),
                commit_count: 0,
            },
            first_seen: parsed,
            last_seen: parsed,
        });

        history.record.commit_count += 1;

        // Option ordering puts None before every Some, so unparseable dates
        // sort before all valid ones.
        if history.record.commit_count > 1 {
            if parsed < history.first_seen {
                history.first_seen = parsed;
                history.record.first_commit_date = row.date.clone();
            }
            if parsed > history.last_seen {
                history.last_seen = parsed;
                history.record.last_commit_hash = row.hash.clone();
                history.record.last_commit_message = row.message.clone();
                history.record.last_commit_author = row.author.clone();
                history.record.last_commit_date = row.date.clone();
            }
        }
    }

    histories
        .into_values()
        .map(|history| history.record)
        .collect()
}
