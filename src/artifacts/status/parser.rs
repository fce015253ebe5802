//! Porcelain status line parsing
//!
//! Each line carries a two-character status prefix (index column, worktree
//! column) followed by a path. The parser is lenient by design: malformed
//! lines are skipped, never surfaced as errors, so one bad line cannot spoil
//! a whole batch.

use crate::artifacts::status::change_record::ChangeRecord;

const BLANK: u8 = b' ';
const UNKNOWN: u8 = b'?';

/// Which side of the index a diff-stat lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffScope {
    Staged,
    Unstaged,
}

/// Supplies added/deleted line counts for a single path.
///
/// Lookup failures must degrade to `Ok(None)` or an error; either way the
/// batch parse records absent counts and carries on.
#[allow(async_fn_in_trait)]
pub trait DiffStatSource {
    async fn diff_stat(&self, file: &str, scope: DiffScope) -> anyhow::Result<Option<(u32, u32)>>;
}

/// A status line split into its components, before counts are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatusLine {
    pub index_status: char,
    pub worktree_status: char,
    pub file: String,
    pub is_untracked: bool,
    pub is_staged: bool,
    pub has_working_changes: bool,
}

impl ParsedStatusLine {
    /// The reported status character: the index column wins when staged.
    pub fn status(&self) -> char {
        if self.is_staged {
            self.index_status
        } else {
            self.worktree_status
        }
    }
}

/// Parse one porcelain status line, or `None` for lines with nothing to
/// report.
///
/// Handles both prefix shapes seen in the wild: `XY path` (blank separator
/// at position 2) and `XYpath` (separator omitted).
pub fn parse_status_line(line: &str) -> Option<ParsedStatusLine> {
    let bytes = line.as_bytes();
    if bytes.len() < 3 {
        return None;
    }

    let index_byte = bytes[0];
    let worktree_byte = bytes[1];

    let is_untracked = index_byte == UNKNOWN && worktree_byte == UNKNOWN;
    let is_staged = !is_untracked && index_byte != BLANK && index_byte != UNKNOWN;
    let has_working_changes = worktree_byte != BLANK && worktree_byte != UNKNOWN;

    if !is_staged && !has_working_changes && !is_untracked {
        return None;
    }

    let prefix_width = if bytes[2] == BLANK { 3 } else { 2 };
    let rest = line.get(prefix_width..)?.trim();

    // renames are reported as "old -> new"; the new path is the one we track
    let file = match rest.find(" -> ") {
        Some(arrow) => &rest[arrow + 4..],
        None => rest,
    };
    if file.is_empty() {
        return None;
    }

    Some(ParsedStatusLine {
        index_status: index_byte as char,
        worktree_status: worktree_byte as char,
        file: file.to_string(),
        is_untracked,
        is_staged,
        has_working_changes,
    })
}

/// Parse a whole porcelain status batch and attach line counts.
///
/// Diff-stat lookups target disjoint paths, so they are issued concurrently;
/// each failure yields absent counts for that file only.
pub async fn parse_status<S: DiffStatSource>(output: &str, stats: &S) -> Vec<ChangeRecord> {
    let parsed = output
        .lines()
        .filter_map(parse_status_line)
        .collect::<Vec<_>>();

    let lookups = parsed.iter().map(|line| async move {
        if line.is_staged {
            stats
                .diff_stat(&line.file, DiffScope::Staged)
                .await
                .ok()
                .flatten()
        } else if line.has_working_changes && !line.is_untracked {
            stats
                .diff_stat(&line.file, DiffScope::Unstaged)
                .await
                .ok()
                .flatten()
        } else {
            None
        }
    });
    let counts = futures::future::join_all(lookups).await;

    parsed
        .into_iter()
        .zip(counts)
        .map(|(line, counts)| {
            let status = line.status();
            ChangeRecord {
                status,
                file: line.file,
                additions: counts.map(|(added, _)| added),
                deletions: counts.map(|(_, deleted)| deleted),
                is_staged: line.is_staged,
                is_untracked: line.is_untracked,
            }
        })
        .collect()
}
