//! Ledger spreadsheet store
//!
//! The ledger is an append-only row store with a fixed column order: commit
//! hash, message, author, commit date, file path, file-type label,
//! repository label, registration timestamp. `CsvLedger` keeps it in a CSV
//! file, which doubles as the spreadsheet the surrounding workflow shares.

use crate::artifacts::history::CommitFileRow;
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// One row as written to the ledger: a commit/file pair plus the timestamp
/// at which it was registered.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LedgerRow {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: String,
    pub file: String,
    pub file_type: String,
    pub repository_label: String,
    pub recorded_at: String,
}

impl From<LedgerRow> for CommitFileRow {
    fn from(row: LedgerRow) -> Self {
        CommitFileRow {
            hash: row.hash,
            message: row.message,
            author: row.author,
            date: row.date,
            file: row.file,
            file_type: row.file_type,
            repository_label: row.repository_label,
        }
    }
}

/// Append-only store of ledger rows, read back in insertion order.
pub trait LedgerStore {
    fn append_rows(&mut self, rows: &[LedgerRow]) -> anyhow::Result<()>;
    fn read_rows(&self) -> anyhow::Result<Vec<CommitFileRow>>;
}

/// Ledger backed by a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvLedger { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_empty_or_missing(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|metadata| metadata.len() == 0)
            .unwrap_or(true)
    }
}

impl LedgerStore for CsvLedger {
    fn append_rows(&mut self, rows: &[LedgerRow]) -> anyhow::Result<()> {
        let write_headers = self.is_empty_or_missing();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open ledger at {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_headers)
            .from_writer(file);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().context("Failed to flush ledger")?;

        Ok(())
    }

    fn read_rows(&self) -> anyhow::Result<Vec<CommitFileRow>> {
        if self.is_empty_or_missing() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to read ledger at {}", self.path.display()))?;

        // malformed rows are skipped, not fatal
        Ok(reader
            .deserialize::<LedgerRow>()
            .filter_map(Result::ok)
            .map(CommitFileRow::from)
            .collect())
    }
}
