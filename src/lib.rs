//! gitledger: mirror git commit history into a ledger spreadsheet
//!
//! The crate is organized into three layers:
//!
//! - `areas`: external collaborators (the git working copy, the hosting
//!   commit source, the ledger store)
//! - `artifacts`: data types and algorithms (status parsing, file tree
//!   building, commit history aggregation)
//! - `commands`: CLI command implementations composing the two layers above

pub mod areas;
pub mod artifacts;
pub mod commands;
