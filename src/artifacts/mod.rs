//! Core data structures and algorithms
//!
//! This module contains the pure transformations of the tool:
//!
//! - `status`: porcelain status line parsing into change records
//! - `tree`: file tree reconstruction from flat change lists
//! - `history`: commit history aggregation for the ledger reports

pub mod history;
pub mod status;
pub mod tree;
