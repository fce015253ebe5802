//! External collaborators
//!
//! Everything that talks to the outside world lives here:
//!
//! - `worktree`: the local git working copy, wrapped around the `git` binary
//! - `hosting`: the commit source contract and its payload shapes
//! - `ledger`: the append-only spreadsheet store for commit rows

pub mod hosting;
pub mod ledger;
pub mod worktree;
