//! Working copy status inspection
//!
//! Turns porcelain status output into structured change records:
//!
//! - `change_record`: one file's change state (status char, staged/untracked
//!   flags, optional line counts)
//! - `parser`: lenient line parsing plus batched diff-stat lookups

pub mod change_record;
pub mod parser;
