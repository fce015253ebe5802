//! CLI command implementations
//!
//! One module per command. Commands compose the collaborator areas with the
//! artifact transformations; they own all terminal output.

pub mod commit;
pub mod log;
pub mod push;
pub mod report;
pub mod stage;
pub mod status;
pub mod sync;
