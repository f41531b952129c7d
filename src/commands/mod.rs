//! Command implementations for Graft CLI
//!
//! Each command returns the process exit code on completion. Fatal errors are
//! returned as `Err` and rendered by `main`.

pub mod add;
pub mod completions;
pub mod diff;
pub mod helpers;
pub mod init;
pub mod list;
pub mod update;
pub mod version;
