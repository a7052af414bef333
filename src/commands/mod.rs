//! Command implementations for the fnship CLI

pub mod completions;
pub mod deploy;
pub mod helpers;
pub mod init;
pub mod version;
