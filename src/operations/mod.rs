//! High-level operations
//!
//! - DeployOperation: validate, package, upload, deploy, clean up
//!
//! Operations never touch the process environment or stdout directly
//! beyond progress lines; the command layer owns argument handling and
//! final output.

pub mod deploy;
