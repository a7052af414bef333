//! Project configuration
//!
//! The project configuration is a plain `KEY=VALUE` file (by default `.env`
//! in the working directory) naming the cloud project, its region and the
//! object-storage prefix archives are uploaded under. It is loaded once per
//! run into a [`ProjectConfig`] and passed explicitly to the operations that
//! need it.

pub mod project;

pub use project::ProjectConfig;

/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".env";

/// Key holding the cloud project id
pub const KEY_PROJECT_ID: &str = "PROJECT_ID";

/// Key holding the deployment region
pub const KEY_REGION: &str = "REGION";

/// Key holding the object-storage prefix archives are uploaded to
pub const KEY_STORAGE_PATH: &str = "GCS_PATH";
