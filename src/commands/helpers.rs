//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::DEFAULT_CONFIG_FILE;

/// Resolve the project configuration path from an optional argument
///
/// If a path is provided, use it. Otherwise, use `.env` relative to the
/// current directory.
pub fn resolve_config_path(config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// File name of the running executable, for usage messages
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(
            || env!("CARGO_PKG_NAME").to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}
