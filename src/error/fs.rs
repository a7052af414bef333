//! File system errors

use std::path::Path;

use super::FnshipError;

/// Creates a directory not found error
pub fn directory_not_found(path: impl AsRef<Path>) -> FnshipError {
    FnshipError::DirectoryNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates an environment file missing error
pub fn env_file_missing(path: impl AsRef<Path>) -> FnshipError {
    FnshipError::EnvFileMissing {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates an environment file invalid error
pub fn env_file_invalid(path: impl AsRef<Path>, reason: impl Into<String>) -> FnshipError {
    FnshipError::EnvFileInvalid {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> FnshipError {
    FnshipError::IoError {
        message: message.into(),
    }
}
