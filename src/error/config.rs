//! Configuration errors

use super::FnshipError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> FnshipError {
    FnshipError::ConfigNotFound { path: path.into() }
}

/// Creates an invalid config error
pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> FnshipError {
    FnshipError::ConfigInvalid {
        path: path.into(),
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FnshipError {
    FnshipError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
