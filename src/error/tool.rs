//! External tool errors

use super::FnshipError;

/// Creates a packaging failed error
pub fn packaging_failed(archive: impl Into<String>, reason: impl Into<String>) -> FnshipError {
    FnshipError::PackagingFailed {
        archive: archive.into(),
        reason: reason.into(),
    }
}

/// Creates an upload failed error
pub fn upload_failed(
    archive: impl Into<String>,
    remote: impl Into<String>,
    reason: impl Into<String>,
) -> FnshipError {
    FnshipError::UploadFailed {
        archive: archive.into(),
        remote: remote.into(),
        reason: reason.into(),
    }
}

/// Creates a deploy failed error
pub fn deploy_failed(
    function: impl Into<String>,
    remote: impl Into<String>,
    reason: impl Into<String>,
) -> FnshipError {
    FnshipError::DeployFailed {
        function: function.into(),
        remote: remote.into(),
        reason: reason.into(),
    }
}

/// Creates a deploy failed error for a run that already removed its upload
pub fn deploy_failed_remote_removed(
    function: impl Into<String>,
    remote: impl Into<String>,
    reason: impl Into<String>,
) -> FnshipError {
    FnshipError::DeployFailedRemoteRemoved {
        function: function.into(),
        remote: remote.into(),
        reason: reason.into(),
    }
}
