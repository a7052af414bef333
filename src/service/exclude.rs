//! Local-only file exclusion
//!
//! Files meant only for local testing (the Flask harness, the env file) are
//! named with a `local_` prefix and never go into the archive.

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{FnshipError, Result};

/// Glob matching the local-only naming convention
pub const LOCAL_ONLY_PATTERN: &str = "local_*";

/// Compiled set of file-name globs to leave out of the archive
#[derive(Debug)]
pub struct ExcludeSet {
    patterns: Vec<(String, Glob<'static>)>,
}

impl ExcludeSet {
    /// The local-only convention plus any extra user patterns
    pub fn with_extra<S: AsRef<str>>(extra: &[S]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(extra.len() + 1);
        for expression in
            std::iter::once(LOCAL_ONLY_PATTERN).chain(extra.iter().map(AsRef::as_ref))
        {
            let glob = Glob::new(expression)
                .map_err(|e| FnshipError::InvalidRequest {
                    message: format!("invalid exclude pattern '{}': {}", expression, e),
                })?
                .into_owned();
            patterns.push((expression.to_string(), glob));
        }
        Ok(Self { patterns })
    }

    /// Pattern that excludes `file_name`, if any
    pub fn matching(&self, file_name: &str) -> Option<&str> {
        let candidate = CandidatePath::from(file_name);
        self.patterns
            .iter()
            .find(|(_, glob)| glob.matched(&candidate).is_some())
            .map(|(expression, _)| expression.as_str())
    }

}

#[cfg(test)]
impl Default for ExcludeSet {
    fn default() -> Self {
        let glob = Glob::new(LOCAL_ONLY_PATTERN).map(Glob::into_owned);
        Self {
            patterns: glob
                .map(|glob| vec![(LOCAL_ONLY_PATTERN.to_string(), glob)])
                .unwrap_or_default(),
        }
    }
}
