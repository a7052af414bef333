//! `KEY=VALUE` project configuration loading

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::{KEY_PROJECT_ID, KEY_REGION, KEY_STORAGE_PATH};
use crate::error::{Result, config};

/// Cloud project settings shared by every deployment from this directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub project_id: String,
    pub region: String,
    /// Object-storage prefix, e.g. `gs://bucket/functions`
    pub storage_path: String,
}

impl ProjectConfig {
    /// Load the configuration from a `KEY=VALUE` file
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        if !path.is_file() {
            return Err(config::not_found(shown));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| config::read_failed(&shown, e.to_string()))?;
        debug!(path = %shown, "loaded project configuration");
        Self::parse(&content, &shown)
    }

    /// Parse configuration content; `origin` is only used in error messages
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let entries = parse_entries(content);
        let require = |key: &str| -> Result<String> {
            entries
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
                .ok_or_else(|| config::invalid(origin, format!("missing value for {}", key)))
        };

        Ok(Self {
            project_id: require(KEY_PROJECT_ID)?,
            region: require(KEY_REGION)?,
            storage_path: require(KEY_STORAGE_PATH)?,
        })
    }

    /// Remote location of an object named `name` under the storage prefix.
    ///
    /// Exactly one `/` separates the prefix and the name, whether or not the
    /// configured prefix ends with a slash.
    pub fn remote_object(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.storage_path.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

/// Split lines at the first `=`; the last occurrence of a key wins.
fn parse_entries(content: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").map_or(line, str::trim_start);

        let Some((key, value)) = line.split_once('=') else {
            debug!(line = index + 1, "ignoring configuration line without '='");
            continue;
        };
        entries.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    entries
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FnshipError;
    use tempfile::TempDir;

    const SAMPLE: &str = "PROJECT_ID=analytics-prod\nREGION=us-south1\nGCS_PATH=gs://deploy-bucket/functions\n";

    #[test]
    fn test_parse_basic() {
        let config = ProjectConfig::parse(SAMPLE, ".env").unwrap();
        assert_eq!(config.project_id, "analytics-prod");
        assert_eq!(config.region, "us-south1");
        assert_eq!(config.storage_path, "gs://deploy-bucket/functions");
    }

    #[test]
    fn test_parse_ignores_comments_blank_lines_and_unknown_keys() {
        let content = "# project settings\n\nPROJECT_ID=p\nOWNER=data-team\nREGION=r\n   \nGCS_PATH=gs://b\n";
        let config = ProjectConfig::parse(content, ".env").unwrap();
        assert_eq!(config.project_id, "p");
        assert_eq!(config.region, "r");
    }

    #[test]
    fn test_parse_value_keeps_everything_after_first_equals() {
        let content = "PROJECT_ID=p\nREGION=r\nGCS_PATH=gs://b/path?x=1\n";
        let config = ProjectConfig::parse(content, ".env").unwrap();
        assert_eq!(config.storage_path, "gs://b/path?x=1");
    }

    #[test]
    fn test_parse_strips_quotes_and_export() {
        let content = "export PROJECT_ID=\"p\"\nREGION = 'r'\nGCS_PATH=gs://b\n";
        let config = ProjectConfig::parse(content, ".env").unwrap();
        assert_eq!(config.project_id, "p");
        assert_eq!(config.region, "r");
    }

    #[test]
    fn test_parse_last_occurrence_wins() {
        let content = "PROJECT_ID=old\nREGION=r\nGCS_PATH=gs://b\nPROJECT_ID=new\n";
        let config = ProjectConfig::parse(content, ".env").unwrap();
        assert_eq!(config.project_id, "new");
    }

    #[test]
    fn test_parse_missing_key() {
        let err = ProjectConfig::parse("PROJECT_ID=p\nREGION=r\n", ".env").unwrap_err();
        assert!(matches!(err, FnshipError::ConfigInvalid { .. }));
        assert!(err.to_string().contains("GCS_PATH"));
    }

    #[test]
    fn test_parse_empty_value_is_missing() {
        let err = ProjectConfig::parse("PROJECT_ID=\nREGION=r\nGCS_PATH=gs://b\n", ".env")
            .unwrap_err();
        assert!(err.to_string().contains("PROJECT_ID"));
    }

    #[test]
    fn test_remote_object_single_separator() {
        let mut config = ProjectConfig::parse(SAMPLE, ".env").unwrap();
        assert_eq!(
            config.remote_object("myfunc.zip"),
            "gs://deploy-bucket/functions/myfunc.zip"
        );

        config.storage_path = "gs://deploy-bucket/functions/".to_string();
        assert_eq!(
            config.remote_object("myfunc.zip"),
            "gs://deploy-bucket/functions/myfunc.zip"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ProjectConfig::load(&temp.path().join(".env")).unwrap_err();
        assert!(matches!(err, FnshipError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = ProjectConfig::load(&path).unwrap();
        assert_eq!(config.region, "us-south1");
    }
}
