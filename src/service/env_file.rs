//! Per-service environment file (`local_env.yaml`)
//!
//! The deploy command reads this file itself; it is validated up front so a
//! malformed file fails the run before anything is packaged or uploaded.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{Result, fs::env_file_invalid, fs::env_file_missing};

/// Parsed environment variables of a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    pub vars: BTreeMap<String, String>,
}

impl EnvFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(env_file_missing(path));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| env_file_invalid(path, e.to_string()))?;
        let vars = parse_vars(&content).map_err(|reason| env_file_invalid(path, reason))?;

        Ok(Self { vars })
    }

    /// Variable names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }
}

/// A flat mapping of names to scalars. An empty document is an empty mapping.
fn parse_vars(content: &str) -> std::result::Result<BTreeMap<String, String>, String> {
    let document: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

    let mapping = match document {
        Value::Null => return Ok(BTreeMap::new()),
        Value::Mapping(mapping) => mapping,
        other => return Err(format!("expected a mapping, found {}", kind(&other))),
    };

    let mut vars = BTreeMap::new();
    for (key, value) in mapping {
        let name = match key {
            Value::String(name) => name,
            other => {
                return Err(format!(
                    "variable names must be strings, found {}",
                    kind(&other)
                ));
            }
        };
        let value = match value {
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(format!(
                    "value of '{}' must be a scalar, found {}",
                    name,
                    kind(&other)
                ));
            }
        };
        vars.insert(name, value);
    }

    Ok(vars)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
