//! Template service scaffolding
//!
//! Writes the directory layout `fnship` deploys: `main.py` with the HTTP
//! entry point, `requirements.txt`, and the local-only harness
//! (`local_main.py`, `local_env.yaml`) that stays out of the archive.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::request::{DEFAULT_ENTRY_POINT, ENV_FILE_NAME};
use crate::error::{FnshipError, Result, fs::io_error};

mod templates;

/// Files of a freshly scaffolded service, in write order
pub const TEMPLATE_FILES: [&str; 4] = [
    "main.py",
    "requirements.txt",
    "local_main.py",
    ENV_FILE_NAME,
];

/// Options for scaffolding a service
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Name of the generated HTTP handler
    pub entry_point: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}

/// Validate a Python identifier used as the entry point
fn validate_entry_point(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(FnshipError::InvalidEntryPoint {
            name: name.to_string(),
        })
    }
}

fn render_template(template: &str, name: &str, entry_point: &str) -> String {
    template
        .replace("{{name}}", name)
        .replace("{{entry_point}}", entry_point)
}

/// Write the template service into `dir`, creating it if needed.
///
/// Refuses to touch a directory that already has entries. Returns the
/// written file paths.
pub fn scaffold(dir: &Path, options: &ScaffoldOptions) -> Result<Vec<PathBuf>> {
    validate_entry_point(&options.entry_point)?;

    if dir.exists() {
        let mut entries = fs::read_dir(dir)
            .map_err(|e| io_error(format!("Failed to read {}: {}", dir.display(), e)))?;
        if entries.next().is_some() {
            return Err(FnshipError::ScaffoldTargetNotEmpty {
                path: dir.display().to_string(),
            });
        }
    } else {
        fs::create_dir_all(dir)
            .map_err(|e| io_error(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let name = dir
        .file_name()
        .map_or_else(|| "service".to_string(), |n| n.to_string_lossy().into_owned());
    let contents = [
        templates::MAIN_PY,
        templates::REQUIREMENTS_TXT,
        templates::LOCAL_MAIN_PY,
        templates::LOCAL_ENV_YAML,
    ];

    let mut written = Vec::with_capacity(TEMPLATE_FILES.len());
    for (file, template) in TEMPLATE_FILES.iter().zip(contents) {
        let path = dir.join(file);
        fs::write(&path, render_template(template, &name, &options.entry_point))
            .map_err(|e| io_error(format!("Failed to write {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "wrote template file");
        written.push(path);
    }

    Ok(written)
}
