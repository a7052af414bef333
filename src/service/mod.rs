//! Service directory inspection
//!
//! A service directory holds one deployable unit: `main.py` with the HTTP
//! entry point, its requirements, and local-only helpers such as
//! `local_main.py` and `local_env.yaml`. Only top-level regular files are
//! packaged, flat, and local-only files are filtered out while selecting.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub mod env_file;
pub mod exclude;

pub use env_file::EnvFile;
pub use exclude::ExcludeSet;

use crate::error::{FnshipError, Result, fs::directory_not_found, fs::io_error};

/// An existing service directory
#[derive(Debug, Clone)]
pub struct ServiceDir {
    root: PathBuf,
}

/// A file left out of the archive and the pattern that matched it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedFile {
    pub name: String,
    pub pattern: String,
}

/// Files chosen for the archive, and those left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageSelection {
    /// Paths of packaged files, as seen from the working directory
    #[serde(serialize_with = "serialize_lossy_paths")]
    pub included: Vec<PathBuf>,
    /// Files that matched an exclude pattern
    pub excluded: Vec<ExcludedFile>,
}

fn serialize_lossy_paths<S: serde::Serializer>(
    paths: &[PathBuf],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|path| path.to_string_lossy()))
}

impl PackageSelection {
    /// File names of the packaged files, the way they appear in the archive
    pub fn included_names(&self) -> Vec<String> {
        self.included
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

impl ServiceDir {
    /// Open an existing directory
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();
        if !root.is_dir() {
            return Err(directory_not_found(&root));
        }
        if let Ok(resolved) = dunce::canonicalize(&root) {
            debug!(dir = %resolved.display(), "opened service directory");
        }
        Ok(Self { root })
    }

    /// Choose the files to package.
    ///
    /// Entries are taken from the top level only, sorted by name. Hidden
    /// files and subdirectories are skipped, as a shell `dir/*` glob with
    /// junked paths would. Entries that cannot be resolved, such as dangling
    /// symlinks, are skipped with a warning. An empty selection is an error.
    pub fn select(&self, excludes: &ExcludeSet) -> Result<PackageSelection> {
        let mut selection = PackageSelection::default();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                    warn!(path = %path, error = %e, "skipping unreadable entry");
                    continue;
                }
                Err(e) => {
                    return Err(io_error(format!(
                        "Failed to read {}: {}",
                        self.root.display(),
                        e
                    )));
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            if let Some(pattern) = excludes.matching(&name) {
                debug!(file = %name, pattern, "excluding from archive");
                selection.excluded.push(ExcludedFile {
                    name,
                    pattern: pattern.to_string(),
                });
                continue;
            }
            selection.included.push(entry.into_path());
        }

        if selection.included.is_empty() {
            return Err(FnshipError::NothingToPackage {
                path: self.root.display().to_string(),
            });
        }

        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_service_dir;

    fn excluded_names(selection: &PackageSelection) -> Vec<&str> {
        selection.excluded.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_open_missing_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = ServiceDir::open(temp.path().join("svc")).unwrap_err();
        assert!(matches!(err, FnshipError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_open_file_is_not_a_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("main.py");
        std::fs::write(&file, "").unwrap();
        assert!(ServiceDir::open(file).is_err());
    }

    #[test]
    fn test_select_excludes_local_only_files() {
        let (_temp, root) = create_service_dir(&[
            ("main.py", "print('hi')\n"),
            ("requirements.txt", "flask\n"),
            ("local_main.py", "app.run()\n"),
            ("local_env.yaml", "A: b\n"),
        ]);
        let selection = ServiceDir::open(&root)
            .unwrap()
            .select(&ExcludeSet::default())
            .unwrap();

        assert_eq!(selection.included_names(), ["main.py", "requirements.txt"]);
        assert_eq!(excluded_names(&selection), ["local_env.yaml", "local_main.py"]);
        assert!(selection.excluded.iter().all(|f| f.pattern == "local_*"));
        assert!(selection.included.iter().all(|p| p.starts_with(&root)));
    }

    #[test]
    fn test_select_skips_hidden_files_and_subdirectories() {
        let (_temp, root) = create_service_dir(&[
            ("main.py", ""),
            (".gitignore", "*.zip\n"),
            ("__pycache__/main.cpython-312.pyc", ""),
            ("data/raw.csv", "a,b\n"),
        ]);
        let selection = ServiceDir::open(&root)
            .unwrap()
            .select(&ExcludeSet::default())
            .unwrap();

        assert_eq!(selection.included_names(), ["main.py"]);
        assert!(selection.excluded.is_empty());
    }

    #[test]
    fn test_select_with_only_local_files_is_empty() {
        let (_temp, root) = create_service_dir(&[("local_main.py", ""), ("local_env.yaml", "")]);
        let err = ServiceDir::open(&root)
            .unwrap()
            .select(&ExcludeSet::default())
            .unwrap_err();
        assert!(matches!(err, FnshipError::NothingToPackage { .. }));
    }

    #[test]
    fn test_select_applies_extra_patterns() {
        let (_temp, root) = create_service_dir(&[("main.py", ""), ("exploration.ipynb", "{}")]);
        let excludes = ExcludeSet::with_extra(&["*.ipynb"]).unwrap();
        let selection = ServiceDir::open(&root).unwrap().select(&excludes).unwrap();

        assert_eq!(selection.included_names(), ["main.py"]);
        assert_eq!(
            selection.excluded,
            [ExcludedFile {
                name: "exploration.ipynb".to_string(),
                pattern: "*.ipynb".to_string(),
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_select_skips_dangling_symlink() {
        let (_temp, root) = create_service_dir(&[("main.py", "")]);
        std::os::unix::fs::symlink("/nonexistent/target", root.join("broken.py")).unwrap();

        let selection = ServiceDir::open(&root)
            .unwrap()
            .select(&ExcludeSet::default())
            .unwrap();

        assert_eq!(selection.included_names(), ["main.py"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_select_keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (_temp, root) = create_service_dir(&[("main.py", "")]);
        let odd = root.join(OsStr::from_bytes(b"caf\xe9.py"));
        std::fs::write(&odd, "").unwrap();

        let selection = ServiceDir::open(&root)
            .unwrap()
            .select(&ExcludeSet::default())
            .unwrap();

        assert!(selection.included.contains(&odd));
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["included"].as_array().map(Vec::len), Some(2));
    }
}
