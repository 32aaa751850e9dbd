use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::FileLocator;
use crate::paths::PathNormalizer;
use crate::sandbox::SandboxError;

/// File locator serving files from a directory tree on disk
pub struct FolderLocator {
    base: PathBuf,
}

impl FolderLocator {
    /// Create a locator rooted at `base`
    ///
    /// Fails with `InvalidArgument` when `base` is empty. The directory itself
    /// is not required to exist; lookups against a missing root simply find
    /// nothing.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self, SandboxError> {
        let base = base.into();
        if base.as_os_str().is_empty() {
            return Err(SandboxError::InvalidArgument(
                "base directory is empty".to_string(),
            ));
        }
        Ok(Self { base })
    }

    fn resolve(&self, file_name: &str) -> PathBuf {
        self.base.join(PathNormalizer::to_native(file_name))
    }
}

impl FileLocator for FolderLocator {
    fn exists(&self, file_name: &str) -> bool {
        self.resolve(file_name).is_file()
    }

    fn enumerate(&self, path: &str) -> Vec<String> {
        let normalized = PathNormalizer::to_native(PathNormalizer::strip_root_prefix(path));
        let search = self.base.join(&normalized);

        if search.is_dir() {
            WalkDir::new(&search)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| {
                    entry
                        .path()
                        .strip_prefix(&self.base)
                        .ok()
                        .map(|relative| relative.to_string_lossy().into_owned())
                })
                .collect()
        } else if search.is_file() {
            vec![normalized]
        } else {
            Vec::new()
        }
    }

    fn copy_to(&self, file_name: &str, destination: &Path) -> Result<(), SandboxError> {
        let src = self.resolve(file_name);
        // Joining an absolute destination leaves it unchanged, so relative
        // destinations resolve under the base and absolute ones stand as-is.
        let dst = self.base.join(destination);

        if src == dst {
            return Err(SandboxError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Source and destination are the same file: {}", src.display()),
            )));
        }

        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, &dst)?;

        Ok(())
    }
}
