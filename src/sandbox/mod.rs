mod error;


pub use error::SandboxError;

use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::locator::{EmptyLocator, FileLocator};
use crate::paths::PathNormalizer;

/// Isolated, disposable working directory for a test run
///
/// Each sandbox owns a unique directory under the system temp root and fills
/// it on demand through a [`FileLocator`]. Dropping the sandbox deletes the
/// directory and everything in it.
pub struct FileSandbox {
    directory: PathBuf,
    locator: Box<dyn FileLocator>,
}

impl FileSandbox {
    /// Create a sandbox backed by the given locator
    pub fn new(locator: impl FileLocator + 'static) -> Result<Self, SandboxError> {
        let directory = env::temp_dir().join(format!("filebox-{}", Uuid::new_v4()));
        fs::create_dir_all(&directory)?;
        debug!("Created sandbox at {}", directory.display());

        Ok(Self {
            directory,
            locator: Box::new(locator),
        })
    }

    /// Create a sandbox with no backing store, for scratch files only
    pub fn empty() -> Result<Self, SandboxError> {
        Self::new(EmptyLocator)
    }

    /// Absolute path of the sandbox directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Join `name` onto the sandbox directory without touching the filesystem
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.directory.join(PathNormalizer::to_native(name))
    }

    /// Whether a regular file exists at `name` inside the sandbox
    pub fn exists_file(&self, name: &str) -> bool {
        self.resolve_path(name).is_file()
    }

    /// Whether a directory exists at `name` inside the sandbox
    pub fn exists_directory(&self, name: &str) -> bool {
        self.resolve_path(name).is_dir()
    }

    /// Create a directory (and any missing parents) inside the sandbox
    ///
    /// Idempotent. Returns the absolute path of the directory.
    pub fn create_directory(&self, name: &str) -> Result<PathBuf, SandboxError> {
        let path = self.resolve_path(name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Create every directory in `names`, in order
    ///
    /// Not atomic: when one entry fails, the directories created before it
    /// remain.
    pub fn create_directories<I, S>(&self, names: I) -> Result<Vec<PathBuf>, SandboxError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.create_directory(name.as_ref()))
            .collect()
    }

    /// Create an empty file (and any missing parent directories)
    ///
    /// An existing file at `name` is truncated. Returns the absolute path.
    pub fn create_file(&self, name: &str) -> Result<PathBuf, SandboxError> {
        let path = self.resolve_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(&path)?;
        Ok(path)
    }

    /// Create an empty file with a random name, returning its path
    pub fn create_temp_file(&self) -> Result<PathBuf, SandboxError> {
        let path = self.get_temp_file();
        File::create(&path)?;
        Ok(path)
    }

    /// Reserve a random path inside the sandbox without creating anything
    pub fn get_temp_file(&self) -> PathBuf {
        self.directory.join(Uuid::new_v4().to_string())
    }

    /// Copy a single file from the locator into the sandbox
    ///
    /// Fails with `NotFound` when the locator does not know the file; nothing
    /// is copied in that case. Destination-directory creation is delegated to
    /// the backend: the folder backend creates missing parents, the resource
    /// backend does not.
    pub fn provide_file(&self, name: &str) -> Result<PathBuf, SandboxError> {
        if !self.locator.exists(name) {
            return Err(SandboxError::NotFound(name.to_string()));
        }

        let destination = self.resolve_path(name);
        self.locator.copy_to(name, &destination)?;

        Ok(destination)
    }

    /// Copy a directory tree from the locator into the sandbox
    ///
    /// Every file the locator enumerates under `name` is copied, preserving
    /// its relative path; intermediate directories are created as needed. An
    /// empty enumeration still creates the (empty) directory. The existence
    /// check and the copy are not atomic; a file deleted in between surfaces
    /// as a copy error.
    pub fn provide_directory(&self, name: &str) -> Result<PathBuf, SandboxError> {
        let files = self.locator.enumerate(name);
        let directory = self.resolve_path(name);

        if files.is_empty() {
            fs::create_dir_all(&directory)?;
            return Ok(directory);
        }

        debug!("Providing {} files under {:?}", files.len(), name);
        for file in files {
            if !self.locator.exists(&file) {
                return Err(SandboxError::NotFound(file));
            }

            let destination = self.resolve_path(&file);
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            self.locator.copy_to(&file, &destination)?;
        }

        Ok(directory)
    }
}

impl Drop for FileSandbox {
    fn drop(&mut self) {
        // Best-effort cleanup; an already-removed directory is fine
        if let Err(err) = fs::remove_dir_all(&self.directory) {
            if self.directory.exists() {
                warn!(
                    "Failed to remove sandbox directory {}: {}",
                    self.directory.display(),
                    err
                );
            }
        }
    }
}
