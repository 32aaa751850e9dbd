mod bundle;
mod folder;
mod resource;


pub use bundle::{ResourceBundle, ResourceBundleBuilder};
pub use folder::FolderLocator;
pub use resource::ResourceLocator;

use std::path::Path;

use crate::sandbox::SandboxError;

/// Capability for locating files addressed by logical relative paths
///
/// A locator serves a fixed backing store (a directory on disk, a resource
/// bundle) and answers three questions about it: does a file exist, which
/// files live under a path, and how to copy one out. Paths are
/// separator-style-insensitive; `test/a.txt` and `test\a.txt` address the
/// same entry. Locators hold no mutable state after construction and are safe
/// to share between sandbox instances.
pub trait FileLocator: Send + Sync {
    /// Whether a file exists at the given logical path
    fn exists(&self, file_name: &str) -> bool;

    /// List all files under a logical path
    ///
    /// A directory path yields every file beneath it, reported relative to the
    /// backend root; a file path yields just that file; anything else yields
    /// an empty list. Never fails for a non-existent path, so "nothing there"
    /// and "empty directory" look the same to callers. Ordering is
    /// unspecified.
    fn enumerate(&self, path: &str) -> Vec<String>;

    /// Copy the file at `file_name` to `destination`
    fn copy_to(&self, file_name: &str, destination: &Path) -> Result<(), SandboxError>;
}

/// Locator with no backing store
///
/// Every existence check misses and every enumeration is empty. Useful for
/// sandboxes that only need scratch files.
pub struct EmptyLocator;

impl FileLocator for EmptyLocator {
    fn exists(&self, _file_name: &str) -> bool {
        false
    }

    fn enumerate(&self, _path: &str) -> Vec<String> {
        Vec::new()
    }

    fn copy_to(&self, file_name: &str, _destination: &Path) -> Result<(), SandboxError> {
        Err(SandboxError::NotFound(file_name.to_string()))
    }
}
