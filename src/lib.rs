// Public API exports
pub mod locator;
pub mod paths;
pub mod sandbox;

// Re-export main types for convenience
pub use locator::{
    EmptyLocator, FileLocator, FolderLocator, ResourceBundle, ResourceBundleBuilder,
    ResourceLocator,
};
pub use paths::PathNormalizer;
pub use sandbox::{FileSandbox, SandboxError};
