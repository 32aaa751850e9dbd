use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{FileLocator, ResourceBundle};
use crate::paths::PathNormalizer;
use crate::sandbox::SandboxError;

// Auto-generated settings blob that resource compilers emit alongside real
// resources; it never corresponds to a file.
const SETTINGS_PLACEHOLDER: &str = "Properties.Resources.resources";

/// File locator serving files embedded in a compiled resource bundle
///
/// Resources are addressed by dotted names of the form
/// `Namespace.sub.dir.file.ext`. The locator converts logical relative paths
/// into that scheme and recovers paths back out of it when enumerating.
pub struct ResourceLocator {
    namespace: String,
    bundle: ResourceBundle,
}

impl ResourceLocator {
    /// Create a locator over `bundle`, addressing resources under `namespace`
    ///
    /// Fails with `InvalidArgument` when `namespace` is empty.
    pub fn new(
        namespace: impl Into<String>,
        bundle: ResourceBundle,
    ) -> Result<Self, SandboxError> {
        let namespace = namespace.into();
        if namespace.is_empty() {
            return Err(SandboxError::InvalidArgument(
                "namespace is empty".to_string(),
            ));
        }
        Ok(Self { namespace, bundle })
    }

    /// Dotted resource name addressing `file_name` inside the bundle
    fn full_resource_name(&self, file_name: &str) -> String {
        format!("{}.{}", self.namespace, PathNormalizer::to_dotted(file_name))
    }

    /// Recover the logical file path encoded in a resource name
    ///
    /// Returns `None` for names outside this locator's namespace and for the
    /// auto-generated settings placeholder.
    fn path_from_resource(&self, resource_name: &str) -> Option<String> {
        let name = resource_name
            .strip_prefix(&self.namespace)?
            .strip_prefix('.')?;

        if name == SETTINGS_PLACEHOLDER {
            return None;
        }

        Some(PathNormalizer::from_dotted(name))
    }
}

impl FileLocator for ResourceLocator {
    fn exists(&self, file_name: &str) -> bool {
        self.bundle
            .open(&self.full_resource_name(file_name))
            .is_some()
    }

    fn enumerate(&self, path: &str) -> Vec<String> {
        let path = PathNormalizer::strip_root_prefix(path);
        let resource_prefix = self.full_resource_name(path);
        let dir_prefix = PathNormalizer::directory_prefix(path);

        // The resource-name prefix alone over-matches: a query for directory
        // "test" also matches "testOther.txt". Filtering the recovered paths
        // against the separator-terminated directory prefix settles it.
        self.bundle
            .names()
            .filter(|name| name.starts_with(&resource_prefix))
            .filter_map(|name| self.path_from_resource(name))
            .filter(|file| file.starts_with(&dir_prefix))
            .collect()
    }

    fn copy_to(&self, file_name: &str, destination: &Path) -> Result<(), SandboxError> {
        let resource_name = self.full_resource_name(file_name);
        let data = self
            .bundle
            .open(&resource_name)
            .ok_or(SandboxError::NotFound(resource_name))?;

        // Unlike the folder backend, the destination's parent directory must
        // already exist.
        let mut file = File::create(destination)?;
        file.write_all(data)?;

        Ok(())
    }
}
