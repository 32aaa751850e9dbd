use std::collections::HashMap;
use std::io::{Read, Seek};

use zip::ZipArchive;

use crate::paths::PathNormalizer;
use crate::sandbox::SandboxError;

/// Location of a single resource inside the bundle arena
#[derive(Debug, Clone)]
struct ResourceEntry {
    offset: usize,
    length: usize,
}

/// Immutable resource catalog with arena-backed storage
///
/// Stands in for the resource section of a compiled artifact: a read-only
/// snapshot of dotted resource names and their contents, injected into a
/// [`ResourceLocator`](super::ResourceLocator) at construction so lookups stay
/// side-effect-free and testable.
pub struct ResourceBundle {
    /// Single contiguous blob containing all resource data
    arena: Vec<u8>,
    /// Index mapping dotted resource names to arena slices
    index: HashMap<String, ResourceEntry>,
}

/// Mutable builder for constructing a resource bundle
pub struct ResourceBundleBuilder {
    arena: Vec<u8>,
    index: HashMap<String, ResourceEntry>,
    max_resource_size: u64,
    max_total_size: u64,
}

impl ResourceBundleBuilder {
    /// Create a new builder with default limits
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            index: HashMap::new(),
            max_resource_size: 50 * 1024 * 1024, // 50 MB per resource
            max_total_size: 500 * 1024 * 1024,   // 500 MB total
        }
    }

    /// Set maximum individual resource size
    pub fn max_resource_size(mut self, size: u64) -> Self {
        self.max_resource_size = size;
        self
    }

    /// Set maximum total arena size
    pub fn max_total_size(mut self, size: u64) -> Self {
        self.max_total_size = size;
        self
    }

    /// Add a resource under its full dotted name
    ///
    /// A duplicate name overwrites the previous index entry.
    pub fn add(&mut self, name: impl Into<String>, data: &[u8]) -> Result<(), SandboxError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SandboxError::InvalidArgument(
                "resource name is empty".to_string(),
            ));
        }

        if data.len() as u64 > self.max_resource_size {
            return Err(SandboxError::ResourceTooLarge {
                size: data.len() as u64,
                max: self.max_resource_size,
            });
        }

        let new_total = self.arena.len() as u64 + data.len() as u64;
        if new_total > self.max_total_size {
            return Err(SandboxError::ResourceTooLarge {
                size: new_total,
                max: self.max_total_size,
            });
        }

        let offset = self.arena.len();
        self.arena.extend_from_slice(data);
        self.index.insert(
            name,
            ResourceEntry {
                offset,
                length: data.len(),
            },
        );

        Ok(())
    }

    /// Ingest every file in a ZIP archive under the given namespace
    ///
    /// Entry paths are converted to dotted resource names: `testdata/test.txt`
    /// ingested under `demo` becomes `demo.testdata.test.txt`. Directory
    /// entries are skipped.
    pub fn ingest_archive<R: Read + Seek>(
        mut self,
        namespace: &str,
        reader: R,
    ) -> Result<Self, SandboxError> {
        if namespace.is_empty() {
            return Err(SandboxError::InvalidArgument(
                "namespace is empty".to_string(),
            ));
        }

        let mut archive =
            ZipArchive::new(reader).map_err(|e| SandboxError::ArchiveFailed(e.to_string()))?;

        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| SandboxError::ArchiveFailed(e.to_string()))?;

            if file.is_dir() {
                continue;
            }

            let raw_path = file.name().to_string();

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)
                .map_err(|e| SandboxError::ArchiveFailed(e.to_string()))?;

            let name = format!("{}.{}", namespace, PathNormalizer::to_dotted(&raw_path));
            self.add(name, &contents)?;
        }

        Ok(self)
    }

    /// Freeze the builder into an immutable bundle
    pub fn build(self) -> ResourceBundle {
        ResourceBundle {
            arena: self.arena,
            index: self.index,
        }
    }
}

impl Default for ResourceBundleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceBundle {
    /// Open a resource by its full dotted name (zero-copy)
    pub fn open(&self, name: &str) -> Option<&[u8]> {
        self.index
            .get(name)
            .map(|entry| &self.arena[entry.offset..entry.offset + entry.length])
    }

    /// Iterate over all resource names in the bundle
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|name| name.as_str())
    }

    /// Number of resources in the bundle
    pub fn resource_count(&self) -> usize {
        self.index.len()
    }

    /// Total arena size in bytes
    pub fn total_size(&self) -> usize {
        self.arena.len()
    }
}
