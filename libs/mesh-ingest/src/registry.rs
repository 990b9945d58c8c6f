//! # Loader Registry
//!
//! Explicit map from lowercase file extension to loader. Built once and
//! passed to whoever needs to load meshes; there is no global registration.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use voxel_core::Mesh;

use crate::error::{IngestError, IngestResult};
use crate::loader::MeshLoader;
use crate::stl::StlLoader;

/// Dispatches mesh loading by file extension.
///
/// # Example
///
/// ```rust
/// use mesh_ingest::LoaderRegistry;
///
/// let registry = LoaderRegistry::with_defaults();
/// assert!(registry.loader_for(".STL").is_some());
/// assert!(registry.loader_for("obj").is_none());
/// ```
#[derive(Clone, Default)]
pub struct LoaderRegistry {
    loaders: HashMap<String, Arc<dyn MeshLoader>>,
}

impl LoaderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in loader.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(StlLoader::new()));
        registry
    }

    /// Registers `loader` for each of its extensions, replacing any loader
    /// previously registered for them.
    pub fn register(&mut self, loader: Arc<dyn MeshLoader>) {
        for extension in loader.supported_extensions() {
            let key = normalize_extension(extension);
            if self.loaders.insert(key.clone(), Arc::clone(&loader)).is_some() {
                log::debug!("replaced loader for .{key}");
            }
        }
    }

    /// Looks up the loader for an extension, with or without the leading dot.
    pub fn loader_for(&self, extension: &str) -> Option<&Arc<dyn MeshLoader>> {
        self.loaders.get(&normalize_extension(extension))
    }

    /// Registered extensions, sorted, with a leading dot.
    pub fn supported_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.loaders.keys().map(|e| format!(".{e}")).collect();
        extensions.sort();
        extensions
    }

    /// Returns true if `path` has an extension with a registered loader.
    pub fn can_load(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.loader_for(e).is_some())
    }

    /// Loads the mesh at `path` with the loader for its extension.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` when no loader matches, otherwise whatever the
    /// loader returns.
    pub fn load(&self, path: impl AsRef<Path>) -> IngestResult<Mesh> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(normalize_extension)
            .unwrap_or_default();

        let loader = self
            .loaders
            .get(&extension)
            .ok_or_else(|| IngestError::UnsupportedFormat {
                extension: extension.clone(),
                supported: self.supported_extensions(),
            })?;

        log::info!("loading {}", path.display());
        loader.load_triangles(path)
    }
}

impl std::fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderRegistry")
            .field("extensions", &self.supported_extensions())
            .finish()
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use voxel_core::Triangle;

    struct FixedLoader;

    impl MeshLoader for FixedLoader {
        fn supported_extensions(&self) -> &[&'static str] {
            &[".fix", ".FIX2"]
        }

        fn load_triangles(&self, _path: &Path) -> IngestResult<Mesh> {
            Ok(Mesh::from_triangles(vec![Triangle::new(
                glam::DVec3::ZERO,
                glam::DVec3::X,
                glam::DVec3::Y,
            )]))
        }
    }

    #[test]
    fn test_defaults_have_stl() {
        let registry = LoaderRegistry::with_defaults();
        assert_eq!(registry.supported_extensions(), vec![".stl".to_string()]);
        assert!(registry.can_load("Model.STL"));
        assert!(!registry.can_load("model.obj"));
        assert!(!registry.can_load("model"));
    }

    #[test]
    fn test_register_custom_loader() {
        let mut registry = LoaderRegistry::with_defaults();
        registry.register(Arc::new(FixedLoader));
        assert_eq!(
            registry.supported_extensions(),
            vec![".fix".to_string(), ".fix2".to_string(), ".stl".to_string()]
        );

        let mesh = registry.load("anything.fix2").unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let registry = LoaderRegistry::with_defaults();
        match registry.load("model.obj") {
            Err(IngestError::UnsupportedFormat {
                extension,
                supported,
            }) => {
                assert_eq!(extension, "obj");
                assert_eq!(supported, vec![".stl".to_string()]);
            }
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension() {
        let err = LoaderRegistry::with_defaults().load("README").unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { ref extension, .. } if extension.is_empty()));
    }

    #[test]
    fn test_load_dispatches_to_stl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("part.StL");
        fs::write(
            &path,
            "solid p\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 3 0 0\nvertex 0 3 0\nendloop\nendfacet\nendsolid p\n",
        )
        .unwrap();

        let mesh = LoaderRegistry::with_defaults().load(&path).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }
}
