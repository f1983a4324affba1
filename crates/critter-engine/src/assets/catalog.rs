use std::collections::HashMap;
use crate::api::types::Resource;
use crate::assets::manifest::ResourceManifest;
use crate::host::traits::ResourceStore;

/// Category-keyed resource lookup, built from a [`ResourceManifest`].
///
/// A ready-made [`ResourceStore`] for hosts that keep their resources in
/// a manifest file; hosts with their own storage implement the trait
/// directly.
pub struct ResourceCatalog {
    images: HashMap<String, Vec<Resource>>,
    sounds: HashMap<String, Vec<Resource>>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
            sounds: HashMap::new(),
        }
    }

    /// Build a catalog from a parsed manifest.
    pub fn from_manifest(manifest: &ResourceManifest) -> Self {
        let mut catalog = Self::new();
        for (category, entry) in &manifest.categories {
            for path in &entry.images {
                catalog.add_image(category, path);
            }
            for path in &entry.sounds {
                catalog.add_sound(category, path);
            }
        }
        catalog
    }

    /// Register an image under a category.
    pub fn add_image(&mut self, category: impl Into<String>, path: impl Into<String>) {
        self.images
            .entry(category.into())
            .or_default()
            .push(Resource::new(path));
    }

    /// Register a sound under a category.
    pub fn add_sound(&mut self, category: impl Into<String>, path: impl Into<String>) {
        self.sounds
            .entry(category.into())
            .or_default()
            .push(Resource::new(path));
    }
}

impl ResourceStore for ResourceCatalog {
    fn images(&self, category: &str) -> &[Resource] {
        self.images.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    fn sounds(&self, category: &str) -> &[Resource] {
        self.sounds.get(category).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
