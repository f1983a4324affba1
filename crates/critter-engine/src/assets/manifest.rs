use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Resource manifest describing the character's images and sounds per
/// category. Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceManifest {
    /// Category name → resource paths of each kind.
    #[serde(default)]
    pub categories: HashMap<String, CategoryResources>,
}

/// The resources registered under a single category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryResources {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sounds: Vec<String>,
}

impl ResourceManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let json = r#"{
            "categories": {
                "activation": {
                    "images": ["idle/stand.png", "idle/blink.png"],
                    "sounds": ["idle/hello.mp3"]
                },
                "falling_left": {
                    "images": ["fall/left.png"]
                }
            }
        }"#;
        let manifest = ResourceManifest::from_json(json).unwrap();
        assert_eq!(manifest.categories.len(), 2);

        let activation = &manifest.categories["activation"];
        assert_eq!(activation.images.len(), 2);
        assert_eq!(activation.sounds, vec!["idle/hello.mp3"]);

        // Sounds are optional per category
        let falling = &manifest.categories["falling_left"];
        assert!(falling.sounds.is_empty());
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = ResourceManifest::from_json("{}").unwrap();
        assert!(manifest.categories.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ResourceManifest::from_json("{ not json").is_err());
    }
}
