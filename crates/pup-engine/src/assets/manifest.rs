use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Asset manifest listing every image a game may load.
/// Loaded from a JSON file at startup; an image's id is its index in `images`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
}

/// Describes a single bitmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Relative path to the PNG file (e.g., "assets/player/idle/1.png").
    pub path: String,
    /// Native width in pixels.
    pub width: f64,
    /// Native height in pixels.
    pub height: f64,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "images": [
                { "path": "assets/player/idle/1.png", "width": 230, "height": 148 },
                { "path": "assets/player/idle/2.png", "width": 230, "height": 148 }
            ]
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.images[1].path, "assets/player/idle/2.png");
        assert_eq!(manifest.images[0].width, 230.0);
    }

    #[test]
    fn missing_images_defaults_to_empty() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.images.is_empty());
    }

    #[test]
    fn malformed_json_is_a_manifest_error() {
        let err = AssetManifest::from_json("{ \"images\": 3 }").unwrap_err();
        assert!(matches!(err, EngineError::Manifest(_)));
    }

    #[test]
    fn serializes_back_to_json() {
        let manifest = AssetManifest {
            images: vec![ImageDescriptor {
                path: "tile.png".into(),
                width: 25.0,
                height: 25.0,
            }],
        };
        let json = manifest.to_json().unwrap();
        let parsed = AssetManifest::from_json(&json).unwrap();
        assert_eq!(parsed.images[0].path, "tile.png");
    }
}
