use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Asset manifest describing the font and named sprites for a game.
/// Loaded from a JSON file or an embedded string at boot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// The debug-label font.
    pub font: FontDescriptor,
    /// Named sprite lookup: name → image path + logical size.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
}

/// Describes the font asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Path to the font file, resolved by the host.
    pub path: String,
}

/// Describes a named sprite image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Path to the image file, resolved by the host.
    pub path: String,
    /// Logical render size in world units (width, height).
    pub size: [f32; 2],
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "font": { "path": "assets/arial.ttf" },
            "sprites": {
                "player": { "path": "assets/player.png", "size": [6, 12] },
                "rock": { "path": "assets/rock.png", "size": [8, 4] }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.font.path, "assets/arial.ttf");
        assert_eq!(manifest.sprites.len(), 2);
        assert_eq!(manifest.sprites["player"].size, [6.0, 12.0]);
    }

    #[test]
    fn sprites_default_to_empty() {
        let manifest = AssetManifest::from_json(r#"{ "font": { "path": "f.ttf" } }"#).unwrap();
        assert!(manifest.sprites.is_empty());
    }

    #[test]
    fn missing_font_is_an_error() {
        assert!(AssetManifest::from_json(r#"{ "sprites": {} }"#).is_err());
    }
}
