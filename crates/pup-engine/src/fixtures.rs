//! Shared test fixtures.

use std::sync::Arc;

use crate::assets::manifest::{AssetManifest, ImageDescriptor};
use crate::assets::registry::ImageRegistry;
use crate::components::character::{CharacterSheet, PLAYER_SHEET};

/// Registry holding every player image at twice the drawn size.
pub(crate) fn player_registry() -> ImageRegistry {
    let manifest = AssetManifest {
        images: PLAYER_SHEET
            .paths()
            .map(|path| ImageDescriptor {
                path: path.to_string(),
                width: 230.0,
                height: 148.0,
            })
            .collect(),
    };
    ImageRegistry::from_manifest(&manifest).unwrap()
}

pub(crate) fn player_sheet() -> Arc<CharacterSheet> {
    Arc::new(CharacterSheet::load(&player_registry(), &PLAYER_SHEET).unwrap())
}
