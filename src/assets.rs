//! Texture Asset Store
//!
//! Loads every image the screens reference up front and hands them out by
//! logical key (`cardicon`, `home`, `cards/fronts/c1`, ...). Loading fails on
//! the first missing image, so a running game never draws with a hole in it.

use log::debug;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::table::Card;

pub const CARD_ICON: &str = "cardicon";
pub const HOME_ICON: &str = "home";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image {key:?} couldn't be loaded from {path}: {reason}")]
    Load {
        key: String,
        path: String,
        reason: String,
    },

    #[error("no texture loaded for {0:?}")]
    Missing(String),
}

/// Keys of every image loaded at startup
pub fn required_images() -> Vec<String> {
    let mut keys = vec![CARD_ICON.to_string(), HOME_ICON.to_string()];
    keys.extend(Card::all().iter().map(Card::asset_key));
    keys
}

/// `<asset_dir>/images/<key>.png`
pub fn image_path(asset_dir: &Path, key: &str) -> PathBuf {
    asset_dir.join("images").join(format!("{}.png", key))
}

pub struct AssetStore<'a> {
    textures: HashMap<String, Texture<'a>>,
}

impl<'a> AssetStore<'a> {
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        asset_dir: &Path,
    ) -> Result<Self, AssetError> {
        let mut textures = HashMap::new();

        for key in required_images() {
            let path = image_path(asset_dir, &key);
            let texture = texture_creator
                .load_texture(&path)
                .map_err(|reason| AssetError::Load {
                    key: key.clone(),
                    path: path.display().to_string(),
                    reason,
                })?;
            debug!("Loaded {}", path.display());
            textures.insert(key, texture);
        }

        Ok(AssetStore { textures })
    }

    pub fn get(&self, key: &str) -> Result<&Texture<'a>, AssetError> {
        self.textures
            .get(key)
            .ok_or_else(|| AssetError::Missing(key.to_string()))
    }

    pub fn card(&self, card: Card) -> Result<&Texture<'a>, AssetError> {
        self.get(&card.asset_key())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}
