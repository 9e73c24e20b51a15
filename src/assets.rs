//! Tile texture loading
//!
//! Every image in the tiles directory is named after the tile id it
//! represents (`1.png`, `2.png`, ...). The table is built once at startup
//! and handed to the frontend by reference.

use crate::tile::TileId;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Tile id encoded in a file name, if any
pub fn tile_id_from_path(path: &Path) -> Option<TileId> {
    let stem = path.file_stem()?.to_str()?;
    match stem.parse::<TileId>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(id),
    }
}

/// Highest brush value the editor allows for a texture table
pub fn max_tile_id<T>(textures: &HashMap<TileId, T>) -> TileId {
    (textures.len() as TileId).max(1)
}

fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

/// Load every `<id>.<ext>` image under `dir`
///
/// Files whose stem isn't a positive integer are skipped with a warning.
/// A missing directory is an error; an empty one yields an empty table.
pub fn load_tile_textures<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    dir: &Path,
) -> Result<HashMap<TileId, Texture<'a>>, String> {
    let entries = fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;

    let mut textures = HashMap::new();
    for entry in entries {
        let path = entry.map_err(|e| e.to_string())?.path();
        if !path.is_file() {
            continue;
        }
        let Some(id) = tile_id_from_path(&path) else {
            warn!("Skipping {}: name is not a tile id", path.display());
            continue;
        };
        textures.insert(id, load_texture(texture_creator, &path)?);
    }

    info!("Loaded {} tile textures from {}", textures.len(), dir.display());
    Ok(textures)
}
