//! Level store for handling level files on disk
//!
//! This module provides the LevelStore struct which handles:
//! - Deriving a file path from a level id
//! - Finding the first unused numeric id
//! - Loading levels and preset templates
//! - Writing finished editing sessions back to disk

use super::LevelId;
use super::error::LevelError;
use super::format::{deserialize, serialize};
use crate::editor::SessionResult;
use crate::tile::{Grid, Preset, TileId};
use crate::gui::Choice;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct LevelStore {
    levels_dir: PathBuf,
    presets_dir: PathBuf,
    extension: String,
}

impl LevelStore {
    pub fn new(levels_dir: impl AsRef<Path>, presets_dir: impl AsRef<Path>, extension: &str) -> Self {
        LevelStore {
            levels_dir: levels_dir.as_ref().to_path_buf(),
            presets_dir: presets_dir.as_ref().to_path_buf(),
            extension: extension.to_string(),
        }
    }

    /// `<levels_dir>/<id>.<ext>`
    pub fn path_for(&self, id: &LevelId) -> PathBuf {
        self.levels_dir.join(format!("{}.{}", id, self.extension))
    }

    pub fn exists(&self, id: &LevelId) -> bool {
        self.path_for(id).exists()
    }

    /// First numeric id, counting up from 1, with no file on disk
    pub fn next_free_id(&self) -> LevelId {
        let mut candidate = 1;
        loop {
            let id = LevelId::from_number(candidate);
            if !self.exists(&id) {
                return id;
            }
            candidate += 1;
        }
    }

    pub fn load(&self, id: &LevelId) -> Result<Grid, LevelError> {
        let path = self.path_for(id);
        let grid = deserialize(&fs::read_to_string(&path)?)?;
        info!("Loaded level {} ({}x{})", id, grid.width(), grid.height());
        Ok(grid)
    }

    /// Load a preset template, generating it when the file is missing
    pub fn load_preset(
        &self,
        preset: Preset,
        width: usize,
        height: usize,
        max_tile: TileId,
    ) -> Result<Grid, LevelError> {
        let path = self.presets_dir.join(format!("{}.{}", preset.id(), self.extension));
        if !path.exists() {
            warn!("Preset file {} not found, using built-in {}", path.display(), preset.label());
            return Ok(preset.builtin(width, height, max_tile));
        }
        deserialize(&fs::read_to_string(&path)?)
    }

    /// Persist the result of an editing session under `id`
    pub fn save(&self, result: &SessionResult, id: &LevelId) -> Result<bool, LevelError> {
        save_level(result, &self.path_for(id))
    }
}

/// Write a saved session to `path`, overwriting any existing file
///
/// A discarded session performs no I/O at all. Returns whether a file was
/// written.
pub fn save_level(result: &SessionResult, path: &Path) -> Result<bool, LevelError> {
    let grid = match result {
        SessionResult::Save(grid) => grid,
        SessionResult::Discard => {
            info!("Discarded changes to {}", path.display());
            return Ok(false);
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serialize(grid))?;
    info!("Level saved to: {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, LevelStore) {
        let dir = TempDir::new().unwrap();
        let store = LevelStore::new(dir.path().join("levels"), dir.path().join("presets"), "tilemap");
        fs::create_dir_all(dir.path().join("levels")).unwrap();
        fs::create_dir_all(dir.path().join("presets")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_path_for() {
        let store = LevelStore::new("assets/levels", "assets/presets", "tilemap");
        let id = LevelId::parse("7").unwrap();
        assert_eq!(store.path_for(&id), PathBuf::from("assets/levels/7.tilemap"));
    }

    #[test]
    fn test_next_free_id_skips_existing() {
        let (dir, store) = setup_store();
        for n in 1..=3 {
            fs::write(dir.path().join(format!("levels/{}.tilemap", n)), "1").unwrap();
        }

        let id = store.next_free_id();
        assert_eq!(id.as_str(), "4");
        assert!(!store.path_for(&id).exists());
    }

    #[test]
    fn test_next_free_id_fills_gap() {
        let (dir, store) = setup_store();
        fs::write(dir.path().join("levels/2.tilemap"), "1").unwrap();
        assert_eq!(store.next_free_id().as_str(), "1");
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, store) = setup_store();
        let id = LevelId::from_number(5);
        let mut grid = Grid::new(3, 2, 1);
        grid.set(2, 1, 4);

        assert!(store.save(&SessionResult::Save(grid.clone()), &id).unwrap());
        assert_eq!(fs::read_to_string(store.path_for(&id)).unwrap(), "1 1 1\n1 1 4");
        assert_eq!(store.load(&id).unwrap(), grid);
    }

    #[test]
    fn test_save_overwrites() {
        let (_dir, store) = setup_store();
        let id = LevelId::from_number(1);
        fs::write(store.path_for(&id), "9 9 9 9\n9 9 9 9\n9 9 9 9").unwrap();

        store.save(&SessionResult::Save(Grid::new(1, 1, 2)), &id).unwrap();
        assert_eq!(fs::read_to_string(store.path_for(&id)).unwrap(), "2");
    }

    #[test]
    fn test_discard_does_not_create_file() {
        let (_dir, store) = setup_store();
        let id = LevelId::from_number(8);

        assert!(!store.save(&SessionResult::Discard, &id).unwrap());
        assert!(!store.path_for(&id).exists());
    }

    #[test]
    fn test_discard_leaves_existing_file() {
        let (_dir, store) = setup_store();
        let id = LevelId::from_number(8);
        fs::write(store.path_for(&id), "1 2\n3 4").unwrap();

        assert!(!store.save(&SessionResult::Discard, &id).unwrap());
        assert_eq!(fs::read_to_string(store.path_for(&id)).unwrap(), "1 2\n3 4");
    }

    #[test]
    fn test_save_creates_levels_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh/levels/1.tilemap");
        assert!(save_level(&SessionResult::Save(Grid::new(2, 2, 1)), &path).unwrap());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_level() {
        let (_dir, store) = setup_store();
        let id = LevelId::from_number(3);
        fs::write(store.path_for(&id), "1 2\nfoo 4").unwrap();
        assert!(matches!(store.load(&id), Err(LevelError::Parse { line: 2, .. })));
    }

    #[test]
    fn test_preset_from_file() {
        let (dir, store) = setup_store();
        fs::write(dir.path().join("presets/filled.tilemap"), "3 3\n3 3").unwrap();

        let grid = store.load_preset(Preset::Filled, 16, 16, 7).unwrap();
        assert_eq!(grid, Grid::new(2, 2, 3));
    }

    #[test]
    fn test_preset_fallback() {
        let (_dir, store) = setup_store();
        let grid = store.load_preset(Preset::Empty, 16, 16, 7).unwrap();
        assert_eq!(grid, Grid::new(16, 16, 1));
    }
}
