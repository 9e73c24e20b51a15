use crate::level::LevelStore;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the config file looked up in the working directory and in the
/// user config directory
const CONFIG_FILE: &str = "editor.json";

/// Editor settings, every field optional in the JSON file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixel size of one grid cell
    pub cell_size: u32,
    /// Grid columns visible on screen
    pub columns: u32,
    /// Grid rows visible on screen
    pub rows: u32,
    /// Extra rows below the grid for the status strip
    pub status_rows: u32,
    pub target_fps: u32,
    /// How long the brush preview stays up after a change
    pub flash_ms: u64,
    pub levels_dir: PathBuf,
    pub presets_dir: PathBuf,
    pub tiles_dir: PathBuf,
    pub level_extension: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            cell_size: 50,
            columns: 16,
            rows: 16,
            status_rows: 2,
            target_fps: 60,
            flash_ms: 500,
            levels_dir: PathBuf::from("assets/levels"),
            presets_dir: PathBuf::from("assets/presets"),
            tiles_dir: PathBuf::from("assets/tiles"),
            level_extension: "tilemap".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: EditorConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load the first config found, falling back to defaults
    ///
    /// Looks in `./editor.json`, then `<config dir>/level_editor/editor.json`.
    /// A file that fails to parse is reported and skipped.
    pub fn load() -> Self {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("level_editor").join(CONFIG_FILE));
        }

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => warn!("Ignoring config {}: {}", path.display(), e),
            }
        }

        Self::default()
    }

    /// Window size in pixels: the grid plus the status strip
    pub fn screen_size(&self) -> (u32, u32) {
        (
            self.columns * self.cell_size,
            (self.rows + self.status_rows) * self.cell_size,
        )
    }

    pub fn level_store(&self) -> LevelStore {
        LevelStore::new(&self.levels_dir, &self.presets_dir, &self.level_extension)
    }
}
