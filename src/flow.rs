//! Menu flow
//!
//! Top-level navigation: main menu, then either editing an existing level
//! or creating a new one from a preset, then persisting the session.
//! Every screen is a widget run to completion; a cancelled widget means
//! the run flag was cleared, so the flow returns and lets the caller's
//! loop see the flag.

use crate::config::EditorConfig;
use crate::editor::edit_level;
use crate::gui::{run_widget, Alert, Choice, MainMenuChoice, MultiChoice, NewLevelChoice, Outcome, TextPrompt, Widget};
use crate::level::{LevelId, LevelStore};
use crate::render::Frontend;
use crate::run_flag::RunFlag;
use crate::tile::{Grid, Preset, TileId};
use std::time::Duration;
use tracing::{error, info, warn};

/// How long error alerts stay up
const ALERT_DURATION: Duration = Duration::from_secs(2);
/// Brief confirmation shown before picking a preset
const NEW_LEVEL_ALERT: Duration = Duration::from_millis(100);

pub struct MenuFlow<'a, F: Frontend> {
    frontend: &'a mut F,
    store: &'a LevelStore,
    config: &'a EditorConfig,
    max_tile: TileId,
    run: &'a RunFlag,
}

impl<'a, F: Frontend> MenuFlow<'a, F> {
    pub fn new(
        frontend: &'a mut F,
        store: &'a LevelStore,
        config: &'a EditorConfig,
        max_tile: TileId,
        run: &'a RunFlag,
    ) -> Self {
        MenuFlow {
            frontend,
            store,
            config,
            max_tile,
            run,
        }
    }

    /// Show the main menu until EXIT is chosen or the window closes
    pub fn run(&mut self) -> Result<(), String> {
        while self.run.is_running() {
            let Outcome::Selected(choice) = self.show(&mut MultiChoice::<MainMenuChoice>::new())? else {
                break;
            };

            match choice {
                MainMenuChoice::Exit => {
                    info!("Exit selected");
                    self.run.stop();
                }
                MainMenuChoice::Edit => self.edit_existing()?,
                MainMenuChoice::New => self.create_new()?,
            }
        }
        Ok(())
    }

    fn show<W: Widget>(&mut self, widget: &mut W) -> Result<Outcome<W::Output>, String> {
        run_widget(widget, &mut *self.frontend, self.run)
    }

    /// Show an alert; returns once it expires, is clicked or is cancelled
    fn alert(&mut self, message: &str, duration: Duration) -> Result<(), String> {
        let start = self.frontend.now();
        self.show(&mut Alert::new(message, duration, start))?;
        Ok(())
    }

    fn edit_existing(&mut self) -> Result<(), String> {
        let Outcome::Selected(text) = self.show(&mut TextPrompt::new("ENTER ID"))? else {
            return Ok(());
        };

        let Some(id) = LevelId::parse(&text).filter(|id| self.store.exists(id)) else {
            info!("No level with id '{}'", text);
            return self.alert("INVALID", ALERT_DURATION);
        };

        match self.store.load(&id) {
            Ok(grid) => self.edit_and_save(grid, &id),
            Err(e) => {
                warn!("Level {} is corrupt: {}", id, e);
                self.alert("CORRUPT", ALERT_DURATION)
            }
        }
    }

    fn create_new(&mut self) -> Result<(), String> {
        let Outcome::Selected(how) = self.show(&mut MultiChoice::<NewLevelChoice>::new())? else {
            return Ok(());
        };

        let id = match how {
            NewLevelChoice::Back => return Ok(()),
            NewLevelChoice::Auto => self.store.next_free_id(),
            NewLevelChoice::Custom => {
                let Outcome::Selected(text) = self.show(&mut TextPrompt::new("ENTER ID"))? else {
                    return Ok(());
                };
                match LevelId::parse(&text) {
                    Some(id) => id,
                    None => return self.alert("INVALID", ALERT_DURATION),
                }
            }
        };

        if self.store.exists(&id) {
            info!("Level {} already exists", id);
            return self.alert("PATH EXISTS", ALERT_DURATION);
        }

        let start = self.frontend.now();
        let created = self.show(&mut Alert::new(&format!("NEW <{}>", id), NEW_LEVEL_ALERT, start))?;
        if created == Outcome::Cancelled {
            return Ok(());
        }

        let Outcome::Selected(preset) = self.show(&mut MultiChoice::<Preset>::new())? else {
            return Ok(());
        };

        let columns = self.config.columns as usize;
        let rows = self.config.rows as usize;
        match self.store.load_preset(preset, columns, rows, self.max_tile) {
            Ok(grid) => {
                info!("Creating level {} from preset {}", id, preset.id());
                self.edit_and_save(grid, &id)
            }
            Err(e) => {
                warn!("Preset {} is corrupt: {}", preset.id(), e);
                self.alert("CORRUPT", ALERT_DURATION)
            }
        }
    }

    fn edit_and_save(&mut self, grid: Grid, id: &LevelId) -> Result<(), String> {
        let result = edit_level(grid, self.max_tile, self.config, &mut *self.frontend, self.run)?;
        if let Err(e) = self.store.save(&result, id) {
            error!("Failed to save level {}: {}", id, e);
            return self.alert("SAVE FAILED", ALERT_DURATION);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_system::InputEvent;
    use crate::testing::{ScriptFrame, ScriptedFrontend};
    use std::fs;
    use tempfile::TempDir;

    // Button centers on an 800x900 screen
    const TOP: (i32, i32) = (400, 270);
    const MIDDLE: (i32, i32) = (400, 405);
    const BOTTOM: (i32, i32) = (400, 540);
    const ALERT: (i32, i32) = (400, 450);

    fn click(at: (i32, i32)) -> ScriptFrame {
        ScriptFrame::click_at(at.0, at.1)
    }

    fn enter_id(id: &str) -> Vec<ScriptFrame> {
        let mut frames = ScriptFrame::typed(id);
        frames.push(ScriptFrame::key(InputEvent::Enter));
        frames
    }

    /// Paint cell (0, 0) with tile 3, then save
    fn paint_and_save() -> Vec<ScriptFrame> {
        vec![
            ScriptFrame::scroll(2),
            ScriptFrame::hold(10, 10),
            ScriptFrame::key(InputEvent::Enter),
            click(TOP),
        ]
    }

    struct Fixture {
        dir: TempDir,
        store: LevelStore,
        config: EditorConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let config = EditorConfig {
                levels_dir: dir.path().join("levels"),
                presets_dir: dir.path().join("presets"),
                ..EditorConfig::default()
            };
            fs::create_dir_all(&config.levels_dir).unwrap();
            fs::create_dir_all(&config.presets_dir).unwrap();
            let store = config.level_store();
            Fixture { dir, store, config }
        }

        fn level_path(&self, id: &str) -> std::path::PathBuf {
            self.dir.path().join("levels").join(format!("{}.tilemap", id))
        }

        fn run(&self, script: Vec<ScriptFrame>) -> (ScriptedFrontend, RunFlag) {
            let run = RunFlag::new();
            let mut frontend = ScriptedFrontend::with_script(script);
            MenuFlow::new(&mut frontend, &self.store, &self.config, 7, &run)
                .run()
                .unwrap();
            (frontend, run)
        }
    }

    #[test]
    fn test_new_custom_level_end_to_end() {
        let fixture = Fixture::new();
        let mut preset_rows = vec![vec!["1"; 16].join(" "); 16];
        preset_rows[0] = format!("1 {}", vec!["5"; 15].join(" "));
        fs::write(fixture.dir.path().join("presets/empty.tilemap"), preset_rows.join("\n")).unwrap();

        let mut script = vec![click(TOP), click(TOP)];
        script.extend(enter_id("7"));
        script.push(ScriptFrame::wait(Duration::from_millis(150)));
        script.push(click(TOP));
        script.extend(paint_and_save());

        let (_, run) = fixture.run(script);
        assert!(!run.is_running());

        let saved = fs::read_to_string(fixture.level_path("7")).unwrap();
        let first_row = saved.lines().next().unwrap();
        assert_eq!(first_row, format!("3 {}", vec!["5"; 15].join(" ")));
        assert_eq!(saved.lines().count(), 16);
        assert!(!saved.ends_with('\n'));
    }

    #[test]
    fn test_auto_id_picks_next_free() {
        let fixture = Fixture::new();
        for id in ["1", "2", "3"] {
            fs::write(fixture.level_path(id), "1").unwrap();
        }

        let mut script = vec![click(TOP), click(MIDDLE)];
        script.push(ScriptFrame::wait(Duration::from_millis(150)));
        script.push(click(BOTTOM));
        script.extend(paint_and_save());

        fixture.run(script);

        let saved = fs::read_to_string(fixture.level_path("4")).unwrap();
        // Built-in BORDER preset: edge tiles are 2, the painted corner is 3
        assert!(saved.starts_with("3 2 2"));
        assert_eq!(fs::read_to_string(fixture.level_path("1")).unwrap(), "1");
    }

    #[test]
    fn test_existing_id_rejected_then_edited() {
        let fixture = Fixture::new();
        fs::write(fixture.level_path("7"), "1 1\n1 1").unwrap();

        // NEW -> CUSTOM -> 7 is refused with an alert
        let mut script = vec![click(TOP), click(TOP)];
        script.extend(enter_id("7"));
        script.push(click(ALERT));
        // Back at the main menu: EDIT -> 7 opens the stored level
        script.push(click(MIDDLE));
        script.extend(enter_id("7"));
        script.extend(paint_and_save());

        let (frontend, _) = fixture.run(script);

        assert_eq!(frontend.remaining(), 0);
        assert_eq!(fs::read_to_string(fixture.level_path("7")).unwrap(), "3 1\n1 1");
    }

    #[test]
    fn test_edit_unknown_id_shows_invalid() {
        let fixture = Fixture::new();

        let mut script = vec![click(MIDDLE)];
        script.extend(enter_id("99"));
        script.push(ScriptFrame::wait(Duration::from_millis(2100)));
        script.push(click(BOTTOM));
        script.push(ScriptFrame::idle());

        let (frontend, run) = fixture.run(script);

        // EXIT was reached from the main menu, leaving the last frame unused
        assert_eq!(frontend.remaining(), 1);
        assert!(!run.is_running());
        assert!(!fixture.level_path("99").exists());
    }

    #[test]
    fn test_edit_corrupt_level_recovers() {
        let fixture = Fixture::new();
        fs::write(fixture.level_path("5"), "1 2\nx 4").unwrap();

        let mut script = vec![click(MIDDLE)];
        script.extend(enter_id("5"));
        script.push(click(ALERT));
        script.push(click(BOTTOM));
        script.push(ScriptFrame::idle());

        let (frontend, _) = fixture.run(script);

        assert_eq!(frontend.remaining(), 1);
        assert_eq!(fs::read_to_string(fixture.level_path("5")).unwrap(), "1 2\nx 4");
    }

    #[test]
    fn test_discard_leaves_file() {
        let fixture = Fixture::new();
        fs::write(fixture.level_path("2"), "1 1\n1 1").unwrap();

        let mut script = vec![click(MIDDLE)];
        script.extend(enter_id("2"));
        script.push(ScriptFrame::hold(10, 10));
        script.push(ScriptFrame::key(InputEvent::Enter));
        script.push(click(MIDDLE));

        fixture.run(script);

        assert_eq!(fs::read_to_string(fixture.level_path("2")).unwrap(), "1 1\n1 1");
    }

    #[test]
    fn test_back_returns_to_main_menu() {
        let fixture = Fixture::new();
        let script = vec![click(TOP), click(BOTTOM), click(BOTTOM), ScriptFrame::idle()];

        let (frontend, run) = fixture.run(script);

        assert_eq!(frontend.remaining(), 1);
        assert!(!run.is_running());
    }

    #[test]
    fn test_empty_custom_id_is_invalid() {
        let fixture = Fixture::new();

        let mut script = vec![click(TOP), click(TOP)];
        script.push(ScriptFrame::key(InputEvent::Enter));
        script.push(click(ALERT));
        script.push(click(BOTTOM));
        script.push(ScriptFrame::idle());

        let (frontend, _) = fixture.run(script);

        assert_eq!(frontend.remaining(), 1);
        assert_eq!(fs::read_dir(fixture.dir.path().join("levels")).unwrap().count(), 0);
    }

    #[test]
    fn test_quit_in_menu_exits_cleanly() {
        let fixture = Fixture::new();
        let (_, run) = fixture.run(vec![ScriptFrame::idle(), ScriptFrame::key(InputEvent::Quit)]);
        assert!(!run.is_running());
    }
}
