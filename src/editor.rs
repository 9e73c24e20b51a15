//! Grid editing session
//!
//! The session owns the tile grid while it is being painted. It has two
//! states: `Editing`, where scroll changes the brush and a held primary
//! button paints the cell under the cursor every frame, and `ConfirmExit`,
//! entered on Enter, which shows SAVE / DISCARD / RESUME.
//!
//! Closing the window while editing ends the session without a decision;
//! the in-memory grid is dropped and nothing is written.

use crate::config::EditorConfig;
use crate::gui::{run_widget, ExitChoice, MultiChoice, Outcome, Status, Widget, BACKGROUND_COLOR};
use crate::input_system::{FrameInput, InputEvent};
use crate::render::{Frontend, Renderer};
use crate::run_flag::RunFlag;
use crate::text::draw_simple_text;
use crate::tile::{clamp, Grid, TileId};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::time::Duration;
use tracing::{debug, info, warn};

const HIGHLIGHT_COLOR: Color = Color::RGBA(255, 255, 255, 100);
const STATUS_TEXT_COLOR: Color = Color::RGB(30, 30, 40);
const STATUS_TEXT_SCALE: u32 = 4;

/// What an editing session hands back to persistence
#[derive(Debug, Clone, PartialEq)]
pub enum SessionResult {
    Save(Grid),
    /// Nothing should be written
    Discard,
}

/// Enlarged preview of the brush shown briefly after it changes
#[derive(Debug, Clone, Copy)]
struct Flash {
    tile: TileId,
    remaining: Duration,
}

enum EditorState {
    Editing,
    ConfirmExit(MultiChoice<ExitChoice>),
}

pub struct EditorSession {
    grid: Grid,
    brush: TileId,
    max_tile: TileId,
    cell_size: u32,
    flash_duration: Duration,
    flash: Option<Flash>,
    mouse: (i32, i32),
    cursor: (usize, usize),
    state: EditorState,
}

impl EditorSession {
    /// Start editing `grid` with brush 1
    pub fn new(grid: Grid, max_tile: TileId, cell_size: u32, flash_duration: Duration) -> Self {
        EditorSession {
            grid,
            brush: 1,
            max_tile: max_tile.max(1),
            cell_size,
            flash_duration,
            flash: None,
            mouse: (0, 0),
            cursor: (0, 0),
            state: EditorState::Editing,
        }
    }

    #[allow(dead_code)] // Session inspection for tests
    pub fn brush(&self) -> TileId {
        self.brush
    }

    #[allow(dead_code)] // Session inspection for tests
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell under the cursor as (col, row)
    #[allow(dead_code)] // Session inspection for tests
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Texture currently shown as the brush preview, if any
    #[allow(dead_code)] // Session inspection for tests
    pub fn flash_tile(&self) -> Option<TileId> {
        self.flash.map(|flash| flash.tile)
    }

    #[allow(dead_code)] // Session inspection for tests
    pub fn is_confirming(&self) -> bool {
        matches!(self.state, EditorState::ConfirmExit(_))
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn change_brush(&mut self, delta: i32) {
        let brush = clamp(self.brush as i64 + delta as i64, 1, self.max_tile as i64);
        self.brush = brush as TileId;
        self.flash = Some(Flash {
            tile: self.brush,
            remaining: self.flash_duration,
        });
        debug!("Brush changed by {} to tile {}", delta, self.brush);
    }

    fn decay_flash(&mut self, dt: Duration) {
        if let Some(flash) = &mut self.flash {
            flash.remaining = flash.remaining.saturating_sub(dt);
            if flash.remaining.is_zero() {
                self.flash = None;
            }
        }
    }

    fn cell_rect(&self, col: usize, row: usize) -> Rect {
        let size = self.cell_size;
        Rect::new((col as u32 * size) as i32, (row as u32 * size) as i32, size, size)
    }

    /// Brush tile and number in the strip below the grid
    fn render_status(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        let size = self.cell_size;
        let top = (self.grid.height() as u32 * size) as i32;
        if top >= renderer.screen_size().1 as i32 {
            return Ok(());
        }

        let pad = (size / 4) as i32;
        renderer.draw_tile(self.brush, Rect::new(pad, top + pad, size, size))?;
        draw_simple_text(
            renderer,
            &format!("TILE {}", self.brush),
            pad * 2 + size as i32,
            top + pad + (size as i32 - 7 * STATUS_TEXT_SCALE as i32) / 2,
            STATUS_TEXT_COLOR,
            STATUS_TEXT_SCALE,
        )
    }
}

impl Widget for EditorSession {
    /// Only `Save` or `Discard`; `Resume` is handled internally
    type Output = ExitChoice;

    fn tick(&mut self, input: &FrameInput) -> Status<ExitChoice> {
        if let EditorState::ConfirmExit(menu) = &mut self.state {
            match menu.tick(input) {
                Status::Pending => return Status::Pending,
                Status::Done(ExitChoice::Resume) => {
                    self.state = EditorState::Editing;
                    return Status::Pending;
                }
                Status::Done(choice) => return Status::Done(choice),
            }
        }

        self.mouse = input.mouse;
        self.cursor = self.grid.cell_at(input.mouse.0, input.mouse.1, self.cell_size);

        match input.event {
            Some(InputEvent::Enter) => {
                self.state = EditorState::ConfirmExit(MultiChoice::new());
                return Status::Pending;
            }
            Some(InputEvent::Scroll(delta)) => self.change_brush(delta),
            _ => {}
        }

        self.decay_flash(input.dt);

        // Level-triggered: paints every frame the button is down
        if input.primary_held {
            let (col, row) = self.cursor;
            self.grid.set(col, row, self.brush);
        }

        Status::Pending
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        if let EditorState::ConfirmExit(menu) = &self.state {
            return menu.render(renderer);
        }

        renderer.clear(BACKGROUND_COLOR)?;

        for (row, tiles) in self.grid.rows().iter().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                renderer.draw_tile(tile, self.cell_rect(col, row))?;
            }
        }

        let (col, row) = self.cursor;
        renderer.fill_rect(self.cell_rect(col, row), HIGHLIGHT_COLOR)?;

        if let Some(flash) = self.flash {
            let size = self.cell_size;
            let (mx, my) = self.mouse;
            renderer.draw_tile(
                flash.tile,
                Rect::new(mx, my - 3 * size as i32, size * 2, size * 2),
            )?;
        }

        self.render_status(renderer)
    }
}

/// Run an editing session on `grid` until the user saves, discards or quits
pub fn edit_level<F: Frontend>(
    grid: Grid,
    max_tile: TileId,
    config: &EditorConfig,
    frontend: &mut F,
    run: &RunFlag,
) -> Result<SessionResult, String> {
    let mut session = EditorSession::new(
        grid,
        max_tile,
        config.cell_size,
        Duration::from_millis(config.flash_ms),
    );

    let result = match run_widget(&mut session, frontend, run)? {
        Outcome::Selected(ExitChoice::Save) => SessionResult::Save(session.into_grid()),
        Outcome::Selected(_) => SessionResult::Discard,
        Outcome::Cancelled => {
            warn!("Editor closed without a save decision, unsaved changes lost");
            SessionResult::Discard
        }
    };
    match &result {
        SessionResult::Save(_) => info!("Editing session ended with save"),
        SessionResult::Discard => info!("Editing session ended with discard"),
    }
    Ok(result)
}
