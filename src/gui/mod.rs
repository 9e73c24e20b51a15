//! Screen-Space GUI System
//!
//! Full-screen widgets used by the menu flow and the editor. Every widget
//! is a [`Widget`] state machine: it consumes one [`FrameInput`] per tick
//! and renders itself through a [`Renderer`]. [`run_widget`] drives one to
//! completion and reports [`Outcome::Cancelled`] if the run flag clears
//! first.
//!
//! # Available Components
//!
//! - [`Button`] - hover-aware label, building block for the others
//! - [`MultiChoice`] - three stacked buttons, resolves with a [`Choice`]
//! - [`TextPrompt`] - digit entry with a SUBMIT button
//! - [`Alert`] - message that expires on a wall-clock deadline
//!
//! # Example Usage
//!
//! ```ignore
//! let mut menu = MultiChoice::<MainMenuChoice>::new();
//! match run_widget(&mut menu, &mut frontend, &run)? {
//!     Outcome::Selected(MainMenuChoice::New) => { /* ... */ }
//!     Outcome::Selected(_) => { /* ... */ }
//!     Outcome::Cancelled => return Ok(()),
//! }
//! ```
//!
//! [`FrameInput`]: crate::input_system::FrameInput
//! [`Renderer`]: crate::render::Renderer

pub mod alert;
pub mod button;
pub mod multi_choice;
pub mod text_prompt;
pub mod widget;

pub use alert::Alert;
pub use button::BACKGROUND_COLOR;
pub use multi_choice::{Choice, ExitChoice, MainMenuChoice, MultiChoice, NewLevelChoice};
pub use text_prompt::TextPrompt;
pub use widget::{run_widget, Outcome, Status, Widget};
