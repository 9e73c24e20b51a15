//! Widget state machine and the loop that drives it
//!
//! Each widget is a small state machine: [`Widget::tick`] consumes one
//! frame of input and either stays pending or resolves with a value.
//! [`run_widget`] is the blocking per-frame loop around it. When the run
//! flag is cleared before the widget resolves, the loop returns
//! [`Outcome::Cancelled`] so callers have to handle shutdown explicitly.

use crate::input_system::FrameInput;
use crate::render::{Frontend, Renderer};
use crate::run_flag::RunFlag;

/// Result of a single tick
#[derive(Debug, Clone, PartialEq)]
pub enum Status<T> {
    Pending,
    Done(T),
}

/// Result of running a widget to completion
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Selected(T),
    /// The run flag was cleared before a value was produced
    Cancelled,
}

pub trait Widget {
    type Output;

    /// Advance by one frame
    fn tick(&mut self, input: &FrameInput) -> Status<Self::Output>;

    /// Draw the current state, including the background
    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String>;
}

/// Run `widget` frame by frame until it resolves or the run flag clears
///
/// Each iteration does one poll, one update, one render and one flip.
pub fn run_widget<W, F>(widget: &mut W, frontend: &mut F, run: &RunFlag) -> Result<Outcome<W::Output>, String>
where
    W: Widget,
    F: Frontend,
{
    while run.is_running() {
        let input = frontend.next_frame(run);
        if let Status::Done(value) = widget.tick(&input) {
            return Ok(Outcome::Selected(value));
        }
        widget.render(frontend)?;
        frontend.present();
    }
    Ok(Outcome::Cancelled)
}
