//! Process liveness token
//!
//! Every blocking loop in the editor checks this flag once per iteration.
//! Clearing it unwinds the loops one stack frame at a time: the innermost
//! loop exits first, then each caller sees the flag on its next check.

use std::cell::Cell;

/// Shared "keep running" flag, passed by reference into every loop
///
/// Starts out running and is cleared exactly once (window close or EXIT).
/// It is never reset.
#[derive(Debug)]
pub struct RunFlag {
    running: Cell<bool>,
}

impl RunFlag {
    pub fn new() -> Self {
        RunFlag {
            running: Cell::new(true),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Request shutdown of all active loops
    pub fn stop(&self) {
        self.running.set(false);
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}
