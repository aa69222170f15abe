//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! The jump prompt's control flow lives here: each keystroke replaces
//! the prompt text, the event loop debounces before the preview
//! re-resolves, commit resolves the final text and moves the cursor,
//! cancel discards. The line-number gutter mode displaced while the
//! prompt is open is restored on every exit path.

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{JumpPrompt, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::LineNumbers;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    watch_enabled: bool,
    line_numbers: LineNumbers,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application for the given file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            watch_enabled: false,
            line_numbers: LineNumbers::Absolute,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Enable or disable file watching.
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Set the initial line-number gutter mode.
    pub const fn with_line_numbers(mut self, mode: LineNumbers) -> Self {
        self.line_numbers = mode;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}
