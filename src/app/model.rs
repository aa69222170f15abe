use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::config::LineNumbers;
use crate::document::Document;
use crate::jump::JumpTarget;
use crate::ui::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// State of an open jump prompt.
///
/// `origin` is the one-based cursor line captured when the prompt
/// opened; it never changes while the prompt is open, so every
/// keystroke's offset is measured from the same place rather than from
/// the previous preview. `prior_numbers` remembers the gutter mode the
/// prompt displaced — [`Model::close_jump`] puts it back on every exit
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpPrompt {
    /// Raw prompt text as typed so far.
    pub input: String,
    /// One-based line the prompt was opened on.
    pub origin: usize,
    /// Debounced preview target, if the current text resolves to one.
    pub preview: Option<JumpTarget>,
    prior_numbers: LineNumbers,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The loaded document
    pub document: Document,
    /// Viewport managing scroll position
    pub viewport: Viewport,
    /// Path to the source file
    pub file_path: PathBuf,
    /// Zero-based cursor line
    pub cursor_line: usize,
    /// Line-number gutter mode
    pub line_numbers: LineNumbers,
    /// Open jump prompt, if any
    pub jump: Option<JumpPrompt>,
    /// Whether file watching is enabled
    pub watch_enabled: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("cursor_line", &self.cursor_line)
            .field("line_numbers", &self.line_numbers)
            .field("watch_enabled", &self.watch_enabled)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(file_path: PathBuf, document: Document, terminal_size: (u16, u16)) -> Self {
        let total_lines = document.line_count();

        Self {
            document,
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(1),
                total_lines,
            ),
            file_path,
            cursor_line: 0,
            line_numbers: LineNumbers::Absolute,
            jump: None,
            watch_enabled: false,
            help_visible: false,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }

    /// Zero-based index of the last document line.
    pub fn max_line(&self) -> usize {
        self.document.line_count().saturating_sub(1)
    }

    pub const fn jump_active(&self) -> bool {
        self.jump.is_some()
    }

    /// Open the jump prompt at the current cursor position.
    ///
    /// Captures the one-based origin, seeds the input with it, and
    /// forces relative gutter numbers so typed offsets can be read off
    /// the screen. No-op when a prompt is already open.
    pub fn open_jump(&mut self) {
        if self.jump.is_some() {
            return;
        }
        let origin = self.cursor_line + 1;
        self.jump = Some(JumpPrompt {
            input: origin.to_string(),
            origin,
            preview: None,
            prior_numbers: self.line_numbers,
        });
        self.line_numbers = LineNumbers::Relative;
    }

    /// Close the jump prompt and restore the displaced gutter mode.
    ///
    /// This is the single restore path - commit, cancel, and
    /// quit-with-prompt-open all come through here.
    pub fn close_jump(&mut self) -> Option<JumpPrompt> {
        let prompt = self.jump.take()?;
        self.line_numbers = prompt.prior_numbers;
        Some(prompt)
    }

    /// Move the cursor, clamped to the document, and keep it visible.
    pub fn place_cursor(&mut self, line: usize) {
        self.cursor_line = line.min(self.max_line());
        self.viewport.ensure_visible(self.cursor_line);
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Re-read the viewed file and clamp cursor and viewport to the new
    /// length.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn reload_from_disk(&mut self) -> Result<()> {
        self.document = Document::load(&self.file_path)?;
        self.viewport.set_total_lines(self.document.line_count());
        self.place_cursor(self.cursor_line);
        Ok(())
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self {
            document: Document::empty(),
            viewport: Viewport::new(80, 24, 0),
            file_path: PathBuf::new(),
            cursor_line: 0,
            line_numbers: LineNumbers::Absolute,
            jump: None,
            watch_enabled: false,
            help_visible: false,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }
}
