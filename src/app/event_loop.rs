use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::document::Document;
use crate::watcher::FileWatcher;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Coalesces jump-prompt keystrokes before the preview re-resolves.
///
/// Carries no payload: when the delay elapses the preview reads the
/// latest prompt text from the model, so only the most recent input is
/// ever previewed.
pub(super) struct PreviewDebouncer {
    delay_ms: u64,
    pending: Option<u64>,
}

impl PreviewDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, now_ms: u64) {
        self.pending = Some(now_ms);
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> bool {
        let Some(queued_at) = self.pending else {
            return false;
        };
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            return true;
        }
        false
    }

    pub(super) const fn cancel(&mut self) {
        self.pending = None;
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization, file loading, or
    /// the event loop encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        // Load the document before touching the terminal so read errors
        // print cleanly.
        let document = Document::load(&self.file_path)
            .with_context(|| format!("Failed to load {}", self.file_path.display()))?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — lineleap requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.file_path.clone(),
            document,
            (size.width, size.height),
        );
        model.watch_enabled = self.watch_enabled;
        model.line_numbers = self.line_numbers;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);

        let result = self.event_loop(&mut terminal, &mut model);

        ratatui::restore();

        result
    }

    const fn update_preview_debouncer(
        model: &Model,
        msg: &Message,
        now_ms: u64,
        debouncer: &mut PreviewDebouncer,
    ) {
        match msg {
            Message::JumpInput(_) => {
                if model.jump_active() {
                    debouncer.queue(now_ms);
                }
            }
            Message::JumpCommit | Message::JumpCancel | Message::Quit => {
                debouncer.cancel();
            }
            _ => {}
        }
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut preview_debouncer = PreviewDebouncer::new(75);
        let mut file_watcher = if model.watch_enabled {
            match self.make_file_watcher() {
                Ok(watcher) => Some(watcher),
                Err(err) => {
                    model.watch_enabled = false;
                    model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                    tracing::warn!(
                        path = %model.file_path.display(),
                        error = %err,
                        "file watcher unavailable"
                    );
                    None
                }
            }
        } else {
            None
        };
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                tracing::debug!(width, height, "resize applied");
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            if preview_debouncer.take_ready(now_ms) && model.jump_active() {
                *model = update(std::mem::take(model), Message::JumpPreview);
                needs_render = true;
            }

            if model.watch_enabled
                && file_watcher
                    .as_mut()
                    .is_some_and(FileWatcher::take_change_ready)
            {
                *model = update(std::mem::take(model), Message::FileChanged);
                self.handle_message_side_effects(model, &mut file_watcher, &Message::FileChanged);
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() || preview_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after poll wait so debouncers use accurate times.
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let msg =
                    self.handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                if let Some(msg) = msg {
                    tracing::debug!(?msg, "message");
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    self.handle_message_side_effects(model, &mut file_watcher, &side_msg);
                    Self::update_preview_debouncer(
                        model,
                        &side_msg,
                        event_ms,
                        &mut preview_debouncer,
                    );
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let msg =
                        self.handle_event(&event::read()?, model, drain_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        let side_msg = msg.clone();
                        *model = update(std::mem::take(model), msg);
                        self.handle_message_side_effects(model, &mut file_watcher, &side_msg);
                        Self::update_preview_debouncer(
                            model,
                            &side_msg,
                            drain_ms,
                            &mut preview_debouncer,
                        );
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
