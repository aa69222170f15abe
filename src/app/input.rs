use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::Frame;

use crate::app::{App, Message, Model};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        &self,
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => self.handle_key(*key, model),
            Event::Resize(w, h) => {
                tracing::debug!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(&self, key: event::KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            let _ = key;
            return Some(Message::HideHelp);
        }

        // The open prompt captures every key until commit or cancel.
        if let Some(prompt) = model.jump.as_ref() {
            return match key.code {
                KeyCode::Esc => Some(Message::JumpCancel),
                KeyCode::Enter => Some(Message::JumpCommit),
                KeyCode::Backspace => {
                    let mut next = prompt.input.clone();
                    next.pop();
                    Some(Message::JumpInput(next))
                }
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    let mut next = prompt.input.clone();
                    next.push(c);
                    Some(Message::JumpInput(next))
                }
                _ => None,
            };
        }

        // Normal key handling
        match key.code {
            // Cursor movement
            KeyCode::Char('j') | KeyCode::Down => Some(Message::CursorDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::CursorUp(1)),
            KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::Char('b') | KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::HalfPageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::HalfPageUp)
            }
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),

            // Jump prompt
            KeyCode::Char(':') => Some(Message::JumpStart),

            // Display
            KeyCode::Char('n') => Some(Message::CycleLineNumbers),

            // File
            KeyCode::Char('w') => Some(Message::ToggleWatch),
            KeyCode::Char('R') => Some(Message::ForceReload),
            KeyCode::Char('r') => Some(Message::ForceReload),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            // Quit
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }

            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
