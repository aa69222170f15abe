use crate::app::Model;
use crate::config::LineNumbers;
use crate::jump;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Cursor movement
    /// Move cursor up by n lines
    CursorUp(usize),
    /// Move cursor down by n lines
    CursorDown(usize),
    /// Move cursor up one page
    PageUp,
    /// Move cursor down one page
    PageDown,
    /// Move cursor up half a page
    HalfPageUp,
    /// Move cursor down half a page
    HalfPageDown,
    /// Move cursor to the first line
    GoToTop,
    /// Move cursor to the last line
    GoToBottom,

    // Jump prompt
    /// Open the jump prompt at the current cursor line
    JumpStart,
    /// Replace the jump prompt text
    JumpInput(String),
    /// Recompute the debounced preview from the prompt text
    JumpPreview,
    /// Resolve the prompt text and move the cursor
    JumpCommit,
    /// Discard the prompt without moving
    JumpCancel,

    // Display
    /// Cycle the line-number gutter mode
    CycleLineNumbers,

    // File watching
    /// Toggle file watching
    ToggleWatch,
    /// File changed externally, reload
    FileChanged,
    /// Force reload file
    ForceReload,

    // Help
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Cursor movement
        Message::CursorUp(n) => {
            model.place_cursor(model.cursor_line.saturating_sub(n));
        }
        Message::CursorDown(n) => {
            model.place_cursor(model.cursor_line.saturating_add(n));
        }
        Message::PageUp => {
            let page = model.viewport.height() as usize;
            model.place_cursor(model.cursor_line.saturating_sub(page));
        }
        Message::PageDown => {
            let page = model.viewport.height() as usize;
            model.place_cursor(model.cursor_line.saturating_add(page));
        }
        Message::HalfPageUp => {
            let half = model.viewport.height() as usize / 2;
            model.place_cursor(model.cursor_line.saturating_sub(half));
        }
        Message::HalfPageDown => {
            let half = model.viewport.height() as usize / 2;
            model.place_cursor(model.cursor_line.saturating_add(half));
        }
        Message::GoToTop => {
            model.place_cursor(0);
        }
        Message::GoToBottom => {
            model.place_cursor(model.max_line());
        }

        // Jump prompt
        Message::JumpStart => {
            model.open_jump();
        }
        Message::JumpInput(text) => {
            if let Some(prompt) = &mut model.jump {
                prompt.input = text;
            }
        }
        Message::JumpPreview => {
            let max_line = model.max_line();
            if let Some(prompt) = &mut model.jump {
                // Always resolved against the origin, never the previous
                // preview - offsets do not accumulate across keystrokes.
                prompt.preview = jump::resolve(&prompt.input, prompt.origin);
                if let Some(target) = prompt.preview
                    && target.is_absolute()
                {
                    // Absolute jumps reveal their destination; relative
                    // previews only update the highlight.
                    model.viewport.center_on(target.line.min(max_line));
                }
            }
        }
        Message::JumpCommit => {
            if let Some(prompt) = model.close_jump() {
                // Resolve the final text, not the possibly stale preview.
                if let Some(target) = jump::resolve(&prompt.input, prompt.origin) {
                    model.place_cursor(target.line);
                    model.viewport.center_on(model.cursor_line);
                }
            }
        }
        Message::JumpCancel => {
            model.close_jump();
        }

        // Display
        Message::CycleLineNumbers => {
            if !model.jump_active() {
                model.line_numbers = match model.line_numbers {
                    LineNumbers::Absolute => LineNumbers::Relative,
                    LineNumbers::Relative => LineNumbers::Off,
                    LineNumbers::Off => LineNumbers::Absolute,
                };
            }
        }

        // File watching
        Message::ToggleWatch => {
            model.watch_enabled = !model.watch_enabled;
        }
        // FileChanged/ForceReload: handled in effects (side effect)
        Message::FileChanged | Message::ForceReload => {}

        // Help
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // Window
        Message::Resize(width, height) => {
            model.viewport.resize(width, height.saturating_sub(1));
            model.place_cursor(model.cursor_line);
        }

        // Application
        Message::Quit => {
            // Restore the displaced gutter mode even when quitting with
            // the prompt still open.
            model.close_jump();
            model.should_quit = true;
        }
    }
    model
}
