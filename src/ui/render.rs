use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::config::LineNumbers;

use super::{overlays, status};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    render_document(model, frame, area);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_document(model: &Model, frame: &mut Frame, area: Rect) {
    let jump_active = model.jump_active();
    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(jump_active) + u16::from(toast_active);
    // Reserve last line for status bar (+ one jump bar line when active).
    let text_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let jump_area = Rect {
        y: area.y + area.height.saturating_sub(1 + u16::from(jump_active)),
        height: 1,
        ..area
    };
    let toast_area = Rect {
        y: area.y
            + area
                .height
                .saturating_sub(1 + u16::from(jump_active) + u16::from(toast_active)),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    let total_lines = model.document.line_count();
    let gutter_width = line_number_width(total_lines) as usize;
    let preview_line = model
        .jump
        .as_ref()
        .and_then(|prompt| prompt.preview)
        .map(|target| target.line);

    let mut content: Vec<Line> = Vec::new();
    for line_idx in model.viewport.visible_range() {
        let text = model.document.line_at(line_idx).unwrap_or_default();

        let previewed = preview_line == Some(line_idx);
        let on_cursor = line_idx == model.cursor_line;
        let line_style = if previewed {
            // Whole-line highlight for the pending jump target.
            Style::default().bg(Color::Yellow).fg(Color::Black)
        } else if on_cursor {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let mut spans = Vec::new();
        if let Some(label) = gutter_label(model.line_numbers, line_idx, model.cursor_line) {
            let gutter_style = if previewed {
                line_style
            } else if on_cursor {
                line_style.fg(Color::Yellow)
            } else {
                line_style.patch(Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(
                format!("{label:>gutter_width$} "),
                gutter_style,
            ));
        }

        let body = if previewed || on_cursor {
            // Pad so the highlight covers the full row, not just the text.
            pad_to_width(&text, text_area.width as usize)
        } else {
            text
        };
        spans.push(Span::styled(body, line_style));
        content.push(Line::from(spans));
    }

    let doc = Paragraph::new(content);
    // Clear first so highlight styles from previous frames do not leak.
    frame.render_widget(Clear, text_area);
    frame.render_widget(doc, text_area);

    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    if jump_active {
        status::render_jump_bar(model, frame, jump_area);
    }
    status::render_status_bar(model, frame, status_area);
}

/// Gutter text for one row, or `None` when the gutter is off.
///
/// Relative mode shows the distance to the cursor line and keeps the
/// absolute one-based number on the cursor row itself, so a typed
/// `+5`/`-3` can be read straight off the screen while the jump prompt
/// is open.
fn gutter_label(mode: LineNumbers, line_idx: usize, cursor_line: usize) -> Option<String> {
    match mode {
        LineNumbers::Off => None,
        LineNumbers::Absolute => Some((line_idx + 1).to_string()),
        LineNumbers::Relative => {
            if line_idx == cursor_line {
                Some((line_idx + 1).to_string())
            } else {
                Some(line_idx.abs_diff(cursor_line).to_string())
            }
        }
    }
}

fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    let mut padded = String::with_capacity(text.len() + (width - used));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width - used));
    padded
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
