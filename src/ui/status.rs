use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_jump_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(prompt) = model.jump.as_ref() else {
        return;
    };
    let target_info = prompt.preview.map_or_else(String::new, |target| {
        let kind = if target.is_absolute() { "line" } else { "offset" };
        format!("  [{} → {}]", kind, target.line + 1)
    });
    let text = format!(
        ":{}{}  10 line · +5/-3 offset  Enter: go  Esc: cancel",
        prompt.input, target_info
    );
    let bar = Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(bar, area);
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model
        .file_path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());

    let percent = model.viewport.scroll_percent();
    let line_info = format!(
        "Ln {}/{}",
        model.cursor_line + 1,
        model.document.line_count()
    );

    let watch_indicator = if model.watch_enabled {
        " [watching]"
    } else {
        ""
    };
    let numbers_indicator = format!(" [{}]", model.line_numbers.as_str());

    let status = format!(
        " {}  [{}%]  {}{}{}  ?:help",
        filename, percent, line_info, numbers_indicator, watch_indicator
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{} {}", prefix, message)).style(style);
    frame.render_widget(toast, area);
}
