use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(6).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut all_lines: Vec<Line> = Vec::new();

    // Navigation
    all_lines.push(Line::styled("Navigation", section_style));
    all_lines.push(Line::raw("  j/k or Up/Down      Move cursor"));
    all_lines.push(Line::raw("  Space/PageDown      Page down"));
    all_lines.push(Line::raw("  b/PageUp            Page up"));
    all_lines.push(Line::raw("  Ctrl-d / Ctrl-u     Half page"));
    all_lines.push(Line::raw("  g / G               First / last line"));
    all_lines.push(Line::raw(""));

    // Jump
    all_lines.push(Line::styled("Jump", section_style));
    all_lines.push(Line::raw("  :                   Open jump prompt"));
    all_lines.push(Line::raw("  10                  Go to line 10"));
    all_lines.push(Line::raw("  +5 / -3             Offset from current line"));
    all_lines.push(Line::raw("  Enter               Go"));
    all_lines.push(Line::raw("  Esc                 Cancel"));
    all_lines.push(Line::raw(""));

    // Display
    all_lines.push(Line::styled("Display", section_style));
    all_lines.push(Line::raw("  n                   Cycle line numbers"));
    all_lines.push(Line::raw("                      (absolute/relative/off)"));
    all_lines.push(Line::raw(""));

    // Other
    all_lines.push(Line::styled("Other", section_style));
    all_lines.push(Line::raw("  w                   Toggle watch"));
    all_lines.push(Line::raw("  r / R               Reload file"));
    all_lines.push(Line::raw("  q / Ctrl-c          Quit"));
    all_lines.push(Line::raw("  ? / F1              Toggle help"));
    all_lines.push(Line::raw(""));

    // Config
    all_lines.push(Line::styled("Config", section_style));
    all_lines.push(Line::raw(format!("  Global: {global_cfg}")));
    all_lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(all_lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
