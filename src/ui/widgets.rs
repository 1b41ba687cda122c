//! Common UI widgets and utilities

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::Theme;
use crate::constants::SPINNER_FRAME_MS;

/// Simple status bar with left and right text
pub fn status_bar(frame: &mut Frame, area: Rect, left: &str, right: &str) {
    let style = Theme::status_bar();

    let left_span = Span::styled(format!(" {} ", left), style);
    let right_span = Span::styled(format!(" {} ", right), style);

    let available = area
        .width
        .saturating_sub(left.len() as u16 + right.len() as u16 + 4);
    let padding = " ".repeat(available as usize);

    let line = Line::from(vec![left_span, Span::styled(padding, style), right_span]);

    let paragraph = Paragraph::new(line).style(style);
    frame.render_widget(paragraph, area);
}

pub fn help_bar(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    use unicode_width::UnicodeWidthStr;

    let available_width = area.width as usize;

    // Width of each hint including its separator, so overflow drops whole
    // hints instead of clipping mid-word
    let hint_widths: Vec<usize> = hints
        .iter()
        .enumerate()
        .map(|(i, (key, desc))| {
            let base = format!(" {} ", key).width() + desc.width();
            if i < hints.len() - 1 { base + 3 } else { base + 1 }
        })
        .collect();

    let mut total_width = 0;
    let mut hints_to_show = 0;
    for width in &hint_widths {
        if total_width + width <= available_width {
            total_width += width;
            hints_to_show += 1;
        } else {
            break;
        }
    }

    hints_to_show = hints_to_show.max(1).min(hints.len());

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().take(hints_to_show).enumerate() {
        spans.push(Span::styled(format!(" {} ", key), Theme::help_key()));
        spans.push(Span::styled(desc.to_string(), Theme::help_desc()));
        if i < hints_to_show - 1 {
            spans.push(Span::styled(" │ ", Theme::text_muted()));
        }
    }
    spans.push(Span::styled(" ", Theme::text_muted()));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Get an animated spinner character for loading states
pub fn spinner_char() -> char {
    let spinner = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
    let idx = (std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        / SPINNER_FRAME_MS) as usize
        % spinner.chars().count();

    spinner.chars().nth(idx).unwrap_or('*')
}

/// Create a centered rectangle with given percentage of parent area
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    use ratatui::layout::{Constraint, Direction, Layout};

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
