//! Task form rendering
//!
//! Each task gets its own small form. Fields are bordered blocks; the
//! focused field gets the accent border and a trailing cursor mark.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::theme::Theme;
use crate::app::state::{AppState, CancelField, CancelForm, EmailReplyForm, MeetingForm, ReplyField};
use crate::task::TaskKind;

pub fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.task {
        TaskKind::ReplyEmail => render_reply_form(frame, area, &state.reply),
        TaskKind::CancelSubscription => render_cancel_form(frame, area, &state.cancel),
        TaskKind::MeetingNotes => render_meeting_form(frame, area, &state.meeting),
    }
}

fn render_reply_form(frame: &mut Frame, area: Rect, form: &EmailReplyForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Email content
            Constraint::Length(3), // Tone picker
        ])
        .split(area);

    render_text_area(
        frame,
        chunks[0],
        "Email Content",
        &form.content,
        form.field == ReplyField::Content,
    );
    render_tone_field(frame, chunks[1], form);
}

fn render_cancel_form(frame: &mut Frame, area: Rect, form: &CancelForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Subscription name
            Constraint::Min(3),    // Reason (optional)
        ])
        .split(area);

    render_field(
        frame,
        chunks[0],
        "Subscription Name",
        &form.name,
        form.field == CancelField::Name,
    );
    render_text_area(
        frame,
        chunks[1],
        "Reason (optional)",
        &form.reason,
        form.field == CancelField::Reason,
    );
}

fn render_meeting_form(frame: &mut Frame, area: Rect, form: &MeetingForm) {
    render_text_area(frame, area, "Meeting Transcript / Notes", &form.notes, true);
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", label));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if focused {
        Theme::text()
    } else {
        Theme::text_secondary()
    };

    let text = if focused {
        format!("{}│", value)
    } else {
        value.to_string()
    };

    let paragraph = Paragraph::new(text).style(style);
    frame.render_widget(paragraph, inner);
}

fn render_text_area(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let char_count = value.chars().count();
    let title = format!(" {} ({} chars) ", label, char_count);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if focused {
        Theme::text()
    } else {
        Theme::text_secondary()
    };

    let text = if focused {
        format!("{}│", value)
    } else {
        value.to_string()
    };

    let paragraph = Paragraph::new(text).style(style).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);
}

fn render_tone_field(frame: &mut Frame, area: Rect, form: &EmailReplyForm) {
    let focused = form.field == ReplyField::Tone;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Tone ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled("‹ ", Theme::text_muted()),
        Span::styled(
            form.tone_name(),
            if focused {
                Theme::text_accent()
            } else {
                Theme::text_secondary()
            },
        ),
        Span::styled(" ›", Theme::text_muted()),
    ];
    if focused {
        spans.push(Span::styled("  ←/→ to change", Theme::text_muted()));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, inner);
}
