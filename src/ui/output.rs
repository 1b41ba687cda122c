//! Output pane: result text, cited sources, loading and error states

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::theme::Theme;
use super::widgets::spinner_char;
use crate::ai::GenerationResult;
use crate::app::state::{AppState, OutputState, RequestStatus};
use crate::constants::SOURCE_LIST_MAX_ROWS;

pub fn render_output(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.active_status() {
        RequestStatus::Idle => render_idle(frame, area),
        RequestStatus::InFlight => render_loading(frame, area),
        RequestStatus::Failed(message) => render_error(frame, area, message),
        RequestStatus::Succeeded(result) => render_result(
            frame,
            area,
            state.task.output_title(),
            result,
            state.active_output(),
        ),
    }
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Output ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint = Paragraph::new("Fill in the form above and press Ctrl+S to generate.")
        .style(Theme::text_muted())
        .wrap(Wrap { trim: false });
    frame.render_widget(hint, inner);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(" Output ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let loading = Paragraph::new(format!("{} Generating response...", spinner_char()))
        .style(Theme::text_accent());
    frame.render_widget(loading, inner);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_error())
        .title(" Error ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(message)
        .style(Theme::error_text())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn render_result(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    result: &GenerationResult,
    output: &OutputState,
) {
    if result.sources.is_empty() {
        render_result_text(frame, area, title, result, output);
        return;
    }

    let sources_height = result.sources.len().min(SOURCE_LIST_MAX_ROWS) as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(sources_height)])
        .split(area);

    render_result_text(frame, chunks[0], title, result, output);
    render_sources(frame, chunks[1], result, output);
}

fn render_result_text(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    result: &GenerationResult,
    output: &OutputState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(result.text.as_str())
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .scroll((output.scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn render_sources(frame: &mut Frame, area: Rect, result: &GenerationResult, output: &OutputState) {
    // Keep the selection visible when it runs past the viewport
    let visible_rows = area.height.saturating_sub(2) as usize;
    let skip = output
        .selected_source
        .saturating_sub(visible_rows.saturating_sub(1));

    let items: Vec<ListItem> = result
        .sources
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible_rows.max(1))
        .map(|(idx, source)| {
            let style = if idx == output.selected_source {
                Theme::selected()
            } else {
                Theme::link()
            };
            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", idx + 1), Theme::text_muted()),
                Span::styled(source.title.clone(), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(" Grounding Sources "),
    );

    frame.render_widget(list, area);
}
