//! Task selector tab bar

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use super::theme::Theme;
use crate::task::TaskKind;

pub fn render_selector(frame: &mut Frame, area: Rect, active: TaskKind) {
    let titles: Vec<Line> = TaskKind::ALL
        .iter()
        .map(|task| Line::from(format!(" {} ", task.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Theme::text_secondary())
        .highlight_style(Theme::selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Tasks "),
        );

    frame.render_widget(tabs, area);
}
