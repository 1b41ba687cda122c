//! Static configuration-error screen
//!
//! Shown instead of the forms when the API key is missing at startup. No
//! functional UI is reachable from here; the only way out is quitting.

use ratatui::{
    Frame,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme::Theme;
use super::widgets::centered_rect;

pub fn render_config_error(frame: &mut Frame, message: &str) {
    let area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_error())
        .title(" Configuration Error ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = format!(
        "{}\n\n\
         This application cannot function without a valid API key. \
         Please ensure it is correctly set up, then restart.\n\n\
         Press q or Esc to quit.",
        message
    );

    let paragraph = Paragraph::new(text)
        .style(Theme::text())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
