use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::Palette;

/// Modal message box centred over the screen
pub struct AlertView<'a> {
    message: &'a str,
    palette: Palette,
}

impl<'a> AlertView<'a> {
    pub fn new(message: &'a str, palette: Palette) -> Self {
        Self { message, palette }
    }
}

impl<'a> Widget for AlertView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [row] = Layout::vertical([Constraint::Length(5)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(row);

        Clear.render(popup, buf);
        let block = Block::default()
            .title(" Alert ")
            .borders(Borders::ALL)
            .border_style(self.palette.base().fg(self.palette.alert))
            .style(self.palette.base());

        Paragraph::new(vec![
            Line::from(Span::styled(
                self.message,
                self.palette.base().add_modifier(Modifier::BOLD),
            )),
            Line::styled("press any key", self.palette.muted()),
        ])
        .block(block)
        .wrap(Wrap { trim: true })
        .centered()
        .render(popup, buf);
    }
}
