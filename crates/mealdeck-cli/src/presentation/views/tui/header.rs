use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;

pub struct HeaderView<'a> {
    search: &'a str,
    search_focused: bool,
    area_label: &'a str,
    palette: Palette,
}

impl<'a> HeaderView<'a> {
    pub fn new(search: &'a str, search_focused: bool, area_label: &'a str, palette: Palette) -> Self {
        Self {
            search,
            search_focused,
            area_label,
            palette,
        }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).split(area);

        let search_style = if self.search_focused {
            self.palette.accent()
        } else {
            self.palette.base()
        };
        let cursor = if self.search_focused { "_" } else { "" };
        let search = Paragraph::new(Line::from(vec![
            Span::styled(self.search, search_style),
            Span::styled(cursor, search_style),
        ]))
        .style(self.palette.base())
        .block(
            Block::default()
                .title(" Search [/] ")
                .borders(Borders::ALL)
                .border_style(search_style),
        );
        search.render(chunks[0], buf);

        let area_filter = Paragraph::new(Line::from(vec![
            Span::styled("◀ ", self.palette.muted()),
            Span::styled(self.area_label, self.palette.accent()),
            Span::styled(" ▶", self.palette.muted()),
        ]))
        .style(self.palette.base())
        .block(
            Block::default()
                .title(" Area [ [ ] ] ")
                .borders(Borders::ALL)
                .border_style(self.palette.base()),
        );
        area_filter.render(chunks[1], buf);
    }
}
