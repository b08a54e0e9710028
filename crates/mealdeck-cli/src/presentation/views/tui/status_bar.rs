use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::LoadMoreViewModel;

pub struct StatusBarView {
    loading: bool,
    load_more: LoadMoreViewModel,
    detail: bool,
    dark_mode: bool,
    palette: Palette,
}

impl StatusBarView {
    pub fn new(
        loading: bool,
        load_more: LoadMoreViewModel,
        detail: bool,
        dark_mode: bool,
        palette: Palette,
    ) -> Self {
        Self {
            loading,
            load_more,
            detail,
            dark_mode,
            palette,
        }
    }

    fn key(&self, key: &'static str, label: &'static str) -> [Span<'static>; 2] {
        [
            Span::styled(key, self.palette.accent()),
            Span::styled(label, self.palette.base()),
        ]
    }
}

impl Widget for StatusBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(area);

        let mut status = Vec::new();
        if self.loading {
            status.push(Span::styled("Loading… ", self.palette.accent()));
        }
        match self.load_more {
            LoadMoreViewModel::Ready if !self.detail => {
                status.push(Span::styled("[m] load more", self.palette.base()));
            }
            LoadMoreViewModel::Busy if !self.detail => {
                status.push(Span::styled("loading more…", self.palette.muted()));
            }
            _ => {}
        }
        Paragraph::new(Line::from(status))
            .style(self.palette.base())
            .render(chunks[0], buf);

        let theme = if self.dark_mode { "heme:dark " } else { "heme:light " };
        let mut help: Vec<Span> = Vec::new();
        if self.detail {
            help.extend(self.key("[b]", "ack "));
            help.extend(self.key("[j/k]", "scroll "));
        } else {
            help.extend(self.key("[⏎]", "open "));
            help.extend(self.key("[j/k]", "select "));
        }
        help.extend(self.key("[t]", theme));
        help.extend(self.key("[q]", "uit"));
        Paragraph::new(Line::from(help))
            .style(self.palette.base())
            .right_aligned()
            .render(chunks[1], buf);
    }
}
