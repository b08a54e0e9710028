use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::Palette;
use crate::presentation::view_models::{LinkViewModel, MealDetailViewModel};

pub struct MealDetailView<'a> {
    model: &'a MealDetailViewModel,
    scroll: u16,
    palette: Palette,
}

impl<'a> MealDetailView<'a> {
    pub fn new(model: &'a MealDetailViewModel, scroll: u16, palette: Palette) -> Self {
        Self {
            model,
            scroll,
            palette,
        }
    }

    fn link_line(&self, link: &'a LinkViewModel) -> Line<'a> {
        // Hidden links keep their row so the layout does not shift
        if !link.visible {
            return Line::raw("");
        }
        Line::from(vec![
            Span::styled(format!("{}: ", link.label), self.palette.muted()),
            Span::styled(link.url.as_str(), self.palette.accent()),
        ])
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let model = self.model;
        let heading = self.palette.accent().add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Category: ", self.palette.muted()),
                Span::raw(model.category.as_str()),
                Span::styled("   Area: ", self.palette.muted()),
                Span::raw(model.area.as_str()),
            ]),
            self.link_line(&model.source),
            self.link_line(&model.video),
        ];
        if let Some(thumbnail) = &model.thumbnail {
            lines.push(Line::styled(thumbnail.as_str(), self.palette.muted()));
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled("Ingredients", heading));
        for row in &model.ingredients {
            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::raw(row.name.as_str()),
                Span::styled(format!("  {}", row.measure), self.palette.muted()),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled("Instructions", heading));
        lines.extend(model.instructions.lines().map(Line::raw));
        lines
    }
}

impl<'a> Widget for MealDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.model.name))
            .borders(Borders::ALL)
            .border_style(self.palette.accent())
            .style(self.palette.base());

        Paragraph::new(self.lines())
            .block(block)
            .style(self.palette.base())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
