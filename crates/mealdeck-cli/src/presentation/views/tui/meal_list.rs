use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::MealListViewModel;

/// List of meal cards
pub struct MealListView<'a> {
    model: &'a MealListViewModel,
    palette: Palette,
}

impl<'a> MealListView<'a> {
    pub fn new(model: &'a MealListViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn block(&self) -> Block<'static> {
        let summary = &self.model.summary;
        let title = if summary.title.is_empty() {
            " Meals ".to_string()
        } else {
            format!(" {} ({}/{}) ", summary.title, summary.shown, summary.total)
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.palette.base())
            .style(self.palette.base())
    }

    /// Build a List widget for stateful rendering
    pub fn build_list(self) -> List<'static> {
        let palette = self.palette;
        let items: Vec<ListItem<'static>> = self
            .model
            .cards
            .iter()
            .map(|card| {
                ListItem::new(Line::from(vec![
                    Span::styled(card.name.clone(), palette.base()),
                    Span::styled(format!("  {}", card.category), palette.muted()),
                ]))
            })
            .collect();

        List::new(items)
            .block(self.block())
            .style(palette.base())
            .highlight_style(palette.highlight())
            .highlight_symbol("▶ ")
    }
}

impl<'a> Widget for MealListView<'a> {
    /// Stateless rendering, used for the "no results" state
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = self.model.empty_message.clone().unwrap_or_default();
        Paragraph::new(Span::styled(message, self.palette.muted()))
            .block(self.block())
            .render(area, buf);
    }
}
