use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::MealDetailViewModel;
use crate::presentation::views::tui::{MealDetailView, Palette};

/// Scroll offset of the detail screen; every newly opened meal starts at the top
#[derive(Debug, Default)]
pub struct DetailComponent {
    scroll: u16,
}

impl DetailComponent {
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn page_down(&mut self, height: u16) {
        self.scroll = self.scroll.saturating_add(height.max(1));
    }

    pub fn render(&self, f: &mut Frame, area: Rect, model: &MealDetailViewModel, palette: Palette) {
        f.render_widget(MealDetailView::new(model, self.scroll, palette), area);
    }
}
