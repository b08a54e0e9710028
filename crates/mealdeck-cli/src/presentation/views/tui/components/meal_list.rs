use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::MealListViewModel;
use crate::presentation::views::tui::{MealListView, Palette};

/// Card selection. The selection survives appends and detail round-trips and
/// resets when the list is replaced.
#[derive(Debug, Default)]
pub struct MealListComponent {
    state: ListState,
}

impl MealListComponent {
    pub fn reset(&mut self) {
        self.state = ListState::default();
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(previous));
    }

    /// Selected index, clamped to the current list
    pub fn selected(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.state.selected().unwrap_or(0).min(len - 1))
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, model: &MealListViewModel, palette: Palette) {
        let view = MealListView::new(model, palette);
        if model.cards.is_empty() {
            f.render_widget(view, area);
            return;
        }

        let selected = self.selected(model.cards.len());
        self.state.select(selected);
        f.render_stateful_widget(view.build_list(), area, &mut self.state);
    }
}
