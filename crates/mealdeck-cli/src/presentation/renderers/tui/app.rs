use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mealdeck_runtime::Action;
use mealdeck_types::{Area, MealId};
use std::collections::VecDeque;

use super::TuiEvent;
use crate::presentation::view_models::{
    ListUpdate, LoadMoreViewModel, MealDetailViewModel, MealListViewModel,
};
use crate::presentation::views::tui::components::{
    DetailComponent, MealListComponent, SearchComponent, SearchOutcome,
};

/// Label of the area selector's "no filter" entry
pub const ALL_AREAS: &str = "All areas";

/// What a key press asks the renderer to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Dispatch(Action),
    Quit,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub list: MealListViewModel,
    pub detail: Option<MealDetailViewModel>,
    pub areas: Vec<String>,
    /// 0 is the "All areas" placeholder, `i` is `areas[i - 1]`
    pub area_index: usize,
    pub loading: bool,
    pub dark_mode: bool,
    pub alerts: VecDeque<String>,
    pub search: SearchComponent,
    pub list_component: MealListComponent,
    pub detail_component: DetailComponent,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area_label(&self) -> &str {
        match self.area_index {
            0 => ALL_AREAS,
            i => self.areas.get(i - 1).map(String::as_str).unwrap_or(ALL_AREAS),
        }
    }

    pub fn apply(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::List(update) => {
                if matches!(update, ListUpdate::Replace(_)) {
                    self.list_component.reset();
                }
                self.list.apply(update);
            }
            TuiEvent::LoadMore(state) => self.list.load_more = state,
            TuiEvent::Summary(summary) => self.list.summary = summary,
            TuiEvent::Areas(areas) => {
                self.areas = areas;
                self.area_index = 0;
            }
            TuiEvent::Detail(detail) => {
                self.detail_component.reset();
                self.detail = Some(detail);
            }
            TuiEvent::ShowList => self.detail = None,
            TuiEvent::Loading(loading) => self.loading = loading,
            TuiEvent::Theme(dark_mode) => self.dark_mode = dark_mode,
            TuiEvent::Alert(message) => self.alerts.push_back(message),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        // Alerts are modal: any key dismisses the oldest one
        if self.alerts.pop_front().is_some() {
            return KeyOutcome::Continue;
        }

        if self.search.is_focused() {
            return match self.search.handle_input(key) {
                SearchOutcome::Submitted(input) => KeyOutcome::Dispatch(Action::Search(input)),
                SearchOutcome::Editing | SearchOutcome::Cancelled => KeyOutcome::Continue,
            };
        }

        if self.detail.is_some() {
            self.handle_detail_key(key)
        } else {
            self.handle_list_key(key)
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                KeyOutcome::Dispatch(Action::CloseDetails)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_component.scroll_down();
                KeyOutcome::Continue
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_component.scroll_up();
                KeyOutcome::Continue
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.detail_component.page_down(10);
                KeyOutcome::Continue
            }
            KeyCode::Char('t') => KeyOutcome::Dispatch(Action::ToggleTheme),
            KeyCode::Char('q') => KeyOutcome::Quit,
            _ => KeyOutcome::Continue,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let len = self.list.cards.len();
        match key.code {
            KeyCode::Char('/') => {
                self.search.focus();
                KeyOutcome::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_component.select_next(len);
                KeyOutcome::Continue
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_component.select_previous(len);
                KeyOutcome::Continue
            }
            KeyCode::Enter => match self.list_component.selected(len) {
                Some(i) => {
                    KeyOutcome::Dispatch(Action::OpenDetails(MealId::new(&self.list.cards[i].id)))
                }
                None => KeyOutcome::Continue,
            },
            KeyCode::Char('m') if self.list.load_more == LoadMoreViewModel::Ready => {
                KeyOutcome::Dispatch(Action::LoadMore)
            }
            KeyCode::Char(']') => self.cycle_area(true),
            KeyCode::Char('[') => self.cycle_area(false),
            KeyCode::Char('t') => KeyOutcome::Dispatch(Action::ToggleTheme),
            KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
            _ => KeyOutcome::Continue,
        }
    }

    fn cycle_area(&mut self, forward: bool) -> KeyOutcome {
        let slots = self.areas.len() + 1;
        self.area_index = if forward {
            (self.area_index + 1) % slots
        } else {
            (self.area_index + slots - 1) % slots
        };

        let area = match self.area_index {
            0 => None,
            i => Some(Area::new(self.areas[i - 1].as_str())),
        };
        KeyOutcome::Dispatch(Action::SelectArea(area))
    }
}
