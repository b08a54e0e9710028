//! `MealView` that records every update instead of drawing.

use mealdeck_runtime::{CatalogSummary, LoadMoreState, MealView, Result};
use mealdeck_types::{Area, Meal, MealId};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    RenderMeals { names: Vec<String>, append: bool },
    LoadMore(LoadMoreState),
    Summary(CatalogSummary),
    Areas(Vec<String>),
    ShowDetail(MealId),
    ShowList,
    Loading(bool),
    DarkMode(bool),
    Alert(String),
}

/// Cloneable handle; clones share the same log, so a test can keep one while
/// the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    calls: Arc<Mutex<Vec<ViewCall>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.log().clone()
    }

    /// Drain the log, returning what was recorded since the last take
    pub fn take(&self) -> Vec<ViewCall> {
        std::mem::take(&mut *self.log())
    }

    /// Names of the cards currently on the list, replaying replace/append
    pub fn visible_meals(&self) -> Vec<String> {
        let mut visible = Vec::new();
        for call in self.log().iter() {
            if let ViewCall::RenderMeals { names, append } = call {
                if !append {
                    visible.clear();
                }
                visible.extend(names.iter().cloned());
            }
        }
        visible
    }

    pub fn load_more(&self) -> Option<LoadMoreState> {
        self.log().iter().rev().find_map(|call| match call {
            ViewCall::LoadMore(state) => Some(*state),
            _ => None,
        })
    }

    pub fn summary(&self) -> Option<CatalogSummary> {
        self.log().iter().rev().find_map(|call| match call {
            ViewCall::Summary(summary) => Some(summary.clone()),
            _ => None,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.log()
            .iter()
            .rev()
            .find_map(|call| match call {
                ViewCall::Loading(loading) => Some(*loading),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn dark_mode(&self) -> Option<bool> {
        self.log().iter().rev().find_map(|call| match call {
            ViewCall::DarkMode(enabled) => Some(*enabled),
            _ => None,
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.log()
            .iter()
            .filter_map(|call| match call {
                ViewCall::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether the detail screen is up, replaying show_detail/show_list
    pub fn detail_shown(&self) -> Option<MealId> {
        self.log().iter().fold(None, |shown, call| match call {
            ViewCall::ShowDetail(id) => Some(id.clone()),
            ViewCall::ShowList => None,
            _ => shown,
        })
    }

    fn record(&self, call: ViewCall) -> Result<()> {
        self.log().push(call);
        Ok(())
    }

    fn log(&self) -> MutexGuard<'_, Vec<ViewCall>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MealView for RecordingView {
    fn render_meals(&self, meals: &[Meal], append: bool) -> Result<()> {
        let names = meals.iter().map(|meal| meal.name.clone()).collect();
        self.record(ViewCall::RenderMeals { names, append })
    }

    fn set_load_more(&self, state: LoadMoreState) -> Result<()> {
        self.record(ViewCall::LoadMore(state))
    }

    fn set_summary(&self, summary: &CatalogSummary) -> Result<()> {
        self.record(ViewCall::Summary(summary.clone()))
    }

    fn set_areas(&self, areas: &[Area]) -> Result<()> {
        let names = areas.iter().map(|area| area.to_string()).collect();
        self.record(ViewCall::Areas(names))
    }

    fn show_detail(&self, meal: &Meal) -> Result<()> {
        self.record(ViewCall::ShowDetail(meal.id.clone()))
    }

    fn show_list(&self) -> Result<()> {
        self.record(ViewCall::ShowList)
    }

    fn set_loading(&self, loading: bool) -> Result<()> {
        self.record(ViewCall::Loading(loading))
    }

    fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.record(ViewCall::DarkMode(enabled))
    }

    fn alert(&self, message: &str) -> Result<()> {
        self.record(ViewCall::Alert(message.to_string()))
    }
}
