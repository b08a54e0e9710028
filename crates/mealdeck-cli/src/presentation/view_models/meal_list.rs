use serde::Serialize;

use super::CreateView;
use crate::presentation::views::MealListView;

/// Message shown in place of the list when a fresh catalog is empty
pub const NO_RESULTS: &str = "No meals found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealCardViewModel {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Category or "N/A"
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMoreViewModel {
    #[default]
    Hidden,
    Ready,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SummaryViewModel {
    pub title: String,
    pub shown: usize,
    pub total: usize,
}

/// One render step for the list: either a fresh first page or an added page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "cards", rename_all = "lowercase")]
pub enum ListUpdate {
    Replace(Vec<MealCardViewModel>),
    Append(Vec<MealCardViewModel>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MealListViewModel {
    pub summary: SummaryViewModel,
    pub cards: Vec<MealCardViewModel>,
    /// Set when the last replace produced no cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    pub load_more: LoadMoreViewModel,
}

impl MealListViewModel {
    pub fn apply(&mut self, update: ListUpdate) {
        match update {
            ListUpdate::Replace(cards) => {
                self.empty_message = cards.is_empty().then(|| NO_RESULTS.to_string());
                self.cards = cards;
            }
            ListUpdate::Append(cards) => self.cards.extend(cards),
        }
    }
}

impl CreateView for MealListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn std::fmt::Display + 'a> {
        Box::new(MealListView::new(self))
    }
}
