use serde::Serialize;

use super::CreateView;
use crate::presentation::views::MealDetailView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRowViewModel {
    pub name: String,
    /// Measure text exactly as delivered
    pub measure: String,
}

/// External link slot. The slot always exists; an empty URL leaves it hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkViewModel {
    pub label: String,
    pub url: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealDetailViewModel {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub category: String,
    pub area: String,
    pub source: LinkViewModel,
    pub video: LinkViewModel,
    pub ingredients: Vec<IngredientRowViewModel>,
    /// Line breaks preserved, `\r\n` normalized to `\n`
    pub instructions: String,
}

impl CreateView for MealDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn std::fmt::Display + 'a> {
        Box::new(MealDetailView::new(self))
    }
}
