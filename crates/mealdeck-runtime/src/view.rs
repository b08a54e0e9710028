use crate::Result;
use mealdeck_engine::Catalog;
use mealdeck_types::{Area, Meal};

/// State of the "load more" control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreState {
    Hidden,
    /// Visible and clickable
    Ready,
    /// Visible but disabled while the next page is scheduled
    Busy,
}

/// Heading information for the list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub title: String,
    pub shown: usize,
    pub total: usize,
}

impl CatalogSummary {
    pub fn of(catalog: &Catalog) -> Self {
        Self {
            title: catalog.context().to_string(),
            shown: catalog.revealed().len(),
            total: catalog.len(),
        }
    }
}

/// The drawing surface the controller hands data to.
///
/// Implementations turn domain data into whatever they display; the
/// controller never builds display structures itself.
pub trait MealView {
    /// Replace the list with `meals` (`append == false`) or add them after the
    /// existing cards. An empty replace is the "no results" state.
    fn render_meals(&self, meals: &[Meal], append: bool) -> Result<()>;

    fn set_load_more(&self, state: LoadMoreState) -> Result<()>;

    fn set_summary(&self, summary: &CatalogSummary) -> Result<()>;

    fn set_areas(&self, areas: &[Area]) -> Result<()>;

    /// Swap the list screen for the detail screen of `meal`
    fn show_detail(&self, meal: &Meal) -> Result<()>;

    /// Swap back to the list screen
    fn show_list(&self) -> Result<()>;

    fn set_loading(&self, loading: bool) -> Result<()>;

    fn set_dark_mode(&self, enabled: bool) -> Result<()>;

    /// Blocking notification; the surface keeps it up until dismissed
    fn alert(&self, message: &str) -> Result<()>;
}
