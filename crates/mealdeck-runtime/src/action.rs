use mealdeck_types::{Area, MealId};

/// User intents delivered by the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Search form submitted with raw (unsanitized) input
    Search(String),
    /// Area selector changed; `None` is the "All areas" placeholder
    SelectArea(Option<Area>),
    LoadMore,
    OpenDetails(MealId),
    CloseDetails,
    ToggleTheme,
}

/// Which screen the surface is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail(MealId),
}
