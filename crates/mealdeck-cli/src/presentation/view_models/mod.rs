pub mod area;
pub mod common;
pub mod meal_detail;
pub mod meal_list;
pub mod theme;

pub use area::AreaListViewModel;
pub use common::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
pub use meal_detail::{IngredientRowViewModel, LinkViewModel, MealDetailViewModel};
pub use meal_list::{
    ListUpdate, LoadMoreViewModel, MealCardViewModel, MealListViewModel, NO_RESULTS,
    SummaryViewModel,
};
pub use theme::ThemeViewModel;
