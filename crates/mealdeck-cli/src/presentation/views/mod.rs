mod area;
mod meal_detail;
mod meal_list;
mod theme;
pub mod tui;

pub use area::AreaListView;
pub use meal_detail::MealDetailView;
pub use meal_list::MealListView;
pub use theme::ThemeView;
