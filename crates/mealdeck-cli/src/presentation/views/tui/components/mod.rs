//! TUI components: private UI state plus its input handling and rendering.
//!
//! Domain intents (search submit, open a meal) bubble up as return values;
//! the renderer turns them into controller actions.

pub mod detail;
pub mod meal_list;
pub mod search;

pub use detail::DetailComponent;
pub use meal_list::MealListComponent;
pub use search::{SearchComponent, SearchOutcome};
