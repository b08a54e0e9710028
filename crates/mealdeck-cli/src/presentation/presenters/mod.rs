pub mod area;
pub mod meal_detail;
pub mod meal_list;
pub mod theme;

pub use area::present_area_list;
pub use meal_detail::{present_meal_detail, present_meal_detail_result};
pub use meal_list::{
    CATEGORY_PLACEHOLDER, present_load_more, present_meal_card, present_meal_list,
    present_meal_page, present_summary,
};
pub use theme::present_theme;
