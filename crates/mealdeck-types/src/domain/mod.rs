mod area;
mod meal;

pub use area::Area;
pub use meal::{INGREDIENT_SLOTS, Ingredient, IngredientSlot, Meal, MealId};
