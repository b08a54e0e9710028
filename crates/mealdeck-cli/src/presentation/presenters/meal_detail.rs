use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, IngredientRowViewModel, LinkViewModel, MealDetailViewModel,
    StatusBadge,
};
use mealdeck_types::Meal;

use super::CATEGORY_PLACEHOLDER;

pub fn present_meal_detail(meal: &Meal) -> MealDetailViewModel {
    MealDetailViewModel {
        id: meal.id.to_string(),
        name: meal.name.clone(),
        thumbnail: meal.thumbnail.clone(),
        category: or_placeholder(meal.category.as_deref()),
        area: or_placeholder(meal.area.as_deref()),
        source: link("Source", meal.source_url.as_deref()),
        video: link("Video", meal.video_url.as_deref()),
        ingredients: meal
            .ingredients()
            .into_iter()
            .map(|row| IngredientRowViewModel {
                name: row.name,
                measure: row.measure,
            })
            .collect(),
        instructions: meal
            .instructions
            .as_deref()
            .unwrap_or_default()
            .replace("\r\n", "\n"),
    }
}

pub fn present_meal_detail_result(meal: &Meal) -> CommandResultViewModel<MealDetailViewModel> {
    let content = present_meal_detail(meal);
    let mut result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("Recipe {}", meal.id)));

    if let Some(area) = &meal.area {
        result = result.with_suggestion(
            Guidance::new(format!("More {} dishes", area))
                .with_command(format!("mealdeck area {}", area)),
        );
    }
    result
}

fn or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(CATEGORY_PLACEHOLDER).to_string()
}

fn link(label: &str, url: Option<&str>) -> LinkViewModel {
    let url = url.unwrap_or_default().trim().to_string();
    LinkViewModel {
        label: label.to_string(),
        visible: !url.is_empty(),
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealdeck_types::{INGREDIENT_SLOTS, IngredientSlot};

    fn salted() -> Meal {
        let mut meal = Meal::new("52772", "Teriyaki Chicken Casserole");
        meal.ingredient_slots = vec![
            IngredientSlot {
                name: Some(String::new()),
                measure: Some(String::new()),
            };
            INGREDIENT_SLOTS
        ];
        meal.ingredient_slots[2] = IngredientSlot {
            name: Some("Salt".to_string()),
            measure: Some("1 tsp".to_string()),
        };
        meal
    }

    #[test]
    fn test_single_ingredient_row() {
        let detail = present_meal_detail(&salted());

        assert_eq!(
            detail.ingredients,
            vec![IngredientRowViewModel {
                name: "Salt".to_string(),
                measure: "1 tsp".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_links_stay_hidden() {
        let mut meal = salted();
        meal.video_url = Some("https://www.youtube.com/watch?v=4aZr5hZXP_s".to_string());

        let detail = present_meal_detail(&meal);

        assert!(!detail.source.visible);
        assert_eq!(detail.source.url, "");
        assert!(detail.video.visible);
        assert_eq!(detail.video.label, "Video");
    }

    #[test]
    fn test_placeholders_and_line_breaks() {
        let mut meal = salted();
        meal.instructions = Some("Preheat oven.\r\nMix.\r\n\r\nBake.".to_string());

        let detail = present_meal_detail(&meal);

        assert_eq!(detail.category, "N/A");
        assert_eq!(detail.area, "N/A");
        assert_eq!(detail.instructions, "Preheat oven.\nMix.\n\nBake.");
    }

    #[test]
    fn test_result_suggests_area() {
        let mut meal = salted();
        meal.area = Some("Japanese".to_string());

        let result = present_meal_detail_result(&meal);

        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("mealdeck area Japanese")
        );
    }
}
