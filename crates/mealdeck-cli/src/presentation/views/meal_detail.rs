use std::fmt;

use crate::presentation::view_models::MealDetailViewModel;

pub struct MealDetailView<'a> {
    data: &'a MealDetailViewModel,
}

impl<'a> MealDetailView<'a> {
    pub fn new(data: &'a MealDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for MealDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        writeln!(f, "{} (#{})", data.name, data.id)?;
        writeln!(f, "Category: {}", data.category)?;
        writeln!(f, "Area: {}", data.area)?;
        for link in [&data.source, &data.video] {
            if link.visible {
                writeln!(f, "{}: {}", link.label, link.url)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        for row in &data.ingredients {
            if row.measure.trim().is_empty() {
                writeln!(f, "  - {}", row.name)?;
            } else {
                writeln!(f, "  - {}: {}", row.name, row.measure)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Instructions:")?;
        writeln!(f, "{}", data.instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{IngredientRowViewModel, LinkViewModel};

    #[test]
    fn test_detail_layout() {
        let data = MealDetailViewModel {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            thumbnail: None,
            category: "Chicken".to_string(),
            area: "Japanese".to_string(),
            source: LinkViewModel {
                label: "Source".to_string(),
                url: String::new(),
                visible: false,
            },
            video: LinkViewModel {
                label: "Video".to_string(),
                url: "https://www.youtube.com/watch?v=4aZr5hZXP_s".to_string(),
                visible: true,
            },
            ingredients: vec![
                IngredientRowViewModel {
                    name: "soy sauce".to_string(),
                    measure: "3/4 cup".to_string(),
                },
                IngredientRowViewModel {
                    name: "water".to_string(),
                    measure: String::new(),
                },
            ],
            instructions: "Preheat oven.\nBake.".to_string(),
        };

        insta::assert_snapshot!(MealDetailView::new(&data).to_string(), @r"
        Teriyaki Chicken Casserole (#52772)
        Category: Chicken
        Area: Japanese
        Video: https://www.youtube.com/watch?v=4aZr5hZXP_s

        Ingredients:
          - soy sauce: 3/4 cup
          - water

        Instructions:
        Preheat oven.
        Bake.
        ");
    }
}
