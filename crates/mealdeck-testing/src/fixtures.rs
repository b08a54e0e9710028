//! Meal and area builders plus access to recorded API bodies.

use anyhow::{Context, Result};
use mealdeck_types::{Area, INGREDIENT_SLOTS, IngredientSlot, Meal};
use std::path::PathBuf;

/// List-style meal (id, name, thumbnail) as returned by filter-by-area
pub fn meal(id: &str, name: &str) -> Meal {
    let mut meal = Meal::new(id, name);
    meal.thumbnail = Some(format!("https://img.example/{}.jpg", id));
    meal
}

/// `count` meals named "<prefix> 1" .. "<prefix> count" with ids "<prefix>-N"
pub fn numbered_meals(prefix: &str, count: usize) -> Vec<Meal> {
    (1..=count)
        .map(|i| {
            let mut m = meal(&format!("{}-{}", prefix, i), &format!("{} {}", prefix, i));
            m.category = Some("Dessert".to_string());
            m
        })
        .collect()
}

/// Full detail record with links, instructions and three ingredients in
/// slots 1, 2 and 5 (slots 3 and 4 are blank, the rest empty strings).
pub fn detailed_meal(id: &str, name: &str) -> Meal {
    let mut meal = meal(id, name);
    meal.category = Some("Chicken".to_string());
    meal.area = Some("Japanese".to_string());
    meal.instructions = Some("Preheat oven.\r\nBake for 20 minutes.".to_string());
    meal.source_url = Some(format!("https://recipes.example/{}", id));
    meal.video_url = Some(format!("https://video.example/watch?v={}", id));

    let mut slots = vec![
        IngredientSlot {
            name: Some(String::new()),
            measure: Some(String::new()),
        };
        INGREDIENT_SLOTS
    ];
    slots[0] = slot("soy sauce", "3/4 cup");
    slots[1] = slot("water", "1/2 cup");
    slots[2] = slot("  ", "1 tbsp");
    slots[3] = IngredientSlot {
        name: None,
        measure: None,
    };
    slots[4] = slot("chicken breasts", "2");
    meal.ingredient_slots = slots;
    meal
}

pub fn areas(names: &[&str]) -> Vec<Area> {
    names.iter().map(|name| Area::new(*name)).collect()
}

fn slot(name: &str, measure: &str) -> IngredientSlot {
    IngredientSlot {
        name: Some(name.to_string()),
        measure: Some(measure.to_string()),
    }
}

/// Recorded API response bodies kept under
/// `crates/mealdeck-providers/tests/samples/`.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir.join("../mealdeck-providers/tests/samples");
        Self { samples_dir }
    }

    /// Raw body of a sample file
    pub fn body(&self, sample_name: &str) -> Result<String> {
        let path = self.samples_dir.join(sample_name);
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sample {}", path.display()))
    }
}
