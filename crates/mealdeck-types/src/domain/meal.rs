use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ingredient/measure slots carried by a recipe record
pub const INGREDIENT_SLOTS: usize = 20;

/// Recipe identifier as issued by the recipe API (numeric string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(String);

impl MealId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw ingredient slot as delivered by the API
///
/// Unused slots arrive as empty strings, whitespace, or null depending on
/// when the record was entered, so both fields stay optional and untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSlot {
    pub name: Option<String>,
    pub measure: Option<String>,
}

/// A populated ingredient row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// One recipe record
///
/// List endpoints (filter-by-area in particular) only return the id, name and
/// thumbnail, so everything else is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredient_slots: Vec<IngredientSlot>,
}

impl Meal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MealId::new(id),
            name: name.into(),
            thumbnail: None,
            category: None,
            area: None,
            instructions: None,
            source_url: None,
            video_url: None,
            ingredient_slots: Vec::new(),
        }
    }

    /// Populated ingredient rows, in slot order
    ///
    /// A slot yields a row when its name is non-empty after trimming. The
    /// measure is carried as-is; a missing measure becomes an empty string.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.ingredient_slots
            .iter()
            .take(INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = slot.name.as_deref()?;
                if name.trim().is_empty() {
                    return None;
                }
                Some(Ingredient {
                    name: name.to_string(),
                    measure: slot.measure.clone().unwrap_or_default(),
                })
            })
            .collect()
    }
}
