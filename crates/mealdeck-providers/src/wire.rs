use crate::Result;
use mealdeck_types::{Area, INGREDIENT_SLOTS, IngredientSlot, Meal, MealId};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// `{"meals": [...]}`; `null` or a missing field means no matches
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    meals: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    fn into_items(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeal {
    id_meal: String,
    str_meal: String,
    str_meal_thumb: Option<String>,
    str_category: Option<String>,
    str_area: Option<String>,
    str_instructions: Option<String>,
    str_source: Option<String>,
    str_youtube: Option<String>,
    /// strIngredient1..20, strMeasure1..20 and fields we don't use
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArea {
    str_area: String,
}

impl RawMeal {
    fn slot_text(&self, key: &str) -> Option<String> {
        match self.rest.get(key) {
            Some(Value::String(text)) => Some(text.clone()),
            _ => None,
        }
    }

    fn ingredient_slots(&self) -> Vec<IngredientSlot> {
        let slots: Vec<IngredientSlot> = (1..=INGREDIENT_SLOTS)
            .map(|i| IngredientSlot {
                name: self.slot_text(&format!("strIngredient{}", i)),
                measure: self.slot_text(&format!("strMeasure{}", i)),
            })
            .collect();

        // List endpoints carry no slots at all; keep the meal light in that case
        if slots.iter().all(|s| s.name.is_none() && s.measure.is_none()) {
            Vec::new()
        } else {
            slots
        }
    }
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let ingredient_slots = raw.ingredient_slots();
        Meal {
            id: MealId::new(raw.id_meal),
            name: raw.str_meal,
            thumbnail: non_empty(raw.str_meal_thumb),
            category: non_empty(raw.str_category),
            area: non_empty(raw.str_area),
            instructions: non_empty(raw.str_instructions),
            source_url: non_empty(raw.str_source),
            video_url: non_empty(raw.str_youtube),
            ingredient_slots,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Decode a meal collection response
pub fn parse_meals(body: Value) -> Result<Vec<Meal>> {
    let envelope: Envelope<RawMeal> = serde_json::from_value(body)?;
    Ok(envelope.into_items().into_iter().map(Meal::from).collect())
}

/// Decode a lookup response; an unknown id yields `None`
pub fn parse_lookup(body: Value) -> Result<Option<Meal>> {
    Ok(parse_meals(body)?.into_iter().next())
}

/// Decode the area list response
pub fn parse_areas(body: Value) -> Result<Vec<Area>> {
    let envelope: Envelope<RawArea> = serde_json::from_value(body)?;
    Ok(envelope
        .into_items()
        .into_iter()
        .map(|raw| Area::new(raw.str_area))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_meals_is_empty() {
        assert!(parse_meals(json!({ "meals": null })).unwrap().is_empty());
        assert!(parse_meals(json!({})).unwrap().is_empty());
        assert!(parse_areas(json!({ "meals": null })).unwrap().is_empty());
        assert_eq!(parse_lookup(json!({ "meals": null })).unwrap(), None);
    }

    #[test]
    fn test_filter_record_has_no_details() {
        let meals = parse_meals(json!({
            "meals": [
                { "strMeal": "Lasagne", "strMealThumb": "https://img/lasagne.jpg", "idMeal": "52844" }
            ]
        }))
        .unwrap();

        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].id.as_str(), "52844");
        assert_eq!(meals[0].thumbnail.as_deref(), Some("https://img/lasagne.jpg"));
        assert_eq!(meals[0].category, None);
        assert!(meals[0].ingredient_slots.is_empty());
    }

    #[test]
    fn test_empty_links_become_none() {
        let meals = parse_meals(json!({
            "meals": [{
                "idMeal": "1",
                "strMeal": "Plain",
                "strSource": "",
                "strYoutube": null,
                "strCategory": "Side"
            }]
        }))
        .unwrap();

        assert_eq!(meals[0].source_url, None);
        assert_eq!(meals[0].video_url, None);
        assert_eq!(meals[0].category.as_deref(), Some("Side"));
    }

    #[test]
    fn test_slots_are_read_in_order() {
        let mut record = serde_json::Map::new();
        record.insert("idMeal".into(), json!("9"));
        record.insert("strMeal".into(), json!("Salted"));
        for i in 1..=20 {
            record.insert(format!("strIngredient{}", i), json!(""));
            record.insert(format!("strMeasure{}", i), json!(" "));
        }
        record.insert("strIngredient3".into(), json!("Salt"));
        record.insert("strMeasure3".into(), json!("1 tsp"));

        let meals = parse_meals(json!({ "meals": [Value::Object(record)] })).unwrap();
        let meal = &meals[0];

        assert_eq!(meal.ingredient_slots.len(), 20);
        let rows = meal.ingredients();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Salt");
        assert_eq!(rows[0].measure, "1 tsp");
    }

    #[test]
    fn test_non_object_body_is_an_error() {
        assert!(parse_meals(json!("Invalid request")).is_err());
        assert!(parse_meals(json!({ "meals": "oops" })).is_err());
    }
}
