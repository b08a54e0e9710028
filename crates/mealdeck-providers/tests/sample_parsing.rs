use mealdeck_providers::{parse_areas, parse_lookup, parse_meals};
use serde_json::Value;
use std::path::PathBuf;

fn load_sample(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/samples")
        .join(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content).expect("Sample is not valid JSON")
}

#[test]
fn test_lookup_sample_decodes_full_record() {
    let meal = parse_lookup(load_sample("lookup_52772.json"))
        .unwrap()
        .expect("lookup should return a meal");

    assert_eq!(meal.id.as_str(), "52772");
    assert_eq!(meal.name, "Teriyaki Chicken Casserole");
    assert_eq!(meal.category.as_deref(), Some("Chicken"));
    assert_eq!(meal.area.as_deref(), Some("Japanese"));
    assert_eq!(meal.source_url, None);
    assert_eq!(
        meal.video_url.as_deref(),
        Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")
    );
    assert!(meal.instructions.as_deref().unwrap().contains("\r\n"));
}

#[test]
fn test_lookup_sample_ingredient_rows() {
    let meal = parse_lookup(load_sample("lookup_52772.json"))
        .unwrap()
        .unwrap();

    let rows = meal.ingredients();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0].name, "soy sauce");
    assert_eq!(rows[0].measure, "3/4 cup");
    assert_eq!(rows[7].measure, "1 (12 oz.)");
    assert_eq!(rows[8].name, "brown rice");
}

#[test]
fn test_area_list_sample() {
    let areas = parse_areas(load_sample("list_areas.json")).unwrap();
    let names: Vec<&str> = areas.iter().map(|a| a.as_str()).collect();
    assert_eq!(
        names,
        vec!["American", "British", "Canadian", "Chinese", "Italian", "Japanese"]
    );
}

#[test]
fn test_filter_sample_keeps_api_order() {
    let meals = parse_meals(load_sample("filter_canadian.json")).unwrap();
    assert_eq!(meals.len(), 8);
    assert_eq!(meals[0].name, "BeaverTails");
    assert_eq!(meals[7].name, "Poutine");
    assert!(meals.iter().all(|m| m.category.is_none()));
}

#[test]
fn test_not_found_sample_is_empty() {
    assert!(parse_meals(load_sample("search_not_found.json")).unwrap().is_empty());
}
