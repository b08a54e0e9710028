use mealdeck_testing::{StubApi, TestWorld, fixtures::SampleFiles};

fn api(routes: &[(&str, &str)]) -> StubApi {
    let samples = SampleFiles::new();
    let routes: Vec<(&str, String)> = routes
        .iter()
        .map(|(target, sample)| (*target, samples.body(sample).expect("sample")))
        .collect();
    StubApi::serve(&routes).expect("Failed to start stub API")
}

#[test]
fn test_areas_lists_every_area() {
    let api = api(&[("list.php?a=list", "list_areas.json")]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let result = world.run(&["areas"]).unwrap();

    assert!(result.success(), "areas failed: {}", result.stderr());
    for area in ["American", "British", "Canadian", "Chinese", "Italian", "Japanese"] {
        assert!(result.stdout().contains(area), "missing {}", area);
    }
    assert!(result.stdout().contains("mealdeck area American"));
}

#[test]
fn test_area_shows_first_page_then_all() {
    let api = api(&[("filter.php?a=Canadian", "filter_canadian.json")]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let first_page = world.run(&["area", "Canadian"]).unwrap();
    assert!(first_page.success(), "area failed: {}", first_page.stderr());
    assert!(first_page.stdout().contains("Canadian cuisine (6 of 8)"));
    assert!(first_page.stdout().contains("BeaverTails [N/A]"));
    assert!(first_page.stdout().contains("Pate Chinois"));
    assert!(!first_page.stdout().contains("Poutine"));
    assert!(first_page.stdout().contains("mealdeck area Canadian --all"));

    let all = world.run(&["area", "Canadian", "--all"]).unwrap();
    assert!(all.success());
    assert!(all.stdout().contains("Canadian cuisine (8 of 8)"));
    assert!(all.stdout().contains("Poutine"));
}

#[test]
fn test_show_prints_recipe() {
    let api = api(&[("lookup.php?i=52772", "lookup_52772.json")]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let result = world.run(&["show", "52772"]).unwrap();

    assert!(result.success(), "show failed: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Teriyaki Chicken Casserole (#52772)"));
    assert!(stdout.contains("Category: Chicken"));
    assert!(stdout.contains("Area: Japanese"));
    assert!(stdout.contains("  - soy sauce: 3/4 cup"));
    assert!(stdout.contains("  - brown rice: 3 cups"));
    assert!(stdout.contains("Instructions:"));
    assert!(!stdout.contains('\r'));
}

#[test]
fn test_show_unknown_id_fails() {
    let api = api(&[("lookup.php?i=1", "search_not_found.json")]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let result = world.run(&["show", "1"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Meal details not found."));
}

#[test]
fn test_search_without_matches() {
    let api = api(&[("search.php?s=xyzzy", "search_not_found.json")]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let result = world.run(&["search", "xyzzy"]).unwrap();

    assert!(result.success(), "search failed: {}", result.stderr());
    assert!(result.stdout().contains("Search: \"xyzzy\" (0 of 0)"));
    assert!(result.stdout().contains("No meals found."));
}

#[test]
fn test_search_strips_angle_brackets() {
    let api = api(&[]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let _ = world.run(&["search", " <b>pie</b> "]).unwrap();

    let requests = api.requests();
    assert_eq!(requests.len(), 1, "requests: {:?}", requests);
    assert!(requests[0].starts_with("search.php?s=bpie"));
    assert!(!requests[0].contains("%3C"));
}

#[test]
fn test_empty_search_lists_browse_set() {
    let api = api(&[("search.php?f=a", "filter_canadian.json")]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let result = world.run(&["search", "   "]).unwrap();

    assert!(result.success(), "search failed: {}", result.stderr());
    assert!(result.stdout().contains("Meals starting with 'A' (6 of 8)"));
    assert!(result.stdout().contains("mealdeck search \"\" --all"));
}

#[test]
fn test_default_letter_from_config() {
    let api = api(&[("search.php?f=c", "filter_canadian.json")]);
    let world = TestWorld::new()
        .with_base_url(api.base_url())
        .with_config("[browse]\ndefault_letter = \"c\"\n");

    let result = world.run(&["search", ""]).unwrap();

    assert!(result.success(), "search failed: {}", result.stderr());
    assert!(result.stdout().contains("Meals starting with 'C'"));
}

#[test]
fn test_api_failure_reports_message() {
    let api = api(&[]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let areas = world.run(&["areas"]).unwrap();
    assert!(!areas.success());
    assert!(areas.stderr().contains("Failed to load areas"));

    let area = world.run(&["area", "Thai"]).unwrap();
    assert!(!area.success());
    assert!(area.stderr().contains("Failed to filter by area"));
}

#[test]
fn test_json_format_dumps_view_model() {
    let api = api(&[("filter.php?a=Canadian", "filter_canadian.json")]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let result = world.run(&["area", "Canadian", "--format", "json"]).unwrap();

    assert!(result.success(), "area failed: {}", result.stderr());
    let json: serde_json::Value = serde_json::from_str(result.stdout()).unwrap();
    assert_eq!(json["content"]["summary"]["total"], 8);
    assert_eq!(json["content"]["cards"].as_array().unwrap().len(), 6);
    assert_eq!(json["content"]["cards"][0]["name"], "BeaverTails");
}

#[test]
fn test_browse_without_terminal_prints_default_set() {
    let api = api(&[("search.php?f=a", "filter_canadian.json")]);
    let world = TestWorld::new().with_base_url(api.base_url());

    let result = world.run(&[]).unwrap();

    assert!(result.success(), "browse failed: {}", result.stderr());
    assert!(result.stdout().contains("Meals starting with 'A' (6 of 8)"));
    assert!(!result.stdout().contains("--all"));
    assert!(result.stdout().contains("mealdeck show"));
}
