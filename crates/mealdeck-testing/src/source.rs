//! In-memory `RecipeSource` for controller tests.

use async_trait::async_trait;
use mealdeck_providers::{Error, RecipeSource, Result};
use mealdeck_types::{Area, Meal, MealId};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// One request made against the fake, in call order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    BrowseByLetter(char),
    SearchByName(String),
    Lookup(MealId),
    ListAreas,
    FilterByArea(Area),
}

#[derive(Default)]
struct Script {
    letters: HashMap<char, Vec<Meal>>,
    searches: HashMap<String, Vec<Meal>>,
    by_area: HashMap<Area, Vec<Meal>>,
    details: HashMap<MealId, Meal>,
    areas: Vec<Area>,
    failing: HashSet<Call>,
    delays: HashMap<Call, Duration>,
}

/// Scripted recipe source.
///
/// Unscripted collection requests answer with an empty list and unknown
/// lookups with `None`, mirroring the API's "no meals" response. Failures
/// surface as a JSON decoding error, the same thing a broken body produces.
///
/// # Example
/// ```no_run
/// use mealdeck_testing::{Call, FakeRecipeSource, fixtures};
/// use std::time::Duration;
///
/// let source = FakeRecipeSource::new()
///     .with_letter('a', fixtures::numbered_meals("Apple", 14))
///     .with_delay(Call::SearchByName("pie".into()), Duration::from_millis(500));
/// ```
#[derive(Default)]
pub struct FakeRecipeSource {
    script: Mutex<Script>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRecipeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_letter(self, letter: char, meals: Vec<Meal>) -> Self {
        self.script().letters.insert(letter, meals);
        self
    }

    pub fn with_search(self, term: &str, meals: Vec<Meal>) -> Self {
        self.script().searches.insert(term.to_string(), meals);
        self
    }

    pub fn with_area(self, area: &str, meals: Vec<Meal>) -> Self {
        self.script().by_area.insert(Area::new(area), meals);
        self
    }

    pub fn with_detail(self, meal: Meal) -> Self {
        self.script().details.insert(meal.id.clone(), meal);
        self
    }

    pub fn with_areas(self, areas: Vec<Area>) -> Self {
        self.script().areas = areas;
        self
    }

    pub fn with_delay(self, call: Call, delay: Duration) -> Self {
        self.script().delays.insert(call, delay);
        self
    }

    pub fn failing(self, call: Call) -> Self {
        self.set_failing(call, true);
        self
    }

    /// Toggle failure injection for one request after construction
    pub fn set_failing(&self, call: Call, failing: bool) {
        let mut script = self.script();
        if failing {
            script.failing.insert(call);
        } else {
            script.failing.remove(&call);
        }
    }

    /// Every request made so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the call, wait out its delay, and report whether it should fail
    async fn enter(&self, call: Call) -> Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call.clone());

        let (delay, fails) = {
            let script = self.script();
            (
                script.delays.get(&call).copied(),
                script.failing.contains(&call),
            )
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if fails {
            return Err(injected_failure());
        }
        Ok(())
    }
}

fn injected_failure() -> Error {
    match serde_json::from_str::<serde_json::Value>("<html>injected failure</html>") {
        Err(err) => Error::Json(err),
        Ok(_) => Error::Url("injected failure".to_string()),
    }
}

#[async_trait]
impl RecipeSource for FakeRecipeSource {
    async fn browse_by_letter(&self, letter: char) -> Result<Vec<Meal>> {
        self.enter(Call::BrowseByLetter(letter)).await?;
        Ok(self.script().letters.get(&letter).cloned().unwrap_or_default())
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Meal>> {
        self.enter(Call::SearchByName(term.to_string())).await?;
        Ok(self.script().searches.get(term).cloned().unwrap_or_default())
    }

    async fn lookup(&self, id: &MealId) -> Result<Option<Meal>> {
        self.enter(Call::Lookup(id.clone())).await?;
        Ok(self.script().details.get(id).cloned())
    }

    async fn list_areas(&self) -> Result<Vec<Area>> {
        self.enter(Call::ListAreas).await?;
        Ok(self.script().areas.clone())
    }

    async fn filter_by_area(&self, area: &Area) -> Result<Vec<Meal>> {
        self.enter(Call::FilterByArea(area.clone())).await?;
        Ok(self.script().by_area.get(area).cloned().unwrap_or_default())
    }
}
