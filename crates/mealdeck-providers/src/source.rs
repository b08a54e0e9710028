use crate::{Endpoint, HttpClient, Result, parse_areas, parse_lookup, parse_meals};
use async_trait::async_trait;
use mealdeck_types::{Area, Meal, MealId};

/// Where meals come from.
///
/// Every method maps to one API request. "Nothing found" is `Ok` with an
/// empty collection (or `None` for a lookup); `Err` is reserved for network
/// and decoding failures.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn browse_by_letter(&self, letter: char) -> Result<Vec<Meal>>;

    async fn search_by_name(&self, term: &str) -> Result<Vec<Meal>>;

    async fn lookup(&self, id: &MealId) -> Result<Option<Meal>>;

    async fn list_areas(&self) -> Result<Vec<Area>>;

    async fn filter_by_area(&self, area: &Area) -> Result<Vec<Meal>>;
}

/// `RecipeSource` backed by the live recipe API
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    client: HttpClient,
}

impl HttpRecipeSource {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn browse_by_letter(&self, letter: char) -> Result<Vec<Meal>> {
        let body = self
            .client
            .fetch_json(&Endpoint::BrowseByLetter(letter))
            .await?;
        parse_meals(body)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Meal>> {
        let body = self
            .client
            .fetch_json(&Endpoint::SearchByName(term.to_string()))
            .await?;
        parse_meals(body)
    }

    async fn lookup(&self, id: &MealId) -> Result<Option<Meal>> {
        let body = self.client.fetch_json(&Endpoint::Lookup(id.clone())).await?;
        parse_lookup(body)
    }

    async fn list_areas(&self) -> Result<Vec<Area>> {
        let body = self.client.fetch_json(&Endpoint::ListAreas).await?;
        parse_areas(body)
    }

    async fn filter_by_area(&self, area: &Area) -> Result<Vec<Meal>> {
        let body = self
            .client
            .fetch_json(&Endpoint::FilterByArea(area.clone()))
            .await?;
        parse_meals(body)
    }
}
