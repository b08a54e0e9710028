use crate::{Error, Result};
use mealdeck_types::{Area, MealId};
use reqwest::Url;

/// Public TheMealDB endpoint (free test key `1`)
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// The recipe API operations this client consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// All meals whose name starts with a letter
    BrowseByLetter(char),
    /// Meals whose name contains the term
    SearchByName(String),
    /// Full record for one meal
    Lookup(MealId),
    /// Every area (cuisine) known to the API
    ListAreas,
    /// Meals belonging to an area (id, name and thumbnail only)
    FilterByArea(Area),
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::BrowseByLetter(_) | Endpoint::SearchByName(_) => "search.php",
            Endpoint::Lookup(_) => "lookup.php",
            Endpoint::ListAreas => "list.php",
            Endpoint::FilterByArea(_) => "filter.php",
        }
    }

    pub fn query(&self) -> (&'static str, String) {
        match self {
            Endpoint::BrowseByLetter(letter) => ("f", letter.to_string()),
            Endpoint::SearchByName(term) => ("s", term.clone()),
            Endpoint::Lookup(id) => ("i", id.to_string()),
            Endpoint::ListAreas => ("a", "list".to_string()),
            Endpoint::FilterByArea(area) => ("a", area.to_string()),
        }
    }

    /// Absolute request URL. The query value is form-encoded.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base
            .join(self.path())
            .map_err(|e| Error::Url(format!("cannot join '{}': {}", self.path(), e)))?;
        let (key, value) = self.query();
        url.query_pairs_mut().append_pair(key, &value);
        Ok(url)
    }
}

/// Parse a base URL, making sure it ends with `/` so that endpoint paths are
/// appended instead of replacing the last segment.
pub(crate) fn parse_base_url(base: &str) -> Result<Url> {
    let normalized = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    Url::parse(&normalized).map_err(|e| Error::Url(format!("invalid base URL '{}': {}", base, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_browse_url() {
        let url = Endpoint::BrowseByLetter('a').url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.themealdb.com/api/json/v1/1/search.php?f=a"
        );
    }

    #[test]
    fn test_search_term_is_encoded() {
        let url = Endpoint::SearchByName("chicken & rice".to_string())
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.themealdb.com/api/json/v1/1/search.php?s=chicken+%26+rice"
        );
    }

    #[test]
    fn test_lookup_and_area_urls() {
        let lookup = Endpoint::Lookup(MealId::new("52772")).url(&base()).unwrap();
        assert_eq!(lookup.path(), "/api/json/v1/1/lookup.php");
        assert_eq!(lookup.query(), Some("i=52772"));

        let areas = Endpoint::ListAreas.url(&base()).unwrap();
        assert_eq!(areas.query(), Some("a=list"));

        let filter = Endpoint::FilterByArea(Area::new("Italian"))
            .url(&base())
            .unwrap();
        assert_eq!(filter.path(), "/api/json/v1/1/filter.php");
        assert_eq!(filter.query(), Some("a=Italian"));
    }

    #[test]
    fn test_base_url_with_trailing_slash_is_kept() {
        let base = parse_base_url("http://localhost:8080/api/").unwrap();
        let url = Endpoint::ListAreas.url(&base).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/list.php?a=list");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(parse_base_url("not a url"), Err(Error::Url(_))));
    }
}
