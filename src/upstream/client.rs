//! Upstream recipe API client with timeout and error handling.
//!
//! # Responsibilities
//! - Build endpoint URLs from the configured base URL
//! - Issue GET requests with a per-request timeout
//! - Decode the `{ "drinks": [...] | null }` envelopes
//! - Map transport, status and decode failures to [`UpstreamError`]

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::types::{ApiDrink, CategoryList, DrinkList, UpstreamError, UpstreamResult};

/// Client for the cocktail recipe API.
///
/// Cheap to clone; the inner reqwest client is reference-counted.
#[derive(Debug, Clone)]
pub struct CocktailApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CocktailApiClient {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        // Url::join replaces the final path segment unless the base ends
        // with a slash, which would silently drop the version segment.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Fetch one random drink. The upstream returns a single-element list.
    pub async fn random(&self) -> UpstreamResult<Vec<ApiDrink>> {
        self.fetch_drinks("random.php", &[]).await
    }

    /// Look up a drink by its upstream identifier.
    ///
    /// The identifier is passed through unvalidated; an unknown id comes
    /// back as an empty list.
    pub async fn lookup(&self, id: &str) -> UpstreamResult<Vec<ApiDrink>> {
        self.fetch_drinks("lookup.php", &[("i", id)]).await
    }

    /// Search drinks by name.
    pub async fn search_by_name(&self, term: &str) -> UpstreamResult<Vec<ApiDrink>> {
        self.fetch_drinks("search.php", &[("s", term)]).await
    }

    /// List drink summaries containing the given ingredient.
    pub async fn filter_by_ingredient(&self, ingredient: &str) -> UpstreamResult<Vec<ApiDrink>> {
        self.fetch_drinks("filter.php", &[("i", ingredient)]).await
    }

    /// List drink summaries in the given category.
    pub async fn filter_by_category(&self, category: &str) -> UpstreamResult<Vec<ApiDrink>> {
        self.fetch_drinks("filter.php", &[("c", category)]).await
    }

    /// List all category names, in upstream order.
    pub async fn list_categories(&self) -> UpstreamResult<Vec<String>> {
        let list: CategoryList = self.get_json("list.php", &[("c", "list")]).await?;
        Ok(list.into_names())
    }

    async fn fetch_drinks(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> UpstreamResult<Vec<ApiDrink>> {
        let list: DrinkList = self.get_json(endpoint, query).await?;
        Ok(list.into_drinks())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> UpstreamResult<T> {
        let url = self.base_url.join(endpoint)?;
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = UpstreamConfig {
            base_url: "https://example.com/api/json/v1/1".into(),
            timeout_secs: 5,
        };
        let client = CocktailApiClient::new(&config).unwrap();
        assert_eq!(
            client.base_url.join("random.php").unwrap().as_str(),
            "https://example.com/api/json/v1/1/random.php"
        );
    }

    #[test]
    fn test_existing_trailing_slash_kept() {
        let config = UpstreamConfig {
            base_url: "https://example.com/api/".into(),
            timeout_secs: 5,
        };
        let client = CocktailApiClient::new(&config).unwrap();
        assert_eq!(
            client.base_url.join("lookup.php").unwrap().as_str(),
            "https://example.com/api/lookup.php"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = UpstreamConfig {
            base_url: "not a url".into(),
            timeout_secs: 5,
        };
        assert!(matches!(
            CocktailApiClient::new(&config),
            Err(UpstreamError::Url(_))
        ));
    }
}
