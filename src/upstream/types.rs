//! Upstream payload types and error definitions.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Number of parallel ingredient/measure slots in an upstream record.
pub const INGREDIENT_SLOTS: usize = 15;

/// Envelope returned by every drink-returning endpoint.
///
/// Absence of matches is signaled by `drinks` being null or missing,
/// never by an empty array.
#[derive(Debug, Deserialize)]
pub struct DrinkList {
    #[serde(default)]
    pub drinks: Option<Vec<ApiDrink>>,
}

impl DrinkList {
    /// Normalize null/absent `drinks` to an empty sequence.
    pub fn into_drinks(self) -> Vec<ApiDrink> {
        self.drinks.unwrap_or_default()
    }
}

/// One drink record as the upstream returns it.
///
/// Every field may be null; list endpoints (`filter.php`) return records
/// carrying only id, name and thumbnail. The ingredient/measure slots are
/// a fixed set of index-named fields (`strIngredient1`..`strIngredient15`,
/// `strMeasure1`..`strMeasure15`) captured in `fields` and read through
/// [`ApiDrink::ingredient`] and [`ApiDrink::measure`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDrink {
    #[serde(rename = "idDrink")]
    pub id: Option<String>,

    #[serde(rename = "strDrink")]
    pub name: Option<String>,

    #[serde(rename = "strDrinkThumb")]
    pub thumbnail: Option<String>,

    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,

    /// Remaining upstream fields, including the ingredient/measure slots.
    /// Values are strings or null.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Option<String>>,
}

impl ApiDrink {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.fields
            .get(&format!("{}{}", prefix, index))
            .and_then(|value| value.as_deref())
    }

    /// Ingredient name in the given 1-based slot, if present.
    pub fn ingredient(&self, index: usize) -> Option<&str> {
        self.slot("strIngredient", index)
    }

    /// Measure text in the given 1-based slot, if present.
    pub fn measure(&self, index: usize) -> Option<&str> {
        self.slot("strMeasure", index)
    }
}

/// Envelope returned by the category list endpoint.
#[derive(Debug, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub drinks: Option<Vec<CategoryEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub name: Option<String>,
}

impl CategoryList {
    /// Category names in upstream order, dropping null entries.
    pub fn into_names(self) -> Vec<String> {
        self.drinks
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| entry.name)
            .collect()
    }
}

/// Errors that can occur talking to the upstream recipe API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure, timeout, or malformed payload.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// The configured base URL (or a derived endpoint URL) is invalid.
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_drinks_normalizes_to_empty() {
        let list: DrinkList = serde_json::from_str(r#"{"drinks": null}"#).unwrap();
        assert!(list.into_drinks().is_empty());
    }

    #[test]
    fn test_absent_drinks_normalizes_to_empty() {
        let list: DrinkList = serde_json::from_str("{}").unwrap();
        assert!(list.into_drinks().is_empty());
    }

    #[test]
    fn test_ingredient_slots() {
        let drink: ApiDrink = serde_json::from_str(
            r#"{
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strIngredient1": "Tequila",
                "strMeasure1": "1 1/2 oz ",
                "strIngredient2": null
            }"#,
        )
        .unwrap();
        assert_eq!(drink.ingredient(1), Some("Tequila"));
        assert_eq!(drink.measure(1), Some("1 1/2 oz "));
        assert_eq!(drink.ingredient(2), None);
        assert_eq!(drink.ingredient(3), None);
    }

    #[test]
    fn test_category_names_drop_nulls() {
        let list: CategoryList = serde_json::from_str(
            r#"{"drinks": [
                {"strCategory": "Ordinary Drink"},
                {"strCategory": null},
                {"strCategory": "Cocktail"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(list.into_names(), vec!["Ordinary Drink", "Cocktail"]);
    }

    #[test]
    fn test_error_display() {
        let err = UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "upstream returned status 503 Service Unavailable"
        );
    }
}
