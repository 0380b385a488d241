//! Per-route view models passed to the template renderer.
//!
//! Key names are part of the template contract and serialize in
//! camelCase where they are multi-word.

use serde::Serialize;

use crate::view::drink::{Drink, DrinkSummary};
use crate::view::pagination::paginate;

/// View model for the single-drink routes (`/random`, `/cocktail/{id}`).
#[derive(Debug, Serialize)]
pub struct DrinkView {
    pub drink: Drink,
    pub ingredients: Vec<String>,
}

impl DrinkView {
    /// The view rendered when the upstream fetch fails or returns no
    /// usable record: the placeholder drink with no ingredient lines.
    pub fn fallback() -> Self {
        Self {
            drink: Drink::fallback(),
            ingredients: Vec::new(),
        }
    }
}

/// View model for the name and ingredient search routes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub drinks: Vec<DrinkSummary>,
    pub search_term: String,
    pub page: i64,
    pub total_pages: usize,
}

impl SearchView {
    /// Page window over a full result set.
    pub fn from_results(term: String, results: Vec<DrinkSummary>, page: i64) -> Self {
        let window = paginate(results, page);
        Self {
            drinks: window.items,
            search_term: term,
            page: window.page,
            total_pages: window.total_pages,
        }
    }

    /// Empty result set: rendered for a blank term or an upstream
    /// failure, echoing the term so the form can re-render the query.
    pub fn empty(term: String) -> Self {
        Self {
            drinks: Vec::new(),
            search_term: term,
            page: 1,
            total_pages: 0,
        }
    }
}

/// View model for a single category's drink list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub drinks: Vec<DrinkSummary>,
    pub category_name: String,
    pub page: i64,
    pub total_pages: usize,
}

impl CategoryView {
    pub fn from_results(name: String, results: Vec<DrinkSummary>, page: i64) -> Self {
        let window = paginate(results, page);
        Self {
            drinks: window.items,
            category_name: name,
            page: window.page,
            total_pages: window.total_pages,
        }
    }

    pub fn empty(name: String) -> Self {
        Self {
            drinks: Vec::new(),
            category_name: name,
            page: 1,
            total_pages: 0,
        }
    }
}

/// View model for the category index.
#[derive(Debug, Serialize)]
pub struct CategoriesView {
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(count: usize) -> Vec<DrinkSummary> {
        (1..=count)
            .map(|n| DrinkSummary {
                id: n.to_string(),
                name: format!("Drink {}", n),
                thumbnail: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_search_view_windows_results() {
        let view = SearchView::from_results("margarita".into(), summaries(12), 2);
        assert_eq!(view.drinks.len(), 3);
        assert_eq!(view.drinks[0].name, "Drink 10");
        assert_eq!(view.page, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.search_term, "margarita");
    }

    #[test]
    fn test_empty_view_sentinels() {
        let view = SearchView::empty("margarita".into());
        assert!(view.drinks.is_empty());
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn test_camel_case_keys() {
        let json =
            serde_json::to_value(SearchView::empty("old fashioned".into())).unwrap();
        assert_eq!(json["searchTerm"], "old fashioned");
        assert_eq!(json["totalPages"], 0);

        let json =
            serde_json::to_value(CategoryView::empty("Ordinary Drink".into())).unwrap();
        assert_eq!(json["categoryName"], "Ordinary Drink");
    }
}
