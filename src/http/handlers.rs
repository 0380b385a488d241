//! Route handlers: the drink view transform.
//!
//! # Responsibilities
//! - Parse query/path parameters
//! - Call the upstream client (the one suspension point per request)
//! - Transform results into view models, or substitute fallbacks
//! - Render; upstream failure never surfaces as an HTTP error status
//!
//! # Design Decisions
//! - Each handler is a stateless request-scoped pipeline; no retries,
//!   no caching, no shared state beyond the immutable `AppState`
//! - `page` is taken as a raw string and parsed leniently: a typed
//!   extractor would reject non-numeric values with a 400 instead of
//!   defaulting to page 1

use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Deserialize;

use crate::http::response::render;
use crate::http::server::AppState;
use crate::upstream::{ApiDrink, UpstreamResult};
use crate::view::{
    ingredient_lines, parse_page, CategoriesView, CategoryView, Drink, DrinkSummary, DrinkView,
    SearchView,
};

/// Landing page with the search forms. No upstream call.
pub async fn home(State(state): State<AppState>) -> Response {
    render(&state.templates, "home.html", &serde_json::json!({}))
}

/// `GET /random` — one random drink, or the fallback drink.
pub async fn random_drink(State(state): State<AppState>) -> Response {
    let view = drink_view(state.upstream.random().await, "/random");
    render(&state.templates, "drink.html", &view)
}

/// `GET /cocktail/{id}` — drink lookup by upstream identifier.
///
/// The id is opaque and passed through unvalidated; an unknown id is a
/// "no record" failure and renders the fallback drink.
pub async fn drink_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let view = drink_view(state.upstream.lookup(&id).await, "/cocktail");
    render(&state.templates, "drink.html", &view)
}

/// Shared success/failure contract for the single-drink routes.
fn drink_view(result: UpstreamResult<Vec<ApiDrink>>, route: &str) -> DrinkView {
    match result {
        Ok(drinks) => match drinks.first() {
            Some(record) => DrinkView {
                drink: Drink::from_api(record),
                ingredients: ingredient_lines(record),
            },
            None => {
                tracing::warn!(route, "Upstream returned no drink record");
                DrinkView::fallback()
            }
        },
        Err(error) => {
            tracing::warn!(route, error = %error, "Upstream fetch failed");
            DrinkView::fallback()
        }
    }
}

fn summaries(drinks: &[ApiDrink]) -> Vec<DrinkSummary> {
    drinks.iter().map(DrinkSummary::from_api).collect()
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    page: Option<String>,
}

/// `GET /search-name?name=&page=` — drink search by name.
///
/// An empty or absent term short-circuits: no upstream call, empty
/// result set, zero total pages.
pub async fn search_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Response {
    let term = query.name.unwrap_or_default();
    let page = parse_page(query.page.as_deref());

    let view = if term.is_empty() {
        SearchView::empty(term)
    } else {
        match state.upstream.search_by_name(&term).await {
            Ok(drinks) => {
                let results = summaries(&drinks);
                SearchView::from_results(term, results, page)
            }
            Err(error) => {
                tracing::warn!(route = "/search-name", error = %error, "Upstream search failed");
                SearchView::empty(term)
            }
        }
    };

    render(&state.templates, "search.html", &view)
}

#[derive(Debug, Deserialize)]
pub struct IngredientQuery {
    #[serde(default)]
    ingredient: Option<String>,
    #[serde(default)]
    page: Option<String>,
}

/// `GET /search-ingredient?ingredient=&page=` — drink search keyed on
/// ingredient name. Same contract as the name search.
pub async fn search_by_ingredient(
    State(state): State<AppState>,
    Query(query): Query<IngredientQuery>,
) -> Response {
    let term = query.ingredient.unwrap_or_default();
    let page = parse_page(query.page.as_deref());

    let view = if term.is_empty() {
        SearchView::empty(term)
    } else {
        match state.upstream.filter_by_ingredient(&term).await {
            Ok(drinks) => {
                let results = summaries(&drinks);
                SearchView::from_results(term, results, page)
            }
            Err(error) => {
                tracing::warn!(
                    route = "/search-ingredient",
                    error = %error,
                    "Upstream ingredient filter failed"
                );
                SearchView::empty(term)
            }
        }
    };

    render(&state.templates, "search.html", &view)
}

/// `GET /categories` — category index; empty list on failure.
pub async fn categories(State(state): State<AppState>) -> Response {
    let categories = match state.upstream.list_categories().await {
        Ok(names) => names,
        Err(error) => {
            tracing::warn!(route = "/categories", error = %error, "Upstream category list failed");
            Vec::new()
        }
    };

    render(
        &state.templates,
        "categories.html",
        &CategoriesView { categories },
    )
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

/// `GET /category/{name}?page=` — drinks in one category.
///
/// `name` arrives percent-decoded from the path; it is used as-is for
/// display and pagination, and reqwest re-encodes it for the outbound
/// query.
pub async fn category(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let page = parse_page(query.page.as_deref());

    let view = match state.upstream.filter_by_category(&name).await {
        Ok(drinks) => {
            let results = summaries(&drinks);
            CategoryView::from_results(name, results, page)
        }
        Err(error) => {
            tracing::warn!(route = "/category", error = %error, "Upstream category filter failed");
            CategoryView::empty(name)
        }
    };

    render(&state.templates, "category.html", &view)
}
