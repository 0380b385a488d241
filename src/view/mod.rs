//! View layer: the transforms between upstream records and templates.
//!
//! # Data Flow
//! ```text
//! Vec<ApiDrink> from the upstream client
//!     → drink.rs (ingredient-line flattening, display types)
//!     → pagination.rs (fixed-size page window)
//!     → models.rs (per-route view model, serialized for tera)
//! ```

pub mod drink;
pub mod models;
pub mod pagination;

pub use drink::{ingredient_lines, Drink, DrinkSummary, FALLBACK_NAME};
pub use models::{CategoriesView, CategoryView, DrinkView, SearchView};
pub use pagination::{paginate, parse_page, PageWindow, PAGE_SIZE};
