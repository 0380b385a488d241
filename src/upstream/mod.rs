//! Upstream recipe API subsystem.
//!
//! # Data Flow
//! ```text
//! handler call
//!     → client.rs (build URL, GET with timeout)
//!     → types.rs (decode envelope, normalize null drinks)
//!     → Vec<ApiDrink> / Vec<String> back to the handler
//! ```
//!
//! # Design Decisions
//! - The upstream is a black box; no caching, retries or rate limiting
//! - `{ "drinks": null }` and a missing `drinks` key both mean "no
//!   matches" and normalize to an empty sequence at the decode boundary
//! - All failure modes collapse into one [`UpstreamError`] taxonomy,
//!   recovered at the route-handler boundary

pub mod client;
pub mod types;

pub use client::CocktailApiClient;
pub use types::{ApiDrink, UpstreamError, UpstreamResult, INGREDIENT_SLOTS};
