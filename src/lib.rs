//! Server-rendered front end for a third-party cocktail-recipe API.
//!
//! # Architecture Overview
//!
//! ```text
//! HTTP request
//!     → http::server (axum router, middleware)
//!     → http::handlers (parse params)
//!     → upstream::client (the single outbound fetch)
//!     → view (flatten ingredients, paginate — or fall back)
//!     → http::response (tera template) → HTTP 200
//! ```
//!
//! Every route is a stateless request/response transform around one
//! upstream call; failures are recovered at the handler boundary with
//! placeholder content, never as HTTP error statuses.

// Core subsystems
pub mod config;
pub mod http;
pub mod upstream;
pub mod view;

// Cross-cutting concerns
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
