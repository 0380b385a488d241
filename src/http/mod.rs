//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → server.rs (Axum setup, middleware, static files)
//!     → request.rs (request ID attached)
//!     → handlers.rs (parse params, call upstream, build view model)
//!     → response.rs (render template)
//!     → HTTP 200 to the client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::MakeRequestUuid;
pub use server::{AppState, HttpServer, StartupError};
