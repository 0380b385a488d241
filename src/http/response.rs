//! Response construction.
//!
//! # Responsibilities
//! - Serialize a view model into a tera context
//! - Render the route's template to HTML
//! - Map template failures to a 500
//!
//! # Design Decisions
//! - Upstream failures never reach this point; handlers have already
//!   substituted fallback view models, so a failure here is a local
//!   template bug and is the one path that returns a non-200

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use tera::{Context, Tera};

/// Render a view model through the named template.
pub fn render<T: Serialize>(templates: &Tera, template: &str, view: &T) -> Response {
    let context = match Context::from_serialize(view) {
        Ok(context) => context,
        Err(error) => return render_failure(template, &error),
    };

    match templates.render(template, &context) {
        Ok(html) => Html(html).into_response(),
        Err(error) => render_failure(template, &error),
    }
}

fn render_failure(template: &str, error: &tera::Error) -> Response {
    tracing::error!(template, error = %error, "Template rendering failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
}
