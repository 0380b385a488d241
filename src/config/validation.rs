//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses and the upstream URL is HTTP(S)
//! - Validate value ranges (timeouts > 0, directories nonempty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Listener bind address is not a valid socket address.
    InvalidBindAddress(String),

    /// Upstream base URL does not parse or is not http(s).
    InvalidBaseUrl(String),

    /// A timeout is configured as zero.
    ZeroTimeout(&'static str),

    /// A required directory setting is empty.
    EmptyDir(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvalidBaseUrl(url) => {
                write!(f, "invalid upstream base URL '{}'", url)
            }
            ValidationError::ZeroTimeout(name) => {
                write!(f, "timeout '{}' must be greater than zero", name)
            }
            ValidationError::EmptyDir(name) => {
                write!(f, "directory setting '{}' must not be empty", name)
            }
        }
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(
            config.upstream.base_url.clone(),
        )),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    if config.templates.dir.is_empty() {
        errors.push(ValidationError::EmptyDir("templates.dir"));
    }
    if config.static_files.dir.is_empty() {
        errors.push(ValidationError::EmptyDir("static_files.dir"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
