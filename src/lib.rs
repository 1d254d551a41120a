//! # formbridge
//!
//! Accepts `multipart/form-data` submissions and turns them into typed,
//! validated records.
//!
//! Records declare their fields through [`domain::FormRecord`]; a
//! [`adapters::form_adapter::FormAdapter`] reads each declared part by name,
//! substitutes defaults for absent parts and runs the record's validating
//! constructor. Failures come back as field-attributed JSON errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formbridge::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let state = formbridge::AppState::new()?;
//!     let app = formbridge::create_app(state, &settings);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::form_adapter::FormAdapter;
use crate::adapters::item_handler;
use crate::config::Settings;
use crate::domain::{Item, SchemaError};
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::trace::TraceLayer;

/// Process-wide application state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub items: FormAdapter<Item>,
}

impl AppState {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            items: FormAdapter::new()?,
        })
    }
}

/// Creates the Axum application router.
///
/// # Arguments
///
/// * `state` - Form adapters shared by all requests
/// * `settings` - Application settings (body size limit)
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .route("/test", post(item_handler::create_item))
        .with_state(state)
        .layer(DefaultBodyLimit::max(settings.form.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
