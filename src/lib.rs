//! # Menu Scraper
//!
//! Scrapes the McDonald's Ukraine menu into a JSON catalog and serves
//! read-only lookups over it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Product entities, nutrient vocabulary and collaborator traits
//! - **Application Layer** ([`application`]) - HTML/JSON parsing and the scrape pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client, JSON snapshot file, log reporter
//! - **API Layer** ([`api`]) - Lookup handlers and middleware
//!
//! ## Pipeline
//!
//! 1. Fetch the listing page and extract one entry per product container
//! 2. For each entry, fetch its detail page for the description and item id
//! 3. Fetch the nutrition API for the item id and map labels to fields
//! 4. Write all records as one JSON array, replacing the previous snapshot
//!
//! Upstream failures degrade to empty values; only the snapshot write is fatal.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- scrape
//! cargo run -- serve
//! curl http://localhost:5000/products/Біг%20Мак/calories
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod scrape;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

