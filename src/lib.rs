//! Voyago - travel booking REST API
//!
//! Buses, flights, hotels, holiday packages and cabs can be searched by
//! anyone and booked by signed-in users. Seat and room inventory is taken
//! with a conditional UPDATE inside the same transaction as the booking
//! insert, and handed back when a booking is cancelled.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Listings, bookings, trips and accounts
//! - **services**: Use cases (auth, catalog, booking, trips)
//! - **infra**: Database, repositories, unit of work, Redis cache
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Load sample data and the admin account
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Booking, Password, User, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::Cache;
