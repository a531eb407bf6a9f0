//! HTTP request handlers.
//!
//! Listing modules split their routes into `public_routes` and
//! `protected_routes`; the router wraps the latter in the auth middleware.

pub mod auth_handler;
pub mod booking_handler;
pub mod bus_handler;
pub mod cab_handler;
pub mod flight_handler;
pub mod hotel_handler;
pub mod package_handler;
pub mod trip_handler;

pub use booking_handler::booking_routes;
pub use trip_handler::trip_routes;
