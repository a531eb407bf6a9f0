//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod booking;
pub mod bus;
pub mod cab;
pub mod flight;
pub mod hotel;
pub mod package;
pub mod trip;
pub mod user;
