//! # Core Types
//!
//! This crate defines the two entities of the reservation system: the
//! restaurant's customers and the reservations they hold. Each entity maps
//! one-to-one with a database row and carries its pure derived behaviors
//! (display name, human-readable reservation time).
//!
//! As a Layer 0 crate it has no knowledge of repositories or SQL; the
//! `database` crate owns the persistence lifecycle of both types.

// Declare the modules that make up this crate.
pub mod customer;
pub mod reservation;

// Re-export the core types to provide a clean public API.
pub use customer::Customer;
pub use reservation::Reservation;
