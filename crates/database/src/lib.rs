//! # Database Crate
//!
//! This crate is the persistence layer of the reservation system. It maps
//! between stored rows and the in-memory entities from `core-types`, one
//! repository per entity.
//!
//! ## Architectural Principles
//!
//! - **Injected collaborator:** every repository is constructed with the
//!   connection pool it queries through. Nothing in this crate reaches for
//!   process-wide state, so any pool (including an in-memory one in tests)
//!   can stand in.
//! - **One statement per call:** each repository method issues exactly one
//!   parameterized query and awaits it. There is no batching, caching, or
//!   client-side locking; concurrent callers are arbitrated by the storage
//!   engine alone.
//! - **Positional placeholders everywhere:** user-supplied values are always
//!   bound through `$N` placeholders, never interpolated into SQL text.
//!
//! ## Public API
//!
//! - `connect`: the async function to establish the connection pool.
//! - `run_migrations`: applies the embedded schema migrations.
//! - `CustomerRepository` / `ReservationRepository`: the high-level data
//!   access methods for the two entities.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod customers;
pub mod error;
pub mod reservations;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use customers::CustomerRepository;
pub use error::DbError;
pub use reservations::ReservationRepository;
