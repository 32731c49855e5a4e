//! Domain layer shared by the database and API crates.
//!
//! Contains the identifier/payload validator (pure functions, no I/O),
//! the domain error taxonomy, and common type aliases.

pub mod error;
pub mod types;
pub mod validation;
