//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: PostgreSQL repositories on Diesel.
//! - **crypto**: argon2 password hashing.
//! - **token**: HS256 session tokens.
//!
//! Adapters translate between domain types and infrastructure
//! representations; they hold no business rules.

pub mod crypto;
pub mod persistence;
pub mod token;
