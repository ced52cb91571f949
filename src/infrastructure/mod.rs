//! Infrastructure layer
//!
//! Concrete implementations of the domain ports plus process concerns:
//! configuration loading, the PostgreSQL repository, the Argon2id hasher
//! and the UUID generator.

pub mod config;
pub mod id;
pub mod persistence;
pub mod security;
