//! User registration backend for the Newsroom CMS.
//!
//! Thin layered service: the HTTP adapter decodes requests, the
//! application layer orchestrates the registration flow, and the domain
//! layer owns validation and the capability ports (password hashing, id
//! generation, persistence) that the infrastructure layer implements.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
