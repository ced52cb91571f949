//! Adapter layer
//!
//! Translates between the outside world and the application layer. Only the
//! HTTP adapter exists today.

pub mod http;
