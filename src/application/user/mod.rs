//! User use cases
//!
//! Application-level operations that sequence domain rules and port calls
//! to fulfill one request each.

mod register_user;

pub use register_user::{RegisterUserCommand, RegisterUserResponse, RegisterUserUseCase};
