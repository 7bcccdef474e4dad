//! User domain
//!
//! Domain types for user accounts: the user entity, identifier, and
//! username/password validation rules.

mod entity;
mod validation;

pub use entity::{User, UserId};
pub use validation::{validate_password, validate_username};
