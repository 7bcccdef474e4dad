//! User infrastructure - password hashing and the user service

mod password;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{RegisterUserRequest, UserService};
