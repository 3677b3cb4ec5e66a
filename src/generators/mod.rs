// src/generators/mod.rs
mod password;
mod strength;

pub use password::{GeneratorError, PasswordGenerator};
pub use strength::{calculate_entropy, evaluate_password_strength};
