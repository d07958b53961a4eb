// src/generators/mod.rs
pub mod password;
pub mod pools;

pub use password::{GeneratorError, PasswordGenerator};
pub use pools::CharacterClass;
