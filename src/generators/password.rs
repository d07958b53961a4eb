// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use thiserror::Error;

use super::pools::{CharacterClass, ALL_CHARACTERS};
use crate::models::Password;

/// Shortest password that can hold one character of every class.
pub const MIN_GENERATED_LENGTH: usize = CharacterClass::ALL.len();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {minimum} to include all character types (got {requested})")]
    LengthTooShort { requested: usize, minimum: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Builds passwords that cover every [`CharacterClass`].
///
/// The generator owns its random source, so one instance is meant to live for
/// the whole session and be borrowed mutably for each password.
pub struct PasswordGenerator {
    rng: Box<dyn RngCore>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }

    /// Reproducible generator: the same seed yields the same passwords.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng<R: RngCore + 'static>(rng: R) -> Self {
        PasswordGenerator { rng: Box::new(rng) }
    }

    pub fn generate(&mut self, length: usize) -> Result<Password> {
        if length < MIN_GENERATED_LENGTH {
            return Err(GeneratorError::LengthTooShort {
                requested: length,
                minimum: MIN_GENERATED_LENGTH,
            });
        }

        let mut chars = Vec::with_capacity(length);

        // One guaranteed pick per class
        for class in CharacterClass::ALL {
            let pool = class.chars();
            chars.push(pool[self.rng.gen_range(0..pool.len())]);
        }

        let dist = Uniform::from(0..ALL_CHARACTERS.len());
        chars.extend((MIN_GENERATED_LENGTH..length).map(|_| ALL_CHARACTERS[dist.sample(&mut self.rng)]));

        chars.shuffle(&mut self.rng);

        log::debug!("Generated password of length {}", length);
        Ok(Password::from_bytes(chars))
    }
}

impl std::fmt::Debug for PasswordGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordGenerator").finish_non_exhaustive()
    }
}
