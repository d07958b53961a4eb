// src/models.rs
use crate::generators::CharacterClass;

// A generated password, only ever built by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        // Pools are ASCII-only, so each byte is one char
        Password(bytes.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains_class(&self, class: CharacterClass) -> bool {
        self.0.chars().any(|c| class.matches(c))
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
