// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const STRONG_PASSWORD_LENGTH: usize = 12;

pub const LOWERCASE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBER_CHARS: &[u8] = b"0123456789";
pub const SYMBOL_CHARS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The four character classes a password can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn charset(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE_CHARS,
            CharClass::Uppercase => UPPERCASE_CHARS,
            CharClass::Numbers => NUMBER_CHARS,
            CharClass::Symbols => SYMBOL_CHARS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Numbers => c.is_ascii_digit(),
            CharClass::Symbols => c.is_ascii() && SYMBOL_CHARS.contains(&(c as u8)),
        }
    }

    /// Whether any character of `password` belongs to this class.
    pub fn present_in(self, password: &str) -> bool {
        password.chars().any(|c| self.contains(c))
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Malé písmená",
            CharClass::Uppercase => "Veľké písmená",
            CharClass::Numbers => "Čísla",
            CharClass::Symbols => "Špeciálne znaky",
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordGenerationOptions {
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Numbers => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    /// Selected classes in generation order. An empty selection means all of them.
    pub fn selected_classes(&self) -> Vec<CharClass> {
        let selected: Vec<CharClass> = CharClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect();

        if selected.is_empty() {
            CharClass::ALL.to_vec()
        } else {
            selected
        }
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: STRONG_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

/// Result of evaluating a password on the server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordStrength {
    pub is_strong: bool,
    /// Overall score (0-100)
    pub score: i32,
    /// Human-readable recommendations
    pub feedback: String,
}
