use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::{
    CharClass, PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
    STRONG_PASSWORD_LENGTH,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be between {min} and {max} characters, got {length}")]
    InvalidLength { length: usize, min: usize, max: usize },
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
        self.generate_password_with(options, &mut rand::thread_rng())
    }

    /// Builds a password with at least one character of every selected class,
    /// fills the rest from their union and shuffles the result.
    pub fn generate_password_with<R: Rng + ?Sized>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        if options.length < MIN_PASSWORD_LENGTH || options.length > MAX_PASSWORD_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length: options.length,
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            });
        }

        let classes = options.selected_classes();
        let charset: Vec<u8> = classes
            .iter()
            .flat_map(|class| class.charset().iter().copied())
            .collect();

        let mut password: Vec<u8> = Vec::with_capacity(options.length);
        for class in &classes {
            password.push(pick(class.charset(), rng));
        }
        while password.len() < options.length {
            password.push(pick(&charset, rng));
        }

        password.shuffle(rng);
        Ok(password.into_iter().map(char::from).collect())
    }

    pub fn strengthen_password(&self, weak_password: &str) -> String {
        self.strengthen_password_with(weak_password, &mut rand::thread_rng())
    }

    /// Appends one character of every missing class, pads up to
    /// `STRONG_PASSWORD_LENGTH`, shuffles and cuts the result back to
    /// `STRONG_PASSWORD_LENGTH`.
    pub fn strengthen_password_with<R: Rng + ?Sized>(&self, weak_password: &str, rng: &mut R) -> String {
        let mut password: Vec<char> = weak_password.chars().collect();

        for class in CharClass::ALL {
            if password.len() >= MAX_PASSWORD_LENGTH - 1 {
                break;
            }
            if !password.iter().any(|c| class.contains(*c)) {
                password.push(char::from(pick(class.charset(), rng)));
            }
        }

        if password.len() < STRONG_PASSWORD_LENGTH {
            let charset: Vec<u8> = CharClass::ALL
                .iter()
                .flat_map(|class| class.charset().iter().copied())
                .collect();
            while password.len() < STRONG_PASSWORD_LENGTH {
                password.push(char::from(pick(&charset, rng)));
            }
        }

        password.shuffle(rng);
        password.truncate(STRONG_PASSWORD_LENGTH);
        password.into_iter().collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick<R: Rng + ?Sized>(charset: &[u8], rng: &mut R) -> u8 {
    charset[rng.gen_range(0..charset.len())]
}
