// src/ui/state.rs
use crate::models::CharClass;
use super::strength::StrengthIndicator;

pub const COPY_IDLE_LABEL: &str = "Kopírovať";
pub const COPY_CONFIRMED_LABEL: &str = "✓";

/// Everything the password page shows, owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Raw text of the length field, parsed only when generating
    pub length_input: String,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub password_output: String,
    pub generated_strength: StrengthIndicator,
    pub existing_password: String,
    pub existing_strength: StrengthIndicator,
    pub feedback: FeedbackPanel,
    pub copy_button: CopyButton,
}

impl PageState {
    pub fn new(default_length: usize) -> Self {
        Self {
            length_input: default_length.to_string(),
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            password_output: String::new(),
            generated_strength: StrengthIndicator::default(),
            existing_password: String::new(),
            existing_strength: StrengthIndicator::default(),
            feedback: FeedbackPanel::default(),
            copy_button: CopyButton::default(),
        }
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Numbers => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_included(&mut self, class: CharClass, included: bool) {
        match class {
            CharClass::Lowercase => self.include_lowercase = included,
            CharClass::Uppercase => self.include_uppercase = included,
            CharClass::Numbers => self.include_numbers = included,
            CharClass::Symbols => self.include_symbols = included,
        }
    }

    /// Clears what was shown about the previous existing password.
    pub fn reset_existing_evaluation(&mut self) {
        self.existing_strength.reset();
        self.feedback.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackPanel {
    pub content: String,
    pub visible: bool,
}

impl FeedbackPanel {
    pub fn show(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.visible = true;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.visible = false;
    }
}

/// Copy button with a transient confirmation. Every confirmation gets a new
/// ticket; only the latest ticket may revert the label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyButton {
    confirming: bool,
    ticket: u64,
}

impl CopyButton {
    pub fn confirm(&mut self) -> u64 {
        self.ticket += 1;
        self.confirming = true;
        self.ticket
    }

    pub fn restore(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.confirming = false;
        }
    }

    /// Number of copies made so far.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn label(&self) -> &'static str {
        if self.confirming {
            COPY_CONFIRMED_LABEL
        } else {
            COPY_IDLE_LABEL
        }
    }
}

/// Reads the length field the way a browser's `parseInt` would: optional
/// sign and leading digits after whitespace, anything else is `None`.
/// Digit runs too large for `i64` saturate, so the value still reads as
/// out of range rather than missing.
pub fn parse_length_input(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // only overflow can fail here
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}
