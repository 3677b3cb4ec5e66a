// src/ui/strength.rs
use std::fmt;

pub const UNEVALUATED_TEXT: &str = "Sila hesla: Nevyhodnotené";
const BAR_CLASS: &str = "strength-bar";

/// Five discrete bands a 0-100 score is shown as. Lower bounds are
/// inclusive, so a boundary score belongs to the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthBand {
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=19 => StrengthBand::VeryWeak,
            20..=39 => StrengthBand::Weak,
            40..=59 => StrengthBand::Medium,
            60..=79 => StrengthBand::Strong,
            _ => StrengthBand::VeryStrong,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StrengthBand::VeryWeak => "very-weak",
            StrengthBand::Weak => "weak",
            StrengthBand::Medium => "medium",
            StrengthBand::Strong => "strong",
            StrengthBand::VeryStrong => "very-strong",
        }
    }

    pub fn width_percent(self) -> u8 {
        match self {
            StrengthBand::VeryWeak => 20,
            StrengthBand::Weak => 40,
            StrengthBand::Medium => 60,
            StrengthBand::Strong => 80,
            StrengthBand::VeryStrong => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthBand::VeryWeak => "Veľmi slabé",
            StrengthBand::Weak => "Slabé",
            StrengthBand::Medium => "Stredné",
            StrengthBand::Strong => "Silné",
            StrengthBand::VeryStrong => "Veľmi silné",
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Bar plus caption for one password field. `None` is the unevaluated state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthIndicator {
    band: Option<StrengthBand>,
}

impl StrengthIndicator {
    /// Replaces whatever band was shown before.
    pub fn render(&mut self, score: i32) {
        self.band = Some(StrengthBand::from_score(score));
    }

    pub fn reset(&mut self) {
        self.band = None;
    }

    pub fn band(&self) -> Option<StrengthBand> {
        self.band
    }

    pub fn width_percent(&self) -> u8 {
        self.band.map_or(0, StrengthBand::width_percent)
    }

    pub fn class_list(&self) -> String {
        match self.band {
            Some(band) => format!("{} {}", BAR_CLASS, band.css_class()),
            None => BAR_CLASS.to_string(),
        }
    }

    pub fn text(&self) -> String {
        match self.band {
            Some(band) => format!("Sila hesla: {}", band.label()),
            None => UNEVALUATED_TEXT.to_string(),
        }
    }
}
