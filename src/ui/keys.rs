// src/ui/keys.rs

/// A key press as the page sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: char,
    pub alt: bool,
    pub ctrl: bool,
}

impl KeyEvent {
    pub fn plain(key: char) -> Self {
        Self { key, alt: false, ctrl: false }
    }

    pub fn alt(key: char) -> Self {
        Self { key, alt: true, ctrl: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Generate,
    Copy,
}

impl Shortcut {
    /// Alt+G generates, Alt+C copies. Matching is exact on the letter.
    pub fn from_key(event: &KeyEvent) -> Option<Self> {
        if !event.alt {
            return None;
        }
        match event.key {
            'g' => Some(Shortcut::Generate),
            'c' => Some(Shortcut::Copy),
            _ => None,
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Shortcut::Generate => "Alt+G",
            Shortcut::Copy => "Alt+C",
        }
    }
}
