// src/ui/error.rs
use std::fmt;
use thiserror::Error;

use super::client::ApiError;
use super::clipboard::ClipboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Evaluate,
    Strengthen,
    Copy,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Generate => write!(f, "generate"),
            Action::Evaluate => write!(f, "evaluate"),
            Action::Strengthen => write!(f, "strengthen"),
            Action::Copy => write!(f, "copy"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("{action}: no password entered")]
    EmptyInput { action: Action },

    #[error("{action} request failed: {source}")]
    Api {
        action: Action,
        #[source]
        source: ApiError,
    },

    #[error("copy: no password generated yet")]
    NothingToCopy,

    #[error("copy failed: {0}")]
    Clipboard(#[from] ClipboardError),
}

impl ActionError {
    pub fn action(&self) -> Action {
        match self {
            ActionError::EmptyInput { action } | ActionError::Api { action, .. } => *action,
            ActionError::NothingToCopy | ActionError::Clipboard(_) => Action::Copy,
        }
    }

    /// Fixed, localized message shown to the user for this failure.
    pub fn alert_message(&self) -> &'static str {
        match self {
            ActionError::EmptyInput { action: Action::Strengthen } => "Prosím, zadajte heslo na vylepšenie",
            ActionError::EmptyInput { .. } => "Prosím, zadajte heslo na vyhodnotenie",
            ActionError::Api { action: Action::Generate, .. } => {
                "Nepodarilo sa spojiť so serverom pre generovanie hesla."
            }
            ActionError::Api { action: Action::Strengthen, .. } => {
                "Nepodarilo sa spojiť so serverom pre vylepšenie hesla."
            }
            ActionError::Api { .. } => "Nepodarilo sa spojiť so serverom pre hodnotenie hesla.",
            ActionError::NothingToCopy => "Najprv vygenerujte heslo",
            ActionError::Clipboard(_) => "Kopírovanie do schránky zlyhalo.",
        }
    }

    /// User-input errors are handled locally and never reach the network.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ActionError::EmptyInput { .. } | ActionError::NothingToCopy)
    }
}
