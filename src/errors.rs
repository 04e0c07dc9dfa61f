//! Unified error types and result handling.

use crate::core::notes::ValidationError;
use crate::models::{PocketType, SlotRole};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The product catalog failed to load or validate. Fatal at startup.
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Unknown {field}: '{value}'")]
    UnknownOption { field: &'static str, value: String },

    #[error("Color '{name}' is not in the catalog")]
    ColorNotFound { name: String },

    #[error("Slot '{slot}' is not available for {}", .pocket.map_or("a case without a pocket", PocketType::label))]
    SlotUnavailable {
        slot: SlotRole,
        pocket: Option<PocketType>,
    },

    #[error("Expected {expected}, got {received}")]
    UnexpectedInput { expected: String, received: String },

    #[error("A case is already being configured; finish it with `/case answer` first")]
    WizardActive,

    #[error("No case is being configured; start one with `/case add`")]
    NoActiveWizard,

    #[error("Case {number} does not exist")]
    CaseNotFound { number: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
