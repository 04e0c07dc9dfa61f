//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `CaseOrderBuddy`: slash
//! commands, autocomplete handlers, the shared bot context and the framework
//! setup.

/// Discord command implementations (case, sku, general)
pub mod commands;
/// Framework setup, error hook and client startup
pub mod framework;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::core::{catalog::Catalog, drafts::DraftBook};
use std::sync::Arc;

/// Shared data available to all bot commands.
pub struct BotData {
    /// Read-only product catalog
    pub catalog: Arc<Catalog>,
    /// Every user's in-memory order draft
    pub drafts: DraftBook,
}

impl BotData {
    /// Creates the bot context around a validated catalog, with no drafts yet.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            drafts: DraftBook::new(),
        }
    }
}

pub use commands::*;
pub use framework::run_bot;
pub use handlers::*;
