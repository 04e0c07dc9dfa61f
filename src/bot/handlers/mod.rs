//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete.

/// Autocomplete handlers for colors, case options, SKU entries and wizard answers
pub mod autocomplete;
