//! Core business logic - framework-agnostic order building.
//!
//! Nothing in here knows about Discord. The bot layer calls into these modules
//! and formats their results.

pub mod case;
pub mod catalog;
pub mod drafts;
pub mod notes;
pub mod sku;
pub mod wizard;
