//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Case configuration and order notes commands
pub mod case;

/// General utility commands
pub mod general;

/// SKU lookup commands
pub mod sku;

// Export commands
pub use case::*;
pub use general::*;
pub use sku::*;
