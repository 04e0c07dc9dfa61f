//! Catalog file loading from catalog.toml
//!
//! This module defines the on-disk shape of the product catalog: the color list
//! and the SKU tables partitioned by category. It only parses; structural checks
//! (duplicate keywords, missing attributes) happen when the parsed file is turned
//! into a [`crate::core::catalog::Catalog`].

use crate::errors::{Error, Result};
use crate::models::{CaseSize, CaseSpec, PocketType, Side, SkuCategory};
use serde::Deserialize;
use std::path::Path;

/// The catalog bundled with the binary, used when `CATALOG_PATH` is not set.
pub const BUILTIN_CATALOG: &str = include_str!("../../catalog.toml");

/// Structure representing the entire catalog.toml file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Colors in display order
    pub colors: Vec<ColorConfig>,
    /// SKU tables keyed by category
    #[serde(default)]
    pub skus: SkuTables,
}

/// Configuration for a single color swatch
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ColorConfig {
    pub name: String,
    /// `#RRGGBB` base color
    pub hex: String,
    #[serde(default)]
    pub splatter: bool,
    /// Accent colors layered over the base for splatter finishes
    #[serde(default)]
    pub accents: Vec<String>,
}

/// SKU rows grouped the way the lookup tool presents them.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkuTables {
    #[serde(default)]
    pub single: Vec<SkuConfig>,
    #[serde(default, rename = "2_pack")]
    pub two_pack: Vec<SkuConfig>,
    #[serde(default)]
    pub combo_pack: Vec<SkuConfig>,
    #[serde(default, rename = "3_pack")]
    pub three_pack: Vec<SkuConfig>,
    #[serde(default)]
    pub monthly: Vec<SkuConfig>,
    #[serde(default)]
    pub others: Vec<SkuConfig>,
}

impl SkuTables {
    /// Rows of one category, in file order.
    #[must_use]
    pub fn table(&self, category: SkuCategory) -> &[SkuConfig] {
        match category {
            SkuCategory::Single => &self.single,
            SkuCategory::TwoPack => &self.two_pack,
            SkuCategory::ComboPack => &self.combo_pack,
            SkuCategory::ThreePack => &self.three_pack,
            SkuCategory::Monthly => &self.monthly,
            SkuCategory::Others => &self.others,
        }
    }
}

/// One SKU row. Which attributes are required depends on the category.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct SkuConfig {
    /// Display name shown to staff
    pub name: String,
    /// The product code copied into orders
    pub keyword: String,
    pub pocket: Option<PocketType>,
    pub size: Option<CaseSize>,
    /// Only for side-specific replacement halves
    pub side: Option<Side>,
    /// Side-specific half that also fits the 2-week case
    #[serde(default)]
    pub cross_compatible: bool,
    /// Free-text remark, display only
    pub note: Option<String>,
    /// Combo pack halves
    pub first: Option<CaseSpec>,
    pub second: Option<CaseSpec>,
}

/// Parses catalog TOML text.
///
/// # Errors
/// Returns `Error::Catalog` if the TOML syntax is invalid, a required field is
/// missing, or an unknown key/enum value is present.
pub fn parse_catalog(contents: &str) -> Result<CatalogFile> {
    toml::from_str(contents).map_err(|e| Error::Catalog {
        message: format!("Failed to parse catalog: {e}"),
    })
}

/// Loads catalog TOML from a file.
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<CatalogFile> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load catalog from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Catalog {
        message: format!("Failed to read catalog file {}: {e}", path_ref.display()),
    })?;
    parse_catalog(&contents)
}
