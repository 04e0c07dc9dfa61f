//! Shared test utilities for `CaseOrderBuddy`.
//!
//! Helpers for loading the bundled catalog and building complete cases with
//! sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{case::CaseConfiguration, catalog::Catalog, catalog::Color},
    models::{CaseSize, PocketType, SlotRole},
};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// The catalog bundled with the crate.
pub fn builtin_catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

/// A color from the bundled catalog, by exact name.
///
/// # Panics
/// Panics if the catalog has no such color.
pub fn color(name: &str) -> Color {
    builtin_catalog()
        .color_by_name(name)
        .cloned()
        .unwrap_or_else(|| panic!("no color named '{name}' in the bundled catalog"))
}

/// A complete single-color case with no lid, day or modifications.
pub fn single_case(pocket: PocketType, size: CaseSize, color_name: &str) -> CaseConfiguration {
    let mut case = CaseConfiguration::new();
    case.set_pocket(pocket);
    case.set_size(size);
    case.set_color(SlotRole::Single, color(color_name)).unwrap();
    case
}

/// A complete split case (AMPM or 2-WEEK) with both colors set.
pub fn split_case(
    pocket: PocketType,
    size: CaseSize,
    first: &str,
    second: &str,
) -> CaseConfiguration {
    let mut case = CaseConfiguration::new();
    case.set_pocket(pocket);
    case.set_size(size);
    case.set_color(SlotRole::First, color(first)).unwrap();
    case.set_color(SlotRole::Second, color(second)).unwrap();
    case
}
