//! Catalog business logic - the immutable reference data behind every lookup.
//!
//! A [`Catalog`] is built once from a parsed `catalog.toml` and never mutated.
//! Building it validates the table; a catalog that fails validation is a startup
//! error, not something individual lookups have to cope with.

use crate::{
    config::catalog::{self as catalog_file, CatalogFile, ColorConfig, SkuConfig},
    core::sku::COMBO_POCKETS,
    errors::{Error, Result},
    models::{CaseSpec, PocketType, Side, SkuCategory},
};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

/// A case color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    /// Unique, case-sensitive identity
    pub name: String,
    pub hex_code: String,
    pub is_splatter: bool,
    pub splatter_accents: Vec<String>,
}

/// What a SKU row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkuKind {
    /// A case (or a case half when `side` is not `Both`)
    Case {
        spec: CaseSpec,
        side: Side,
        cross_compatible: bool,
    },
    /// Two different cases sold together
    Combo { first: CaseSpec, second: CaseSpec },
    /// Engraving services and replacement parts
    Accessory,
}

/// One row of the SKU table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuEntry {
    pub display_name: String,
    pub keyword: String,
    pub kind: SkuKind,
    pub note: Option<String>,
}

impl SkuEntry {
    /// The pocket/size of a case row, `None` for combos and accessories.
    #[must_use]
    pub const fn case_spec(&self) -> Option<CaseSpec> {
        match self.kind {
            SkuKind::Case { spec, .. } => Some(spec),
            _ => None,
        }
    }
}

/// Colors and SKU tables, validated.
#[derive(Debug, Clone)]
pub struct Catalog {
    colors: Vec<Color>,
    skus: HashMap<SkuCategory, Vec<SkuEntry>>,
}

impl Catalog {
    /// Parses and validates the catalog bundled with the crate.
    ///
    /// # Errors
    /// Returns `Error::Catalog` if the bundled file is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(catalog_file::BUILTIN_CATALOG)
    }

    /// Reads, parses and validates a catalog file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(catalog_file::load_catalog_file(path)?)
    }

    /// Parses and validates catalog TOML text.
    ///
    /// # Errors
    /// Returns `Error::Catalog` on syntax or validation failures.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Self::from_file(catalog_file::parse_catalog(contents)?)
    }

    /// Validates a parsed catalog file.
    ///
    /// # Errors
    /// Returns `Error::Catalog` when:
    /// - a color name is empty or duplicated, or a hex code is not `#RRGGBB`
    /// - a splatter color has no accents, or a plain color lists accents
    /// - a SKU name or keyword is empty, or a keyword appears twice anywhere
    /// - a row lacks the attributes its category requires, or carries ones it must not
    /// - `3_pack` or `monthly` does not hold exactly one row
    pub fn from_file(file: CatalogFile) -> Result<Self> {
        let colors = validate_colors(file.colors)?;

        let mut seen_keywords = HashSet::new();
        let mut skus = HashMap::new();
        for category in SkuCategory::ALL {
            let rows = file.skus.table(category);
            if matches!(category, SkuCategory::ThreePack | SkuCategory::Monthly) && rows.len() != 1
            {
                return Err(catalog_error(format!(
                    "category '{category}' must contain exactly one entry, found {}",
                    rows.len()
                )));
            }

            let mut entries = Vec::with_capacity(rows.len());
            for row in rows {
                let entry = validate_entry(category, row)?;
                if !seen_keywords.insert(entry.keyword.clone()) {
                    return Err(catalog_error(format!(
                        "duplicate keyword '{}' in category '{category}'",
                        entry.keyword
                    )));
                }
                entries.push(entry);
            }
            skus.insert(category, entries);
        }

        debug!(
            colors = colors.len(),
            skus = seen_keywords.len(),
            "Catalog validated"
        );
        Ok(Self { colors, skus })
    }

    /// All colors in catalog order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Colors whose name contains `text`, ignoring case, in catalog order.
    #[must_use]
    pub fn colors_by_prefix(&self, text: &str) -> Vec<&Color> {
        let needle = text.to_lowercase();
        self.colors
            .iter()
            .filter(|color| color.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Exact color lookup, falling back to a case-insensitive match.
    #[must_use]
    pub fn color_by_name(&self, name: &str) -> Option<&Color> {
        let name = name.trim();
        self.colors
            .iter()
            .find(|color| color.name == name)
            .or_else(|| {
                self.colors
                    .iter()
                    .find(|color| color.name.eq_ignore_ascii_case(name))
            })
    }

    /// Rows of a category in catalog order.
    #[must_use]
    pub fn sku_entries(&self, category: SkuCategory) -> &[SkuEntry] {
        self.skus.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Finds a row of `category` by keyword or display name (case-insensitive).
    #[must_use]
    pub fn sku_entry(&self, category: SkuCategory, name_or_keyword: &str) -> Option<&SkuEntry> {
        let wanted = name_or_keyword.trim();
        self.sku_entries(category).iter().find(|entry| {
            entry.keyword.eq_ignore_ascii_case(wanted)
                || entry.display_name.eq_ignore_ascii_case(wanted)
        })
    }
}

fn catalog_error(message: String) -> Error {
    Error::Catalog { message }
}

fn is_hex_code(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn validate_colors(configs: Vec<ColorConfig>) -> Result<Vec<Color>> {
    let mut names = HashSet::new();
    let mut colors = Vec::with_capacity(configs.len());

    for config in configs {
        let name = config.name.trim().to_string();
        if name.is_empty() {
            return Err(catalog_error("color with an empty name".to_string()));
        }
        if !names.insert(name.clone()) {
            return Err(catalog_error(format!("duplicate color '{name}'")));
        }
        if !is_hex_code(&config.hex) {
            return Err(catalog_error(format!(
                "color '{name}' has invalid hex code '{}'",
                config.hex
            )));
        }
        if config.splatter && config.accents.is_empty() {
            return Err(catalog_error(format!(
                "splatter color '{name}' has no accent colors"
            )));
        }
        if !config.splatter && !config.accents.is_empty() {
            return Err(catalog_error(format!(
                "color '{name}' lists accents but is not a splatter"
            )));
        }
        if let Some(bad) = config.accents.iter().find(|accent| !is_hex_code(accent)) {
            return Err(catalog_error(format!(
                "color '{name}' has invalid accent '{bad}'"
            )));
        }

        colors.push(Color {
            name,
            hex_code: config.hex,
            is_splatter: config.splatter,
            splatter_accents: config.accents,
        });
    }

    Ok(colors)
}

fn validate_entry(category: SkuCategory, row: &SkuConfig) -> Result<SkuEntry> {
    let display_name = row.name.trim().to_string();
    let keyword = row.keyword.trim().to_string();
    if display_name.is_empty() || keyword.is_empty() {
        return Err(catalog_error(format!(
            "entry in '{category}' has an empty name or keyword"
        )));
    }
    let context = format!("'{display_name}' ({category})");

    let kind = match category {
        SkuCategory::ComboPack => combo_kind(row, &context)?,
        SkuCategory::Others => {
            if row.pocket.is_some()
                || row.size.is_some()
                || row.side.is_some()
                || row.cross_compatible
                || row.first.is_some()
                || row.second.is_some()
            {
                return Err(catalog_error(format!(
                    "{context} must not carry case attributes"
                )));
            }
            SkuKind::Accessory
        }
        SkuCategory::Single
        | SkuCategory::TwoPack
        | SkuCategory::ThreePack
        | SkuCategory::Monthly => case_kind(row, &context)?,
    };

    Ok(SkuEntry {
        display_name,
        keyword,
        kind,
        note: row.note.clone(),
    })
}

fn case_kind(row: &SkuConfig, context: &str) -> Result<SkuKind> {
    let (Some(pocket), Some(size)) = (row.pocket, row.size) else {
        return Err(catalog_error(format!("{context} is missing pocket or size")));
    };
    if row.first.is_some() || row.second.is_some() {
        return Err(catalog_error(format!(
            "{context} is not a combo pack but lists combo halves"
        )));
    }

    let side = row.side.unwrap_or_default();
    // Side-specific halves are only cataloged under ampm; 2-week reuses them.
    if side != Side::Both && pocket != PocketType::Ampm {
        return Err(catalog_error(format!(
            "{context} is side-specific but its pocket is '{}'",
            pocket.key()
        )));
    }
    if row.cross_compatible && side == Side::Both {
        return Err(catalog_error(format!(
            "{context} is marked cross-compatible but is not side-specific"
        )));
    }

    Ok(SkuKind::Case {
        spec: CaseSpec::new(pocket, size),
        side,
        cross_compatible: row.cross_compatible,
    })
}

fn combo_kind(row: &SkuConfig, context: &str) -> Result<SkuKind> {
    let (Some(first), Some(second)) = (row.first, row.second) else {
        return Err(catalog_error(format!(
            "{context} needs both 'first' and 'second'"
        )));
    };
    if row.pocket.is_some() || row.size.is_some() || row.side.is_some() {
        return Err(catalog_error(format!(
            "{context} must describe its cases through 'first' and 'second'"
        )));
    }
    if first == second {
        return Err(catalog_error(format!("{context} combines identical cases")));
    }
    if let Some(spec) = [first, second]
        .into_iter()
        .find(|spec| !COMBO_POCKETS.contains(&spec.pocket))
    {
        return Err(catalog_error(format!(
            "{context} combines a '{}' case; combo packs hold only mission and weekly cases",
            spec.pocket.key()
        )));
    }
    Ok(SkuKind::Combo { first, second })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::CaseSize;

    const MINIMAL: &str = r##"
        [[colors]]
        name = "Navy Blue"
        hex = "#4883E8"

        [[skus.3_pack]]
        name = "Triple Pack Case"
        keyword = "BPC-3PCB"
        pocket = "weekly"
        size = "pill"

        [[skus.monthly]]
        name = "Monthly Bundle Case"
        keyword = "BPC-MPCB"
        pocket = "weekly"
        size = "vitamin"
    "##;

    fn with_extra(extra: &str) -> String {
        format!("{MINIMAL}\n{extra}")
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.colors().len(), 19);
        assert_eq!(catalog.sku_entries(SkuCategory::Single).len(), 15);
        assert_eq!(catalog.sku_entries(SkuCategory::TwoPack).len(), 7);
        assert_eq!(catalog.sku_entries(SkuCategory::ComboPack).len(), 10);
        assert_eq!(catalog.sku_entries(SkuCategory::ThreePack).len(), 1);
        assert_eq!(catalog.sku_entries(SkuCategory::Monthly).len(), 1);
        assert_eq!(catalog.sku_entries(SkuCategory::Others).len(), 5);
    }

    #[test]
    fn test_colors_by_prefix_is_case_insensitive_and_ordered() {
        let catalog = Catalog::builtin().unwrap();

        let names: Vec<&str> = catalog
            .colors_by_prefix("pu")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Purple Punch"]);

        let names: Vec<&str> = catalog
            .colors_by_prefix("SPLATTER")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Black + Blue Splatter", "Disco Splatter", "Fire + Ice Splatter"]
        );

        assert_eq!(catalog.colors_by_prefix("").len(), 19);
        assert!(catalog.colors_by_prefix("plaid").is_empty());

        let spaced = catalog.colors_by_prefix(" ");
        assert!(!spaced.is_empty() && spaced.len() < 19);
        assert!(spaced.iter().all(|c| c.name.contains(' ')));
        assert!(catalog.colors_by_prefix("coffee ").is_empty());
    }

    #[test]
    fn test_color_by_name_prefers_exact_match() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.color_by_name("Rose Gold").unwrap().hex_code, "#FFCAC4");
        assert_eq!(catalog.color_by_name("rose gold").unwrap().name, "Rose Gold");
        assert!(catalog.color_by_name("Rose").is_none());
    }

    #[test]
    fn test_splatter_colors_keep_accents() {
        let catalog = Catalog::builtin().unwrap();
        let fire_ice = catalog.color_by_name("Fire + Ice Splatter").unwrap();
        assert!(fire_ice.is_splatter);
        assert_eq!(fire_ice.splatter_accents, vec!["#E0DFCB", "#4883E8"]);
    }

    #[test]
    fn test_side_specific_entries_are_structured() {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog
            .sku_entry(SkuCategory::Single, "SPC-WVALS")
            .unwrap();
        assert_eq!(
            entry.kind,
            SkuKind::Case {
                spec: CaseSpec::new(PocketType::Ampm, CaseSize::Vitamin),
                side: Side::Left,
                cross_compatible: true,
            }
        );
    }

    #[test]
    fn test_sku_entry_by_display_name() {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog
            .sku_entry(SkuCategory::Others, "lid replacement")
            .unwrap();
        assert_eq!(entry.keyword, "REP-LID");
        assert!(catalog.sku_entry(SkuCategory::Others, "SPC-NPC").is_none());
    }

    #[test]
    fn test_minimal_catalog_is_valid() {
        let catalog = Catalog::from_toml_str(MINIMAL).unwrap();
        assert!(catalog.sku_entries(SkuCategory::Single).is_empty());
    }

    #[test]
    fn test_duplicate_keyword_is_rejected() {
        let toml = with_extra(
            r#"
            [[skus.others]]
            name = "Triple Pack Again"
            keyword = "BPC-3PCB"
            "#,
        );
        let err = Catalog::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, Error::Catalog { ref message } if message.contains("BPC-3PCB")));
    }

    #[test]
    fn test_duplicate_color_is_rejected() {
        let toml = with_extra(
            r##"
            [[colors]]
            name = "Navy Blue"
            hex = "#000080"
            "##,
        );
        assert!(matches!(
            Catalog::from_toml_str(&toml),
            Err(Error::Catalog { .. })
        ));
    }

    #[test]
    fn test_bad_hex_is_rejected() {
        let toml = with_extra(
            r#"
            [[colors]]
            name = "Mystery"
            hex = "blue"
            "#,
        );
        assert!(Catalog::from_toml_str(&toml).is_err());
    }

    #[test]
    fn test_case_row_without_size_is_rejected() {
        let toml = with_extra(
            r#"
            [[skus.single]]
            name = "Nano Case"
            keyword = "SPC-N"
            pocket = "nano"
            "#,
        );
        let err = Catalog::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("missing pocket or size"));
    }

    #[test]
    fn test_side_specific_row_must_be_ampm() {
        let toml = with_extra(
            r#"
            [[skus.single]]
            name = "2-Week Left Side"
            keyword = "SPC-2WLS"
            pocket = "2-week"
            size = "pill"
            side = "left"
            "#,
        );
        assert!(Catalog::from_toml_str(&toml).is_err());
    }

    #[test]
    fn test_combo_row_needs_both_halves() {
        let toml = with_extra(
            r#"
            [[skus.combo_pack]]
            name = "Half Combo"
            keyword = "BPC-HALF"
            first = { pocket = "weekly", size = "pill" }
            "#,
        );
        assert!(Catalog::from_toml_str(&toml).is_err());
    }

    #[test]
    fn test_combo_row_rejects_pockets_outside_combos() {
        let toml = with_extra(
            r#"
            [[skus.combo_pack]]
            name = "Nano + Weekly Pill"
            keyword = "BPC-NWP"
            first = { pocket = "nano", size = "pill" }
            second = { pocket = "weekly", size = "pill" }
            "#,
        );
        let err = Catalog::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("'nano'"));
    }

    #[test]
    fn test_others_row_rejects_case_attributes() {
        let sided = with_extra(
            r#"
            [[skus.others]]
            name = "Left Lid"
            keyword = "LID-L"
            side = "left"
            "#,
        );
        let err = Catalog::from_toml_str(&sided).unwrap_err();
        assert!(err.to_string().contains("must not carry case attributes"));

        let cross = with_extra(
            r#"
            [[skus.others]]
            name = "Spare Hinge"
            keyword = "HINGE"
            cross_compatible = true
            "#,
        );
        assert!(Catalog::from_toml_str(&cross).is_err());

        let half = with_extra(
            r#"
            [[skus.others]]
            name = "Half Combo Part"
            keyword = "PART-2"
            second = { pocket = "weekly", size = "pill" }
            "#,
        );
        assert!(Catalog::from_toml_str(&half).is_err());
    }

    #[test]
    fn test_three_pack_needs_exactly_one_row() {
        let toml = with_extra(
            r#"
            [[skus.3_pack]]
            name = "Another Triple"
            keyword = "BPC-3PCB2"
            pocket = "weekly"
            size = "vitamin"
            "#,
        );
        let err = Catalog::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("exactly one"));
    }
}
