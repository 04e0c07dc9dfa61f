//! SKU resolution - maps a lookup selection onto a catalog keyword.
//!
//! Resolution never fails with an error: a selection either finds a keyword,
//! finds nothing, or is rejected as unresolvable. Each outcome has a terminal
//! user-facing message.

use crate::{
    core::catalog::{Catalog, SkuEntry, SkuKind},
    models::{CaseSpec, PocketType, Side, SkuCategory},
};
use std::fmt;
use tracing::debug;

/// Pockets offered for combo packs.
pub const COMBO_POCKETS: [PocketType; 2] = [PocketType::Mission, PocketType::Weekly];

/// What the user picked in the lookup tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkuSelection {
    /// Nothing picked yet (enough for `3_pack` and `monthly`)
    Nothing,
    /// A direct pick from the `others` list, by keyword or display name
    Entry(String),
    /// A case from `single` or `2_pack`; `side` only matters for split pockets
    Case { spec: CaseSpec, side: Option<Side> },
    /// Two different cases for `combo_pack`, in any order
    Combo { first: CaseSpec, second: CaseSpec },
}

/// Why a selection cannot be resolved at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSelection {
    /// Split pockets need a side (both, left or right)
    MissingSide,
    /// Both halves of a combo are the same case
    IdenticalSpecs,
    /// Combo halves must be mission or weekly cases
    PocketNotInCombo(PocketType),
    /// The selection's shape does not fit the category
    SelectionMismatch(SkuCategory),
}

impl fmt::Display for InvalidSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSide => f.write_str("Select a side: both, left side or right side."),
            Self::IdenticalSpecs => f.write_str("Cannot select identical cases."),
            Self::PocketNotInCombo(pocket) => write!(
                f,
                "Combo packs only contain MISSION and WEEKLY cases, not {pocket}."
            ),
            Self::SelectionMismatch(category) => {
                write!(f, "That selection does not apply to '{category}'.")
            }
        }
    }
}

/// Outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkuResult {
    Found(String),
    NotFound,
    Invalid(InvalidSelection),
}

impl SkuResult {
    /// Text shown in the lookup output box.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Found(keyword) => keyword.clone(),
            Self::NotFound => "No matching SKU found".to_string(),
            Self::Invalid(reason) => reason.to_string(),
        }
    }

    /// The keyword, if one was found.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Found(keyword) => Some(keyword),
            _ => None,
        }
    }
}

/// Resolves a selection within one category of the catalog.
#[must_use]
pub fn resolve_sku(catalog: &Catalog, category: SkuCategory, selection: &SkuSelection) -> SkuResult {
    let entries = catalog.sku_entries(category);
    let result = match (category, selection) {
        (SkuCategory::ThreePack | SkuCategory::Monthly, _) => found(entries.first()),
        (SkuCategory::Others, SkuSelection::Entry(wanted)) => {
            found(catalog.sku_entry(category, wanted))
        }
        (SkuCategory::Single | SkuCategory::TwoPack, SkuSelection::Case { spec, side }) => {
            resolve_case(entries, *spec, *side)
        }
        (SkuCategory::ComboPack, SkuSelection::Combo { first, second }) => {
            resolve_combo(entries, *first, *second)
        }
        _ => SkuResult::Invalid(InvalidSelection::SelectionMismatch(category)),
    };

    debug!(%category, ?selection, ?result, "Resolved SKU");
    result
}

fn found(entry: Option<&SkuEntry>) -> SkuResult {
    entry.map_or(SkuResult::NotFound, |entry| {
        SkuResult::Found(entry.keyword.clone())
    })
}

fn resolve_case(entries: &[SkuEntry], wanted: CaseSpec, side: Option<Side>) -> SkuResult {
    if !wanted.pocket.is_split() {
        return found(entries.iter().find(|entry| entry.case_spec() == Some(wanted)));
    }

    let Some(side) = side else {
        return SkuResult::Invalid(InvalidSelection::MissingSide);
    };

    let matched = entries.iter().find(|entry| {
        let SkuKind::Case {
            spec,
            side: entry_side,
            cross_compatible,
        } = entry.kind
        else {
            return false;
        };

        match side {
            Side::Both => spec == wanted && entry_side == Side::Both,
            // Halves are cataloged under ampm only; 2-week reuses the cross-compatible ones.
            Side::Left | Side::Right => {
                spec.pocket == PocketType::Ampm
                    && spec.size == wanted.size
                    && entry_side == side
                    && (wanted.pocket == PocketType::Ampm || cross_compatible)
            }
        }
    });
    found(matched)
}

fn resolve_combo(entries: &[SkuEntry], first: CaseSpec, second: CaseSpec) -> SkuResult {
    if first == second {
        return SkuResult::Invalid(InvalidSelection::IdenticalSpecs);
    }
    if let Some(pocket) = [first.pocket, second.pocket]
        .into_iter()
        .find(|pocket| !COMBO_POCKETS.contains(pocket))
    {
        return SkuResult::Invalid(InvalidSelection::PocketNotInCombo(pocket));
    }

    let matched = entries.iter().find(|entry| match entry.kind {
        SkuKind::Combo {
            first: a,
            second: b,
        } => (a == first && b == second) || (a == second && b == first),
        _ => false,
    });
    found(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CaseSize;
    use crate::test_utils::builtin_catalog;

    fn case(pocket: PocketType, size: CaseSize, side: Option<Side>) -> SkuSelection {
        SkuSelection::Case {
            spec: CaseSpec::new(pocket, size),
            side,
        }
    }

    fn combo(first: (PocketType, CaseSize), second: (PocketType, CaseSize)) -> SkuSelection {
        SkuSelection::Combo {
            first: CaseSpec::new(first.0, first.1),
            second: CaseSpec::new(second.0, second.1),
        }
    }

    fn keyword(keyword: &str) -> SkuResult {
        SkuResult::Found(keyword.to_string())
    }

    #[test]
    fn test_single_exact_match() {
        let catalog = builtin_catalog();
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::Weekly, CaseSize::VitaminXl, None)
            ),
            keyword("SPC-WVXC")
        );
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::TwoPack,
                &case(PocketType::Mission, CaseSize::Pill, Some(Side::Left))
            ),
            keyword("BPC-MPC2")
        );
    }

    #[test]
    fn test_single_without_matching_size() {
        let catalog = builtin_catalog();
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::Nano, CaseSize::VitaminXl, None)
            ),
            SkuResult::NotFound
        );
    }

    #[test]
    fn test_split_pocket_requires_side() {
        let catalog = builtin_catalog();
        let result = resolve_sku(
            &catalog,
            SkuCategory::Single,
            &case(PocketType::Ampm, CaseSize::Pill, None),
        );
        assert_eq!(result, SkuResult::Invalid(InvalidSelection::MissingSide));
    }

    #[test]
    fn test_split_pocket_both_sides_is_base_sku() {
        let catalog = builtin_catalog();
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::Ampm, CaseSize::Vitamin, Some(Side::Both))
            ),
            keyword("BPC-WAC2")
        );
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::TwoWeek, CaseSize::Pill, Some(Side::Both))
            ),
            keyword("BPC-2WPC")
        );
    }

    #[test]
    fn test_side_specific_halves() {
        let catalog = builtin_catalog();
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::Ampm, CaseSize::Vitamin, Some(Side::Left))
            ),
            keyword("SPC-WVALS")
        );
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::Ampm, CaseSize::Pill, Some(Side::Right))
            ),
            keyword("SPC-WVPPRS")
        );
    }

    #[test]
    fn test_two_week_halves_reuse_cross_compatible_ampm_skus() {
        let catalog = builtin_catalog();
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::TwoWeek, CaseSize::Pill, Some(Side::Left))
            ),
            keyword("SPC-WVAPLS")
        );
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::TwoWeek, CaseSize::Vitamin, Some(Side::Right))
            ),
            keyword("SPC-WVPRS")
        );
    }

    #[test]
    fn test_two_week_half_without_cross_compatibility_is_not_found() {
        let toml = r##"
            colors = []

            [[skus.single]]
            name = "AM - Left Side (Vitamin)"
            keyword = "SPC-WVALS"
            pocket = "ampm"
            size = "vitamin"
            side = "left"

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
        let catalog = Catalog::from_toml_str(toml).unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::Ampm, CaseSize::Vitamin, Some(Side::Left))
            ),
            keyword("SPC-WVALS")
        );
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Single,
                &case(PocketType::TwoWeek, CaseSize::Vitamin, Some(Side::Left))
            ),
            SkuResult::NotFound
        );
    }

    #[test]
    fn test_two_pack_has_no_halves() {
        let catalog = builtin_catalog();
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::TwoPack,
                &case(PocketType::Ampm, CaseSize::Pill, Some(Side::Both))
            ),
            SkuResult::NotFound
        );
    }

    #[test]
    fn test_combo_is_order_independent() {
        let catalog = builtin_catalog();
        let mission_vitamin = (PocketType::Mission, CaseSize::Vitamin);
        let mission_pill = (PocketType::Mission, CaseSize::Pill);

        let forward = resolve_sku(
            &catalog,
            SkuCategory::ComboPack,
            &combo(mission_vitamin, mission_pill),
        );
        let reverse = resolve_sku(
            &catalog,
            SkuCategory::ComboPack,
            &combo(mission_pill, mission_vitamin),
        );
        assert_eq!(forward, keyword("BPC-MPMVCCP"));
        assert_eq!(reverse, forward);
    }

    #[test]
    fn test_combo_identical_specs_are_invalid() {
        let catalog = builtin_catalog();
        let weekly_pill = (PocketType::Weekly, CaseSize::Pill);
        let result = resolve_sku(
            &catalog,
            SkuCategory::ComboPack,
            &combo(weekly_pill, weekly_pill),
        );
        assert_eq!(result, SkuResult::Invalid(InvalidSelection::IdenticalSpecs));
        assert_eq!(result.message(), "Cannot select identical cases.");
    }

    #[test]
    fn test_combo_without_catalog_entry() {
        let catalog = builtin_catalog();
        let result = resolve_sku(
            &catalog,
            SkuCategory::ComboPack,
            &combo(
                (PocketType::Mission, CaseSize::Vitamin),
                (PocketType::Weekly, CaseSize::Vitamin),
            ),
        );
        assert_eq!(result, keyword("BPC-WVMVCCP"));

        let result = resolve_sku(
            &catalog,
            SkuCategory::ComboPack,
            &combo(
                (PocketType::Mission, CaseSize::Pill),
                (PocketType::Mission, CaseSize::VitaminXl),
            ),
        );
        assert_eq!(result, SkuResult::NotFound);
        assert_eq!(result.message(), "No matching SKU found");
    }

    #[test]
    fn test_combo_rejects_other_pockets() {
        let catalog = builtin_catalog();
        let result = resolve_sku(
            &catalog,
            SkuCategory::ComboPack,
            &combo(
                (PocketType::Nano, CaseSize::Pill),
                (PocketType::Weekly, CaseSize::Pill),
            ),
        );
        assert_eq!(
            result,
            SkuResult::Invalid(InvalidSelection::PocketNotInCombo(PocketType::Nano))
        );
    }

    #[test]
    fn test_single_entry_categories_ignore_selection() {
        let catalog = builtin_catalog();
        let selections = [
            SkuSelection::Nothing,
            SkuSelection::Entry("anything".to_string()),
            case(PocketType::Nano, CaseSize::Pill, None),
            combo(
                (PocketType::Weekly, CaseSize::Pill),
                (PocketType::Weekly, CaseSize::Pill),
            ),
        ];
        for selection in &selections {
            assert_eq!(
                resolve_sku(&catalog, SkuCategory::ThreePack, selection),
                keyword("BPC-3PCB")
            );
            assert_eq!(
                resolve_sku(&catalog, SkuCategory::Monthly, selection),
                keyword("BPC-MPCB")
            );
        }
    }

    #[test]
    fn test_others_direct_pick() {
        let catalog = builtin_catalog();
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Others,
                &SkuSelection::Entry("Ball Plunger Replacement".to_string())
            ),
            keyword("REP-BPL")
        );
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Others,
                &SkuSelection::Entry("ENG-DOTW".to_string())
            ),
            keyword("ENG-DOTW")
        );
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::Others,
                &SkuSelection::Entry("Hinge".to_string())
            ),
            SkuResult::NotFound
        );
    }

    #[test]
    fn test_mismatched_selection_shape() {
        let catalog = builtin_catalog();
        assert_eq!(
            resolve_sku(&catalog, SkuCategory::Single, &SkuSelection::Nothing),
            SkuResult::Invalid(InvalidSelection::SelectionMismatch(SkuCategory::Single))
        );
        assert_eq!(
            resolve_sku(
                &catalog,
                SkuCategory::ComboPack,
                &case(PocketType::Weekly, CaseSize::Pill, None)
            ),
            SkuResult::Invalid(InvalidSelection::SelectionMismatch(SkuCategory::ComboPack))
        );
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let catalog = builtin_catalog();
        let selection = case(PocketType::TwoWeek, CaseSize::Vitamin, Some(Side::Left));
        let first = resolve_sku(&catalog, SkuCategory::Single, &selection);
        for _ in 0..3 {
            assert_eq!(resolve_sku(&catalog, SkuCategory::Single, &selection), first);
        }
    }
}
