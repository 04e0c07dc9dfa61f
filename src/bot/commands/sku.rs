//! SKU lookup Discord commands.
//!
//! One subcommand per catalog category. Option values arrive as text (with
//! autocomplete) and are parsed into the domain types before resolution.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            catalog::Catalog,
            sku::{SkuResult, SkuSelection, resolve_sku},
        },
        errors::{Error, Result},
        models::{CaseSize, CaseSpec, PocketType, Side, SkuCategory},
    };
    use tracing::info;

    /// Reply text for a lookup: the keyword and any catalog note, or the reason
    /// nothing was found.
    pub(crate) fn lookup_reply(
        catalog: &Catalog,
        category: SkuCategory,
        result: &SkuResult,
    ) -> String {
        let Some(keyword) = result.keyword() else {
            return format!("❌ {}", result.message());
        };

        let entry = catalog.sku_entry(category, keyword);
        let name = entry.map_or(keyword, |e| e.display_name.as_str());
        match entry.and_then(|e| e.note.as_deref()) {
            Some(note) => format!("🔎 {name}\n**SKU:** `{keyword}`\n*{note}*"),
            None => format!("🔎 {name}\n**SKU:** `{keyword}`"),
        }
    }

    async fn reply(
        ctx: poise::Context<'_, BotData, Error>,
        category: SkuCategory,
        selection: SkuSelection,
    ) -> Result<()> {
        let catalog = &ctx.data().catalog;
        let result = resolve_sku(catalog, category, &selection);
        info!(
            "SKU lookup by {} in '{}': {}",
            ctx.author().name,
            category,
            result.message()
        );
        ctx.say(lookup_reply(catalog, category, &result)).await?;
        Ok(())
    }

    fn case_selection(pocket: &str, size: &str, side: Option<&str>) -> Result<SkuSelection> {
        let spec = CaseSpec::new(pocket.parse()?, size.parse()?);
        // Split pockets default to the whole case.
        let side = match side {
            Some(side) => Some(side.parse::<Side>()?),
            None if spec.pocket.is_split() => Some(Side::Both),
            None => None,
        };
        Ok(SkuSelection::Case { spec, side })
    }

    /// Parent command for SKU lookups.
    #[poise::command(
        slash_command,
        subcommands(
            "sku_single",
            "sku_two_pack",
            "sku_combo",
            "sku_three_pack",
            "sku_monthly",
            "sku_other"
        )
    )]
    pub async fn sku(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "SKU lookup command. Available subcommands:\n\
            `/sku single` - Single case\n\
            `/sku two_pack` - 2-pack\n\
            `/sku combo` - Combo pack of two different cases\n\
            `/sku three_pack` - 3-pack bundle\n\
            `/sku monthly` - Monthly bundle\n\
            `/sku other` - Engraving services and replacement parts";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Looks up the SKU of a single case (or one half of an AMPM/2-WEEK case).
    #[poise::command(slash_command, rename = "single")]
    pub async fn sku_single(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Pocket type"]
        #[autocomplete = "autocomplete::autocomplete_pocket"]
        pocket: String,
        #[description = "Case size"]
        #[autocomplete = "autocomplete::autocomplete_size"]
        size: String,
        #[description = "AMPM and 2-WEEK only: both, left side or right side (default both)"]
        #[autocomplete = "autocomplete::autocomplete_side"]
        side: Option<String>,
    ) -> Result<()> {
        let selection = case_selection(&pocket, &size, side.as_deref())?;
        reply(ctx, SkuCategory::Single, selection).await
    }

    /// Looks up the SKU of a 2-pack of identical cases.
    #[poise::command(slash_command, rename = "two_pack")]
    pub async fn sku_two_pack(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Pocket type"]
        #[autocomplete = "autocomplete::autocomplete_pocket"]
        pocket: String,
        #[description = "Case size"]
        #[autocomplete = "autocomplete::autocomplete_size"]
        size: String,
        #[description = "AMPM and 2-WEEK only: both, left side or right side (default both)"]
        #[autocomplete = "autocomplete::autocomplete_side"]
        side: Option<String>,
    ) -> Result<()> {
        let selection = case_selection(&pocket, &size, side.as_deref())?;
        reply(ctx, SkuCategory::TwoPack, selection).await
    }

    /// Looks up the SKU of a combo pack. The order of the two cases does not matter.
    #[poise::command(slash_command, rename = "combo")]
    pub async fn sku_combo(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Pocket of the first case"]
        #[autocomplete = "autocomplete::autocomplete_combo_pocket"]
        pocket1: String,
        #[description = "Size of the first case"]
        #[autocomplete = "autocomplete::autocomplete_size"]
        size1: String,
        #[description = "Pocket of the second case"]
        #[autocomplete = "autocomplete::autocomplete_combo_pocket"]
        pocket2: String,
        #[description = "Size of the second case"]
        #[autocomplete = "autocomplete::autocomplete_size"]
        size2: String,
    ) -> Result<()> {
        let first = CaseSpec::new(pocket1.parse::<PocketType>()?, size1.parse::<CaseSize>()?);
        let second = CaseSpec::new(pocket2.parse::<PocketType>()?, size2.parse::<CaseSize>()?);
        reply(
            ctx,
            SkuCategory::ComboPack,
            SkuSelection::Combo { first, second },
        )
        .await
    }

    /// Shows the 3-pack bundle SKU.
    #[poise::command(slash_command, rename = "three_pack")]
    pub async fn sku_three_pack(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        reply(ctx, SkuCategory::ThreePack, SkuSelection::Nothing).await
    }

    /// Shows the monthly bundle SKU.
    #[poise::command(slash_command, rename = "monthly")]
    pub async fn sku_monthly(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        reply(ctx, SkuCategory::Monthly, SkuSelection::Nothing).await
    }

    /// Looks up an engraving service or replacement part.
    #[poise::command(slash_command, rename = "other")]
    pub async fn sku_other(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Service or part name"]
        #[autocomplete = "autocomplete::autocomplete_other_entry"]
        entry: String,
    ) -> Result<()> {
        reply(ctx, SkuCategory::Others, SkuSelection::Entry(entry)).await
    }

    #[cfg(test)]
    mod tests {
        #![allow(clippy::unwrap_used)]
        use super::*;
        use crate::core::sku::InvalidSelection;
        use crate::test_utils::builtin_catalog;

        #[test]
        fn test_split_pocket_side_defaults_to_both() {
            let selection = case_selection("AMPM", "PILL", None).unwrap();
            assert_eq!(
                selection,
                SkuSelection::Case {
                    spec: CaseSpec::new(PocketType::Ampm, CaseSize::Pill),
                    side: Some(Side::Both),
                }
            );

            let selection = case_selection("WEEKLY", "VITAMIN XL", None).unwrap();
            assert!(matches!(selection, SkuSelection::Case { side: None, .. }));
        }

        #[test]
        fn test_case_selection_rejects_unknown_values() {
            assert!(matches!(
                case_selection("HEXAGON", "PILL", None),
                Err(Error::UnknownOption { field: "pocket", .. })
            ));
            assert!(case_selection("AMPM", "PILL", Some("middle")).is_err());
        }

        #[test]
        fn test_reply_includes_catalog_note() {
            let catalog = builtin_catalog();
            let result = SkuResult::Found("SPC-WVAPLS".to_string());
            assert_eq!(
                lookup_reply(&catalog, SkuCategory::Single, &result),
                "🔎 AM Pill - Left Side\n**SKU:** `SPC-WVAPLS`\n*Can be used for 2-Week Pill*"
            );
        }

        #[test]
        fn test_reply_for_failures() {
            let catalog = builtin_catalog();
            assert_eq!(
                lookup_reply(&catalog, SkuCategory::Single, &SkuResult::NotFound),
                "❌ No matching SKU found"
            );
            assert_eq!(
                lookup_reply(
                    &catalog,
                    SkuCategory::ComboPack,
                    &SkuResult::Invalid(InvalidSelection::IdenticalSpecs)
                ),
                "❌ Cannot select identical cases."
            );
        }
    }
}

// Re-export all commands
pub use inner::*;
