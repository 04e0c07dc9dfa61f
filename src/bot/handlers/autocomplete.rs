//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from the catalog and the fixed option lists in
//! [`crate::models`], filtered by what the user has typed so far.

// poise awaits every autocomplete callback
#![allow(clippy::unused_async)]

use crate::{
    bot::BotData,
    core::sku::COMBO_POCKETS,
    errors::Error,
    models::{CaseSize, PocketType, Side, SkuCategory},
};

/// Discord shows at most this many suggestions.
const MAX_SUGGESTIONS: usize = 25;

fn matching<I, S>(options: I, partial: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let partial_lower = partial.trim().to_lowercase();
    options
        .into_iter()
        .map(Into::into)
        .filter(|option: &String| option.to_lowercase().contains(&partial_lower))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Provides autocomplete suggestions for catalog colors, in catalog order.
pub async fn autocomplete_color(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    ctx.data()
        .catalog
        .colors_by_prefix(partial)
        .into_iter()
        .map(|color| color.name.clone())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Provides autocomplete suggestions for pocket types.
pub async fn autocomplete_pocket(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    matching(PocketType::ALL.map(PocketType::label), partial)
}

/// Pockets that can be part of a combo pack.
pub async fn autocomplete_combo_pocket(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    matching(COMBO_POCKETS.map(PocketType::label), partial)
}

/// Provides autocomplete suggestions for case sizes.
pub async fn autocomplete_size(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    matching(CaseSize::ALL.map(CaseSize::label), partial)
}

/// Provides autocomplete suggestions for the side of a split case.
pub async fn autocomplete_side(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    matching(
        [Side::Both, Side::Left, Side::Right].map(|side| side.to_string()),
        partial,
    )
}

/// Engraving services and replacement parts, by display name.
pub async fn autocomplete_other_entry(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let entries = ctx.data().catalog.sku_entries(SkuCategory::Others);
    matching(
        entries.iter().map(|entry| entry.display_name.clone()),
        partial,
    )
}

/// Suggests answers for whatever step the caller's case wizard is on.
///
/// Returns nothing when the caller has no case in progress.
pub async fn autocomplete_wizard_answer(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let data = ctx.data();
    let draft = data.drafts.snapshot(ctx.author().id.get()).await;
    let Some(wizard) = draft.wizard() else {
        return Vec::new();
    };

    let mut choices = wizard.step().choices(partial, &data.catalog);
    choices.truncate(MAX_SUGGESTIONS);
    choices
}
