//! General Discord commands - ping, help and the color list.
//! These commands only read the catalog and never touch a user's draft.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::catalog::Color,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    const HELP_TEXT: &str = "**CaseOrderBuddy Help**\n\
        Configure the cases of an order, then copy the notes into the order.\n\n\
        **Order Notes**\n\
        • `/case add` - Starts configuring a new case.\n\
        • `/case answer [value]` - Answers the current question (leave empty or `none` to skip).\n\
        • `/case list` - Shows the cases configured so far.\n\
        • `/case remove <number>` - Removes a case; later cases are renumbered.\n\
        • `/case clear` - Removes every case.\n\
        • `/notes` - Composes the order notes for all cases.\n\n\
        **SKU Lookup**\n\
        • `/sku single <pocket> <size> [side]` - Single case SKU.\n\
        • `/sku two_pack <pocket> <size> [side]` - 2-pack SKU.\n\
        • `/sku combo <pocket1> <size1> <pocket2> <size2>` - Combo pack SKU.\n\
        • `/sku three_pack`, `/sku monthly` - Bundle SKUs.\n\
        • `/sku other <entry>` - Engraving services and replacement parts.\n\n\
        **Utility Commands**\n\
        • `/colors [search]` - Lists case colors.\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say(HELP_TEXT).await?;
        Ok(())
    }

    fn color_line(color: &Color) -> String {
        if color.is_splatter {
            format!(
                "**{}** `{}` + {}",
                color.name,
                color.hex_code,
                color.splatter_accents.join(", ")
            )
        } else {
            format!("**{}** `{}`", color.name, color.hex_code)
        }
    }

    /// Lists the case colors, optionally filtered by name.
    #[poise::command(slash_command)]
    pub async fn colors(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Part of a color name (e.g., 'blue')"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        search: Option<String>,
    ) -> Result<()> {
        let search = search.unwrap_or_default();
        let colors = ctx.data().catalog.colors_by_prefix(&search);

        if colors.is_empty() {
            ctx.say(format!("No colors match '{search}'.")).await?;
            return Ok(());
        }

        let mut description = String::new();
        for color in &colors {
            let _ = writeln!(description, "{}", color_line(color));
        }

        let list_embed = serenity::CreateEmbed::default()
            .title(format!("**Case Colors** ({})", colors.len()))
            .color(0x0058_65F2) // Discord purple
            .description(description);

        ctx.send(poise::CreateReply::default().embed(list_embed))
            .await?;
        Ok(())
    }

}

// Re-export all commands
pub use inner::*;
