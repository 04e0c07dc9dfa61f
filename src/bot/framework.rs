//! Poise framework setup and the Serenity client loop.

use crate::{
    bot::{BotData, commands},
    config::AppConfig,
    core::catalog::Catalog,
    errors::Error,
};
use poise::serenity_prelude as serenity;
use tracing::{error, info, instrument};

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Every slash command the bot registers.
fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::case(),
        commands::notes(),
        commands::sku(),
        commands::colors(),
        commands::ping(),
        commands::help(),
    ]
}

/// Builds the framework and runs the client until it stops.
///
/// Commands are registered in `dev_guild_id` when configured, globally otherwise.
///
/// # Errors
/// Returns the Serenity error if the client cannot be created or stops with one.
#[instrument(skip(token, app_config, catalog))]
pub async fn run_bot(
    token: String,
    app_config: &AppConfig,
    catalog: Catalog,
) -> Result<(), serenity::Error> {
    let dev_guild_id = app_config.dev_guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                let commands = &framework.options().commands;
                if let Some(guild_id) = dev_guild_id {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
                    info!("Registered {} commands in guild {}", commands.len(), guild_id);
                } else {
                    poise::builtins::register_globally(ctx, commands).await?;
                    info!("Registered {} commands globally", commands.len());
                }
                Ok(BotData::new(catalog))
            })
        })
        .build();

    // Slash commands only; no message content needed
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await;

    match client {
        Ok(mut c) => {
            info!("Starting bot client...");
            if let Err(why) = c.start().await {
                error!("Client error: {:?}", why);
                return Err(why);
            }
        }
        Err(e) => {
            error!("Error creating client: {:?}", e);
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_are_unique() {
        let commands = all_commands();
        let mut names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), commands.len());
    }

    #[test]
    fn test_parent_commands_expose_subcommands() {
        let commands = all_commands();
        let subcommands = |parent: &str| -> Vec<String> {
            commands
                .iter()
                .find(|c| c.name == parent)
                .map(|c| c.subcommands.iter().map(|s| s.name.clone()).collect())
                .unwrap_or_default()
        };
        assert_eq!(
            subcommands("case"),
            vec!["add", "answer", "list", "remove", "clear"]
        );
        assert_eq!(
            subcommands("sku"),
            vec!["single", "two_pack", "combo", "three_pack", "monthly", "other"]
        );
    }
}
