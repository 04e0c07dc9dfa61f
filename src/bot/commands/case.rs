//! Case Discord commands - the case wizard, the case list and order notes.
//!
//! Each user has one draft: a list of finished cases plus at most one case being
//! configured. `/case answer` drives the wizard one question at a time and
//! `/notes` turns the draft into the text pasted into the order.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            case::CaseConfiguration,
            drafts::{AnswerOutcome, OrderDraft},
            wizard::Wizard,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::{info, warn};

    /// Discord's message length limit.
    const MESSAGE_LIMIT: usize = 2000;

    /// Parent command for configuring the cases of an order.
    #[poise::command(
        slash_command,
        subcommands("case_add", "case_answer", "case_list", "case_remove", "case_clear")
    )]
    pub async fn case(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Case configuration command. Available subcommands:\n\
            `/case add` - Start configuring a new case\n\
            `/case answer` - Answer the current question\n\
            `/case list` - List configured cases\n\
            `/case remove` - Remove a case\n\
            `/case clear` - Remove every case";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Starts configuring a new case.
    #[poise::command(slash_command, rename = "add")]
    pub async fn case_add(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.get();
        let prompt = ctx
            .data()
            .drafts
            .update(user_id, OrderDraft::start_case)
            .await?;

        info!("User {} started a new case", ctx.author().name);
        ctx.say(format!("🆕 New case. {prompt}")).await?;
        Ok(())
    }

    /// Answers the current question of the case being configured.
    #[poise::command(slash_command, rename = "answer")]
    pub async fn case_answer(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Your answer; leave empty to skip an engraving or modification"]
        #[autocomplete = "autocomplete::autocomplete_wizard_answer"]
        value: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let user_id = ctx.author().id.get();
        let value = value.unwrap_or_default();

        let reply = data
            .drafts
            .update(user_id, |draft| -> Result<String> {
                match draft.answer_text(&value, &data.catalog)? {
                    AnswerOutcome::Next { prompt } => Ok(prompt),
                    AnswerOutcome::Finished { case_number } => {
                        let summary = draft
                            .cases()
                            .last()
                            .map(CaseConfiguration::summary)
                            .unwrap_or_default();
                        Ok(format!(
                            "✅ Case {case_number} added: {summary}\n\
                             Use `/case add` for another case or `/notes` for the order notes."
                        ))
                    }
                }
            })
            .await;

        match reply {
            Ok(text) => {
                ctx.say(text).await?;
            }
            Err(
                e @ (Error::UnknownOption { .. }
                | Error::ColorNotFound { .. }
                | Error::UnexpectedInput { .. }),
            ) => {
                let draft = data.drafts.snapshot(user_id).await;
                let prompt = draft.wizard().map(Wizard::prompt).unwrap_or_default();
                ctx.say(format!("❌ {e}\n{prompt}")).await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Lists the configured cases, including the one being configured.
    #[poise::command(slash_command, rename = "list")]
    pub async fn case_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let draft = ctx.data().drafts.snapshot(ctx.author().id.get()).await;

        if draft.is_empty() {
            ctx.say("No cases yet. Use `/case add` to configure one!")
                .await?;
            return Ok(());
        }

        let mut embed_fields: Vec<(String, String, bool)> = draft
            .cases()
            .iter()
            .enumerate()
            .map(|(index, case)| (format!("Case {}", index + 1), case.summary(), false))
            .collect();

        if let Some(wizard) = draft.wizard() {
            embed_fields.push((
                format!("Case {} (in progress)", draft.cases().len() + 1),
                format!("{}\nNext: {}", wizard.case().summary(), wizard.prompt()),
                false,
            ));
        }

        let list_embed = serenity::CreateEmbed::default()
            .title("**Order Cases**")
            .color(0x0058_65F2) // Discord purple
            .fields(embed_fields);

        ctx.send(poise::CreateReply::default().embed(list_embed))
            .await?;
        Ok(())
    }

    /// Removes a configured case. Later cases move up one number.
    #[poise::command(slash_command, rename = "remove")]
    pub async fn case_remove(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Case number as shown by /case list"]
        #[min = 1]
        number: usize,
    ) -> Result<()> {
        let removed = ctx
            .data()
            .drafts
            .update(ctx.author().id.get(), |draft| draft.remove_case(number))
            .await?;

        ctx.say(format!("🗑️ Removed case {number}: {}", removed.summary()))
            .await?;
        Ok(())
    }

    /// Removes every case, including the one being configured.
    #[poise::command(slash_command, rename = "clear")]
    pub async fn case_clear(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.data()
            .drafts
            .update(ctx.author().id.get(), OrderDraft::clear)
            .await;

        ctx.say("🧹 All cases cleared.").await?;
        Ok(())
    }

    /// Wraps notes for display, or `None` when they only fit in a file.
    pub(crate) fn notes_block(notes: &str) -> Option<String> {
        let block = format!("```\n{notes}\n```");
        (block.chars().count() <= MESSAGE_LIMIT).then_some(block)
    }

    /// Composes the order notes for every configured case.
    ///
    /// Notes too long for a message are sent as `notes.txt`.
    #[poise::command(slash_command)]
    pub async fn notes(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let draft = ctx.data().drafts.snapshot(ctx.author().id.get()).await;

        let notes = match draft.compose_notes() {
            Ok(notes) => notes,
            Err(e @ Error::Validation(_)) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let reply = match notes_block(notes.trim_end()) {
            Some(block) => poise::CreateReply::default().content(block),
            None => poise::CreateReply::default()
                .content("📄 The notes are too long for a message; they are attached.")
                .attachment(serenity::CreateAttachment::bytes(
                    notes.into_bytes(),
                    "notes.txt",
                )),
        };

        if let Err(e) = ctx.send(reply).await {
            warn!("Failed to deliver notes to {}: {}", ctx.author().name, e);
            return Err(e.into());
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_short_notes_fit_in_a_code_block() {
            assert_eq!(
                notes_block("1) NANO PILL / COFFEE").as_deref(),
                Some("```\n1) NANO PILL / COFFEE\n```")
            );
        }

        #[test]
        fn test_long_notes_need_a_file() {
            let line = "1) WEEKLY VITAMIN XL / BLACK + BLUE SPLATTER = LID = GRANDPA\n";
            assert!(notes_block(&line.repeat(40)).is_none());
        }
    }
}

// Re-export all commands
pub use inner::*;
