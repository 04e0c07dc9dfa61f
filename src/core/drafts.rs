//! Per-user order drafts.
//!
//! Each Discord user builds their own list of cases. Drafts live in memory and
//! are gone after a restart.

use crate::{
    core::{
        case::CaseConfiguration,
        catalog::Catalog,
        notes,
        wizard::{Wizard, WizardInput},
    },
    errors::{Error, Result},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// What happened after an answer was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The wizard needs another answer
    Next { prompt: String },
    /// The case was added to the draft as case `case_number` (1-based)
    Finished { case_number: usize },
}

/// The cases one user has configured so far, plus the case being configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    cases: Vec<CaseConfiguration>,
    wizard: Option<Wizard>,
}

impl OrderDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished cases in order.
    #[must_use]
    pub fn cases(&self) -> &[CaseConfiguration] {
        &self.cases
    }

    #[must_use]
    pub const fn wizard(&self) -> Option<&Wizard> {
        self.wizard.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.wizard.is_none()
    }

    /// Starts configuring a new case and returns its first prompt.
    ///
    /// # Errors
    /// Returns `Error::WizardActive` if a case is already being configured.
    pub fn start_case(&mut self) -> Result<String> {
        if self.wizard.is_some() {
            return Err(Error::WizardActive);
        }
        let wizard = Wizard::new();
        let prompt = wizard.prompt();
        self.wizard = Some(wizard);
        Ok(prompt)
    }

    /// Feeds one answer to the active wizard. A finished case moves into the
    /// case list.
    ///
    /// # Errors
    /// Returns `Error::NoActiveWizard` when no case is being configured, or the
    /// wizard's error when the input does not fit the current step. The wizard
    /// is left unchanged on error.
    pub fn answer(&mut self, input: WizardInput) -> Result<AnswerOutcome> {
        let wizard = self.wizard.clone().ok_or(Error::NoActiveWizard)?;
        let wizard = wizard.advance(input)?;

        if wizard.is_done() {
            self.wizard = None;
            self.cases.push(wizard.into_case());
            return Ok(AnswerOutcome::Finished {
                case_number: self.cases.len(),
            });
        }

        let prompt = wizard.prompt();
        self.wizard = Some(wizard);
        Ok(AnswerOutcome::Next { prompt })
    }

    /// Parses a typed answer for the current step, then applies it.
    ///
    /// # Errors
    /// Returns `Error::NoActiveWizard`, parse errors from the step, or errors
    /// from [`OrderDraft::answer`].
    pub fn answer_text(&mut self, text: &str, catalog: &Catalog) -> Result<AnswerOutcome> {
        let step = self
            .wizard
            .as_ref()
            .map(Wizard::step)
            .ok_or(Error::NoActiveWizard)?;
        let input = step.parse_answer(text, catalog)?;
        self.answer(input)
    }

    /// Removes finished case `number` (1-based); later cases move up.
    ///
    /// # Errors
    /// Returns `Error::CaseNotFound` if there is no such case.
    pub fn remove_case(&mut self, number: usize) -> Result<CaseConfiguration> {
        if number == 0 || number > self.cases.len() {
            return Err(Error::CaseNotFound { number });
        }
        Ok(self.cases.remove(number - 1))
    }

    /// Drops every case, including the one being configured.
    pub fn clear(&mut self) {
        self.cases.clear();
        self.wizard = None;
    }

    /// Finished cases followed by the in-progress one, if any.
    #[must_use]
    pub fn cases_for_notes(&self) -> Vec<CaseConfiguration> {
        self.cases
            .iter()
            .cloned()
            .chain(self.wizard.as_ref().map(|w| w.case().clone()))
            .collect()
    }

    /// Composes notes for [`OrderDraft::cases_for_notes`].
    ///
    /// # Errors
    /// Returns `Error::Validation` with the first incomplete case.
    pub fn compose_notes(&self) -> Result<String> {
        Ok(notes::compose_notes(&self.cases_for_notes())?)
    }
}

/// Drafts of every user, keyed by Discord user id.
#[derive(Debug, Clone, Default)]
pub struct DraftBook {
    drafts: Arc<RwLock<HashMap<u64, OrderDraft>>>,
}

impl DraftBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the user's draft, creating an empty one first if needed.
    pub async fn update<T>(&self, user_id: u64, f: impl FnOnce(&mut OrderDraft) -> T) -> T {
        let mut drafts = self.drafts.write().await;
        let draft = drafts.entry(user_id).or_default();
        let result = f(draft);
        if draft.is_empty() {
            drafts.remove(&user_id);
            debug!("Dropped empty draft for user {}", user_id);
        }
        result
    }

    /// A copy of the user's draft; empty if they have none.
    pub async fn snapshot(&self, user_id: u64) -> OrderDraft {
        self.drafts
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }
}
