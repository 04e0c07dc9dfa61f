//! Case wizard - a step-by-step state machine that fills one [`CaseConfiguration`].
//!
//! The wizard asks for the pocket, the size, one color per slot, then one lid
//! engraving per slot. What comes after the lids depends on the pocket: MISSION
//! cases pick a pocket engraving layout, NANO cases are finished, and every
//! other pocket asks for a start day (plus custom modifications when a day is
//! set).
//!
//! [`Wizard::advance`] consumes the wizard and hands back the next state, so a
//! rejected input never leaves a half-applied case behind.

use crate::{
    core::{case::CaseConfiguration, catalog::Catalog, catalog::Color},
    errors::{Error, Result},
    models::{
        CaseSize, DAYS, MissionEngraving, PocketType, SlotRole, day_name, parse_start_day,
    },
};
use chrono::Weekday;
use std::fmt;
use tracing::debug;

/// Modification texts staff commonly attach to the start-day line.
pub const CUSTOM_MODIFICATION_PRESETS: [&str; 7] = [
    "No AM/PM on DOTW",
    "AM/PM on (2-pack)",
    "No WEEK1/WEEK2 on DOTW",
    "WEEK1/WEEK2 for (2-pack)",
    "PM Left Side/AM Right Side",
    "WEEK1 Bottom & Left/WEEK2 Top & Right",
    "DOTW in different language = ",
];

/// Answer that skips an optional step.
pub const NONE_ANSWER: &str = "none";

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectingPocket,
    SelectingSize,
    SelectingColor(SlotRole),
    EditingLid(SlotRole),
    SelectingMissionEngraving,
    SelectingDay,
    EditingCustomMods,
    Done,
}

/// One answer fed to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardInput {
    Pocket(PocketType),
    Size(CaseSize),
    Color(Color),
    /// Lid engraving or custom modifications; `None` leaves it blank
    Text(Option<String>),
    MissionEngraving(Option<MissionEngraving>),
    Day(Option<Weekday>),
}

impl fmt::Display for WizardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pocket(pocket) => write!(f, "pocket {pocket}"),
            Self::Size(size) => write!(f, "size {size}"),
            Self::Color(color) => write!(f, "color {}", color.name),
            Self::Text(Some(text)) => write!(f, "text '{text}'"),
            Self::Text(None) => f.write_str("empty text"),
            Self::MissionEngraving(Some(option)) => write!(f, "mission engraving {option}"),
            Self::MissionEngraving(None) => f.write_str("no mission engraving"),
            Self::Day(Some(day)) => write!(f, "start day {}", day_name(*day)),
            Self::Day(None) => f.write_str("no start day"),
        }
    }
}

impl WizardStep {
    /// What this step accepts, for error messages.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::SelectingPocket => "a pocket",
            Self::SelectingSize => "a size",
            Self::SelectingColor(_) => "a color",
            Self::EditingLid(_) => "lid engraving text",
            Self::SelectingMissionEngraving => "a mission engraving option",
            Self::SelectingDay => "a start day",
            Self::EditingCustomMods => "custom modification text",
            Self::Done => "nothing (the case is finished)",
        }
    }

    /// Question shown to the user. `pocket` names the color and lid slots.
    #[must_use]
    pub fn prompt(self, pocket: Option<PocketType>) -> String {
        let slot_name = |slot: SlotRole| pocket.map_or("Color", |p| slot.prompt_label(p));
        match self {
            Self::SelectingPocket => "Choose a pocket: NANO, MISSION, WEEKLY, AMPM or 2-WEEK.".into(),
            Self::SelectingSize => "Choose a size: PILL, VITAMIN or VITAMIN XL.".into(),
            Self::SelectingColor(SlotRole::Single) => "Choose the case color.".into(),
            Self::SelectingColor(slot) => format!("Choose the {} color.", slot_name(slot)),
            Self::EditingLid(SlotRole::Single) => {
                "Enter the lid engraving, or leave the value empty for none.".into()
            }
            Self::EditingLid(slot) => format!(
                "Enter the {} lid engraving, or leave the value empty for none.",
                slot_name(slot)
            ),
            Self::SelectingMissionEngraving => {
                "Choose the pocket engraving layout, or 'none'.".into()
            }
            Self::SelectingDay => "Choose the start day of the week, or 'none'.".into(),
            Self::EditingCustomMods => {
                "Enter custom modifications for the DOTW engraving, or leave the value empty."
                    .into()
            }
            Self::Done => "This case is finished.".into(),
        }
    }

    /// Turns a typed answer into the input this step expects.
    ///
    /// Text steps accept anything. Every optional step, text included, is
    /// skipped by blank text or `none`.
    ///
    /// # Errors
    /// Returns `Error::UnknownOption` for unrecognised pockets, sizes, options or
    /// days, `Error::ColorNotFound` for colors missing from the catalog and
    /// `Error::UnexpectedInput` once the wizard is done.
    pub fn parse_answer(self, text: &str, catalog: &Catalog) -> Result<WizardInput> {
        let trimmed = text.trim();
        let skipped = trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NONE_ANSWER);

        match self {
            Self::SelectingPocket => trimmed.parse().map(WizardInput::Pocket),
            Self::SelectingSize => trimmed.parse().map(WizardInput::Size),
            Self::SelectingColor(_) => catalog
                .color_by_name(trimmed)
                .cloned()
                .map(WizardInput::Color)
                .ok_or_else(|| Error::ColorNotFound {
                    name: trimmed.to_string(),
                }),
            Self::EditingLid(_) | Self::EditingCustomMods => Ok(WizardInput::Text(
                (!skipped).then(|| trimmed.to_string()),
            )),
            Self::SelectingMissionEngraving if skipped => Ok(WizardInput::MissionEngraving(None)),
            Self::SelectingMissionEngraving => trimmed
                .parse()
                .map(|option| WizardInput::MissionEngraving(Some(option))),
            Self::SelectingDay if trimmed.is_empty() => Ok(WizardInput::Day(None)),
            Self::SelectingDay => parse_start_day(trimmed).map(WizardInput::Day),
            Self::Done => Err(Error::UnexpectedInput {
                expected: self.expected().to_string(),
                received: format!("'{trimmed}'"),
            }),
        }
    }

    /// Suggested answers containing `partial` (case-insensitive), in display order.
    #[must_use]
    pub fn choices(self, partial: &str, catalog: &Catalog) -> Vec<String> {
        let options: Vec<String> = match self {
            Self::SelectingPocket => PocketType::ALL.iter().map(|p| p.label().into()).collect(),
            Self::SelectingSize => CaseSize::ALL.iter().map(|s| s.label().into()).collect(),
            Self::SelectingColor(_) => {
                return catalog
                    .colors_by_prefix(partial)
                    .into_iter()
                    .map(|color| color.name.clone())
                    .collect();
            }
            Self::SelectingMissionEngraving => MissionEngraving::ALL
                .iter()
                .map(|option| option.label().into())
                .chain(std::iter::once(NONE_ANSWER.into()))
                .collect(),
            Self::SelectingDay => DAYS
                .iter()
                .map(|day| day_name(*day).into())
                .chain(std::iter::once(NONE_ANSWER.into()))
                .collect(),
            Self::EditingCustomMods => CUSTOM_MODIFICATION_PRESETS
                .iter()
                .map(ToString::to_string)
                .collect(),
            Self::EditingLid(_) | Self::Done => Vec::new(),
        };

        let needle = partial.trim().to_lowercase();
        options
            .into_iter()
            .filter(|option| option.to_lowercase().contains(&needle))
            .collect()
    }
}

/// A case under construction and the step it is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    case: CaseConfiguration,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectingPocket,
            case: CaseConfiguration::new(),
        }
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub const fn case(&self) -> &CaseConfiguration {
        &self.case
    }

    #[must_use]
    pub fn into_case(self) -> CaseConfiguration {
        self.case
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step == WizardStep::Done
    }

    /// The question for the current step.
    #[must_use]
    pub fn prompt(&self) -> String {
        self.step.prompt(self.case.pocket())
    }

    /// Applies one answer and moves to the next step.
    ///
    /// # Errors
    /// Returns `Error::UnexpectedInput` if the input does not belong to the
    /// current step, including any input once the wizard is done.
    pub fn advance(mut self, input: WizardInput) -> Result<Self> {
        let next = match (self.step, input) {
            (WizardStep::SelectingPocket, WizardInput::Pocket(pocket)) => {
                self.case.set_pocket(pocket);
                WizardStep::SelectingSize
            }
            (WizardStep::SelectingSize, WizardInput::Size(size)) => {
                self.case.set_size(size);
                self.first_slot(WizardStep::SelectingColor)
            }
            (WizardStep::SelectingColor(slot), WizardInput::Color(color)) => {
                self.case.set_color(slot, color)?;
                match self.slot_after(slot) {
                    Some(next) => WizardStep::SelectingColor(next),
                    None => self.first_slot(WizardStep::EditingLid),
                }
            }
            (WizardStep::EditingLid(slot), WizardInput::Text(text)) => {
                self.case.set_lid(slot, text.as_deref())?;
                match self.slot_after(slot) {
                    Some(next) => WizardStep::EditingLid(next),
                    None => self.step_after_lids(),
                }
            }
            (WizardStep::SelectingMissionEngraving, WizardInput::MissionEngraving(option)) => {
                self.case.set_mission_engraving(option);
                WizardStep::Done
            }
            (WizardStep::SelectingDay, WizardInput::Day(day)) => {
                self.case.set_start_day(day);
                if day.is_some() {
                    WizardStep::EditingCustomMods
                } else {
                    WizardStep::Done
                }
            }
            (WizardStep::EditingCustomMods, WizardInput::Text(text)) => {
                self.case.set_custom_modifications(text.as_deref());
                WizardStep::Done
            }
            (step, input) => {
                return Err(Error::UnexpectedInput {
                    expected: step.expected().to_string(),
                    received: input.to_string(),
                });
            }
        };

        debug!(from = ?self.step, to = ?next, "Wizard advanced");
        self.step = next;
        Ok(self)
    }

    fn first_slot(&self, step: fn(SlotRole) -> WizardStep) -> WizardStep {
        self.case
            .slots()
            .first()
            .map_or(WizardStep::Done, |slot| step(*slot))
    }

    fn slot_after(&self, slot: SlotRole) -> Option<SlotRole> {
        let slots = self.case.slots();
        slots
            .iter()
            .position(|s| *s == slot)
            .and_then(|index| slots.get(index + 1))
            .copied()
    }

    fn step_after_lids(&self) -> WizardStep {
        match self.case.pocket() {
            Some(PocketType::Mission) => WizardStep::SelectingMissionEngraving,
            Some(pocket) if pocket.supports_start_day() => WizardStep::SelectingDay,
            _ => WizardStep::Done,
        }
    }
}
