//! Order note composition.
//!
//! Turns the ordered list of configured cases into the manufacturing notes staff
//! paste into an order. Composition is all-or-nothing: the first incomplete case
//! aborts the batch and nothing is emitted.

use crate::{
    core::case::CaseConfiguration,
    models::{PocketType, SlotRole, day_name},
};
use std::fmt::{self, Write};
use thiserror::Error;
use tracing::debug;

/// Output when there is nothing to compose.
pub const NO_NOTES: &str = "No notes to display.";

/// Which required field a case is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    PocketOrSize,
    Color,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PocketOrSize => f.write_str("both Pocket and Size"),
            Self::Color => f.write_str("every color"),
        }
    }
}

/// A case that cannot be turned into notes. `case_number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please select {kind} for Case {case_number}.")]
pub struct ValidationError {
    pub case_number: usize,
    pub kind: MissingField,
}

/// Composes notes for every case, in order.
///
/// Returns [`NO_NOTES`] when `cases` is empty.
///
/// # Errors
/// Returns the [`ValidationError`] of the first case lacking a pocket, a size or
/// a required color.
pub fn compose_notes(cases: &[CaseConfiguration]) -> Result<String, ValidationError> {
    let mut notes = String::new();
    for (index, case) in cases.iter().enumerate() {
        write_case_notes(&mut notes, index + 1, case)?;
    }

    debug!(cases = cases.len(), bytes = notes.len(), "Composed order notes");
    if notes.is_empty() {
        return Ok(NO_NOTES.to_string());
    }
    Ok(notes)
}

fn write_case_notes(
    notes: &mut String,
    case_number: usize,
    case: &CaseConfiguration,
) -> Result<(), ValidationError> {
    let missing = |kind| ValidationError { case_number, kind };

    let (Some(pocket), Some(size)) = (case.pocket(), case.size()) else {
        return Err(missing(MissingField::PocketOrSize));
    };
    let color_name = |slot| {
        case.color(slot)
            .map(|color| color.name.to_uppercase())
            .ok_or_else(|| missing(MissingField::Color))
    };
    let prefix = format!("{case_number}) {pocket} {size}");

    if pocket.is_split() {
        let colors = [color_name(SlotRole::First)?, color_name(SlotRole::Second)?];
        let mut lines = String::new();
        for (slot, color) in [SlotRole::First, SlotRole::Second].into_iter().zip(colors) {
            let label = slot.note_label(pocket).unwrap_or_default();
            push_line(
                &mut lines,
                &format!("{prefix} / {label} / {color}"),
                case.lid(slot),
            );
        }
        if let Some(day) = case.start_day() {
            let _ = write!(lines, "{prefix} = DOTW = Modified *{}*", day_name(day));
            push_modifications(&mut lines, case.custom_modifications());
        }
        notes.push_str(&lines);
        return Ok(());
    }

    let color = color_name(SlotRole::Single)?;
    push_line(notes, &format!("{prefix} / {color}"), case.lid(SlotRole::Single));

    if pocket == PocketType::Mission {
        if let Some(option) = case.mission_engraving() {
            let _ = writeln!(notes, "{prefix} / {color} = POCKETS = {option}");
        }
    } else if pocket.supports_start_day() {
        if let Some(day) = case.start_day() {
            let _ = write!(notes, "{prefix} / {color} = DOTW = *{}*", day_name(day));
            push_modifications(notes, case.custom_modifications());
        }
    }
    Ok(())
}

fn push_line(notes: &mut String, line: &str, lid: Option<&str>) {
    notes.push_str(line);
    if let Some(lid) = lid {
        let _ = write!(notes, " = LID = {lid}");
    }
    notes.push('\n');
}

fn push_modifications(notes: &mut String, modifications: Option<&str>) {
    if let Some(modifications) = modifications {
        let _ = write!(notes, " ({modifications})");
    }
    notes.push('\n');
}
