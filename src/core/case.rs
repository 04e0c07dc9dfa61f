//! Case configuration - one order line item as the user builds it.
//!
//! Every field starts unset and is filled in as selections come in. Color slots
//! follow the pocket layout: picking a pocket resets everything that depends on
//! it, so a configuration never holds slots its pocket does not have.

use crate::{
    core::catalog::Color,
    errors::{Error, Result},
    models::{CaseSize, MissionEngraving, PocketType, SlotRole},
};
use chrono::Weekday;
use std::collections::BTreeMap;

/// A single configured case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseConfiguration {
    pocket: Option<PocketType>,
    size: Option<CaseSize>,
    colors: BTreeMap<SlotRole, Color>,
    lids: BTreeMap<SlotRole, String>,
    start_day: Option<Weekday>,
    mission_engraving: Option<MissionEngraving>,
    custom_modifications: Option<String>,
}

impl CaseConfiguration {
    /// An empty case, as added by the user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the pocket layout.
    ///
    /// Switching to a different pocket clears colors, lid engravings, the start
    /// day, the mission engraving option and custom modifications.
    pub fn set_pocket(&mut self, pocket: PocketType) {
        if self.pocket == Some(pocket) {
            return;
        }
        self.pocket = Some(pocket);
        self.colors.clear();
        self.lids.clear();
        self.start_day = None;
        self.mission_engraving = None;
        self.custom_modifications = None;
    }

    pub fn set_size(&mut self, size: CaseSize) {
        self.size = Some(size);
    }

    /// Assigns a color to one slot of the current pocket layout.
    ///
    /// # Errors
    /// Returns `Error::SlotUnavailable` if no pocket is selected or the slot is
    /// not part of its layout.
    pub fn set_color(&mut self, slot: SlotRole, color: Color) -> Result<()> {
        self.check_slot(slot)?;
        self.colors.insert(slot, color);
        Ok(())
    }

    /// Sets or clears the lid engraving of a slot. Blank text clears it.
    ///
    /// # Errors
    /// Returns `Error::SlotUnavailable` for slots outside the pocket layout.
    pub fn set_lid(&mut self, slot: SlotRole, text: Option<&str>) -> Result<()> {
        self.check_slot(slot)?;
        match non_blank(text) {
            Some(text) => {
                self.lids.insert(slot, text);
            }
            None => {
                self.lids.remove(&slot);
            }
        }
        Ok(())
    }

    pub fn set_start_day(&mut self, day: Option<Weekday>) {
        self.start_day = day;
    }

    pub fn set_mission_engraving(&mut self, option: Option<MissionEngraving>) {
        self.mission_engraving = option;
    }

    /// Sets free-text modifications for the start-day section. Blank text clears it.
    pub fn set_custom_modifications(&mut self, text: Option<&str>) {
        self.custom_modifications = non_blank(text);
    }

    #[must_use]
    pub const fn pocket(&self) -> Option<PocketType> {
        self.pocket
    }

    #[must_use]
    pub const fn size(&self) -> Option<CaseSize> {
        self.size
    }

    #[must_use]
    pub fn color(&self, slot: SlotRole) -> Option<&Color> {
        self.colors.get(&slot)
    }

    #[must_use]
    pub fn lid(&self, slot: SlotRole) -> Option<&str> {
        self.lids.get(&slot).map(String::as_str)
    }

    #[must_use]
    pub const fn start_day(&self) -> Option<Weekday> {
        self.start_day
    }

    #[must_use]
    pub const fn mission_engraving(&self) -> Option<MissionEngraving> {
        self.mission_engraving
    }

    #[must_use]
    pub fn custom_modifications(&self) -> Option<&str> {
        self.custom_modifications.as_deref()
    }

    /// Slots of the current layout; empty until a pocket is chosen.
    #[must_use]
    pub fn slots(&self) -> &'static [SlotRole] {
        self.pocket.map(PocketType::slots).unwrap_or_default()
    }

    /// Pocket, size and every color slot of the layout are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pocket.is_some()
            && self.size.is_some()
            && self.slots().iter().all(|slot| self.colors.contains_key(slot))
    }

    /// Short one-line description for listings, e.g. `WEEKLY PILL (Navy Blue)`.
    #[must_use]
    pub fn summary(&self) -> String {
        let pocket = self.pocket.map_or("?", PocketType::label);
        let size = self.size.map_or("?", CaseSize::label);
        let colors: Vec<&str> = self
            .slots()
            .iter()
            .map(|slot| self.color(*slot).map_or("?", |c| c.name.as_str()))
            .collect();
        if colors.is_empty() {
            format!("{pocket} {size}")
        } else {
            format!("{pocket} {size} ({})", colors.join(" / "))
        }
    }

    fn check_slot(&self, slot: SlotRole) -> Result<()> {
        if self.slots().contains(&slot) {
            Ok(())
        } else {
            Err(Error::SlotUnavailable {
                slot,
                pocket: self.pocket,
            })
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
}
