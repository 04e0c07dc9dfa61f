//! Domain enumerations shared by the catalog, the note composer and the SKU resolver.
//!
//! Every enum has two spellings: the lowercase catalog key used in `catalog.toml`
//! (and accepted from slash command arguments), and the uppercase label printed in
//! order notes.

use crate::errors::{Error, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Compartment layout of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PocketType {
    /// Single small compartment row
    #[serde(rename = "nano")]
    Nano,
    /// Three-pocket daily layout, supports pocket engravings
    #[serde(rename = "mission")]
    Mission,
    /// Seven-day layout
    #[serde(rename = "weekly")]
    Weekly,
    /// Split AM/PM layout with two lids
    #[serde(rename = "ampm")]
    Ampm,
    /// Split two-week layout with two lids
    #[serde(rename = "2-week")]
    TwoWeek,
}

impl PocketType {
    /// All pocket types in form order.
    pub const ALL: [Self; 5] = [
        Self::Nano,
        Self::Mission,
        Self::Weekly,
        Self::Ampm,
        Self::TwoWeek,
    ];

    /// Label used in order notes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nano => "NANO",
            Self::Mission => "MISSION",
            Self::Weekly => "WEEKLY",
            Self::Ampm => "AMPM",
            Self::TwoWeek => "2-WEEK",
        }
    }

    /// Key used in the catalog and in command arguments.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Nano => "nano",
            Self::Mission => "mission",
            Self::Weekly => "weekly",
            Self::Ampm => "ampm",
            Self::TwoWeek => "2-week",
        }
    }

    /// Split pockets carry two colors and two lids.
    #[must_use]
    pub const fn is_split(self) -> bool {
        matches!(self, Self::Ampm | Self::TwoWeek)
    }

    /// Color/lid slots for this layout, in note order.
    #[must_use]
    pub const fn slots(self) -> &'static [SlotRole] {
        if self.is_split() {
            &[SlotRole::First, SlotRole::Second]
        } else {
            &[SlotRole::Single]
        }
    }

    /// Whether the start-day section applies to this pocket.
    #[must_use]
    pub const fn supports_start_day(self) -> bool {
        !matches!(self, Self::Mission | Self::Nano)
    }
}

impl fmt::Display for PocketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PocketType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "nano" => Ok(Self::Nano),
            "mission" => Ok(Self::Mission),
            "weekly" => Ok(Self::Weekly),
            "ampm" | "am-pm" | "am/pm" => Ok(Self::Ampm),
            "2-week" | "2 week" | "2week" | "two-week" | "two week" | "biweekly" => Ok(Self::TwoWeek),
            _ => Err(Error::UnknownOption {
                field: "pocket",
                value: s.to_string(),
            }),
        }
    }
}

/// Physical case size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CaseSize {
    #[serde(rename = "pill")]
    Pill,
    #[serde(rename = "vitamin")]
    Vitamin,
    #[serde(rename = "vitamin xl")]
    VitaminXl,
}

impl CaseSize {
    /// All sizes in form order.
    pub const ALL: [Self; 3] = [Self::Pill, Self::Vitamin, Self::VitaminXl];

    /// Label used in order notes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pill => "PILL",
            Self::Vitamin => "VITAMIN",
            Self::VitaminXl => "VITAMIN XL",
        }
    }

    /// Key used in the catalog and in command arguments.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pill => "pill",
            Self::Vitamin => "vitamin",
            Self::VitaminXl => "vitamin xl",
        }
    }
}

impl fmt::Display for CaseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "pill" => Ok(Self::Pill),
            "vitamin" => Ok(Self::Vitamin),
            "vitamin xl" | "vitamin-xl" | "vitaminxl" | "xl" => Ok(Self::VitaminXl),
            _ => Err(Error::UnknownOption {
                field: "size",
                value: s.to_string(),
            }),
        }
    }
}

/// A color/engraving position within a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotRole {
    /// The only slot of a single-color pocket
    Single,
    /// AM (left lid) or RIGHT & TOP
    First,
    /// PM (right lid) or LEFT & BOTTOM
    Second,
}

impl SlotRole {
    /// Label printed in the note line for this slot, if any.
    ///
    /// Single-color pockets print no slot label.
    #[must_use]
    pub const fn note_label(self, pocket: PocketType) -> Option<&'static str> {
        match (pocket, self) {
            (PocketType::Ampm, Self::First) => Some("AM LEFT LID"),
            (PocketType::Ampm, Self::Second) => Some("PM RIGHT LID"),
            (PocketType::TwoWeek, Self::First) => Some("RIGHT & TOP"),
            (PocketType::TwoWeek, Self::Second) => Some("LEFT & BOTTOM"),
            _ => None,
        }
    }

    /// Human-facing name of the slot for prompts.
    #[must_use]
    pub const fn prompt_label(self, pocket: PocketType) -> &'static str {
        match (pocket, self) {
            (PocketType::Ampm, Self::First) => "AM",
            (PocketType::Ampm, Self::Second) => "PM",
            (PocketType::TwoWeek, Self::First) => "RIGHT & TOP",
            (PocketType::TwoWeek, Self::Second) => "LEFT & BOTTOM",
            _ => "Color",
        }
    }
}

impl fmt::Display for SlotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "color",
            Self::First => "first",
            Self::Second => "second",
        };
        f.write_str(name)
    }
}

/// Pocket engraving layouts offered for MISSION cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissionEngraving {
    AmLunchPm,
    FriSatSun,
    AmPmExtra,
    BreakfastLunchDinner,
}

impl MissionEngraving {
    pub const ALL: [Self; 4] = [
        Self::AmLunchPm,
        Self::FriSatSun,
        Self::AmPmExtra,
        Self::BreakfastLunchDinner,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AmLunchPm => "AM-LUNCH-PM",
            Self::FriSatSun => "FRI-SAT-SUN",
            Self::AmPmExtra => "AM-PM-EXTRA",
            Self::BreakfastLunchDinner => "BREAKFAST-LUNCH-DINNER",
        }
    }
}

impl fmt::Display for MissionEngraving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MissionEngraving {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownOption {
                field: "mission engraving",
                value: s.to_string(),
            })
    }
}

/// Which half of a split case a SKU covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The complete case
    #[default]
    Both,
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Both => "both",
            Self::Left => "left side",
            Self::Right => "right side",
        };
        f.write_str(name)
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "both" => Ok(Self::Both),
            "left" | "left side" => Ok(Self::Left),
            "right" | "right side" => Ok(Self::Right),
            _ => Err(Error::UnknownOption {
                field: "side",
                value: s.to_string(),
            }),
        }
    }
}

/// Partition of the SKU table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkuCategory {
    Single,
    TwoPack,
    ComboPack,
    ThreePack,
    Monthly,
    Others,
}

impl SkuCategory {
    pub const ALL: [Self; 6] = [
        Self::Single,
        Self::TwoPack,
        Self::ComboPack,
        Self::ThreePack,
        Self::Monthly,
        Self::Others,
    ];

    /// Table name in `catalog.toml`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::TwoPack => "2_pack",
            Self::ComboPack => "combo_pack",
            Self::ThreePack => "3_pack",
            Self::Monthly => "monthly",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for SkuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SkuCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s).replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|category| category.key() == wanted)
            .ok_or_else(|| Error::UnknownOption {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// A pocket/size pair, used for case SKUs and combo pack halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseSpec {
    pub pocket: PocketType,
    pub size: CaseSize,
}

impl CaseSpec {
    #[must_use]
    pub const fn new(pocket: PocketType, size: CaseSize) -> Self {
        Self { pocket, size }
    }
}

impl fmt::Display for CaseSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pocket, self.size)
    }
}

/// Full English day name, as printed in DOTW note lines.
#[must_use]
pub const fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Days in the order the form lists them (week starts on Sunday).
pub const DAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Parses a start day, where "none" clears it.
pub fn parse_start_day(s: &str) -> Result<Option<Weekday>> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed
        .parse::<Weekday>()
        .map(Some)
        .map_err(|_| Error::UnknownOption {
            field: "day",
            value: s.to_string(),
        })
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('_', " ")
}
