//! Named parts of the day and the hours they cover.
//!
//! Ranges are half-open and deliberately overlap ("morning" and
//! "earlymorning" share hour 5), mirroring how loosely people use the words.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Half-open hour range `[start, end)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(self, hour: u32) -> bool {
        self.start <= hour && hour < self.end
    }
}

/// A fuzzy time-of-day tag such as "evening".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfDay {
    EarlyMorning,
    Morning,
    LateMorning,
    EarlyBeforeNoon,
    BeforeNoon,
    LateBeforeNoon,
    EarlyNoon,
    Noon,
    LateNoon,
    EarlyAfternoon,
    Afternoon,
    LateAfternoon,
    EarlyEvening,
    Evening,
    LateEvening,
    EarlyNight,
    Night,
    LateNight,
}

impl PartOfDay {
    pub const ALL: [PartOfDay; 18] = [
        Self::EarlyMorning,
        Self::Morning,
        Self::LateMorning,
        Self::EarlyBeforeNoon,
        Self::BeforeNoon,
        Self::LateBeforeNoon,
        Self::EarlyNoon,
        Self::Noon,
        Self::LateNoon,
        Self::EarlyAfternoon,
        Self::Afternoon,
        Self::LateAfternoon,
        Self::EarlyEvening,
        Self::Evening,
        Self::LateEvening,
        Self::EarlyNight,
        Self::Night,
        Self::LateNight,
    ];

    /// Hours covered by this part of day.
    pub const fn hours(self) -> HourRange {
        match self {
            Self::EarlyMorning => HourRange::new(0, 6),
            Self::Morning => HourRange::new(5, 8),
            Self::LateMorning => HourRange::new(8, 10),
            Self::EarlyBeforeNoon => HourRange::new(8, 11),
            Self::BeforeNoon => HourRange::new(9, 12),
            Self::LateBeforeNoon => HourRange::new(10, 13),
            Self::EarlyNoon => HourRange::new(11, 13),
            Self::Noon => HourRange::new(12, 14),
            Self::LateNoon => HourRange::new(13, 15),
            Self::EarlyAfternoon => HourRange::new(13, 15),
            Self::Afternoon => HourRange::new(14, 16),
            Self::LateAfternoon => HourRange::new(15, 17),
            Self::EarlyEvening => HourRange::new(16, 18),
            Self::Evening => HourRange::new(17, 19),
            Self::LateEvening => HourRange::new(18, 20),
            Self::EarlyNight => HourRange::new(18, 20),
            Self::Night => HourRange::new(19, 22),
            Self::LateNight => HourRange::new(20, 23),
        }
    }

    /// Tag name as used by the grammar, e.g. `lateafternoon`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EarlyMorning => "earlymorning",
            Self::Morning => "morning",
            Self::LateMorning => "latemorning",
            Self::EarlyBeforeNoon => "earlybeforenoon",
            Self::BeforeNoon => "beforenoon",
            Self::LateBeforeNoon => "latebeforenoon",
            Self::EarlyNoon => "earlynoon",
            Self::Noon => "noon",
            Self::LateNoon => "latenoon",
            Self::EarlyAfternoon => "earlyafternoon",
            Self::Afternoon => "afternoon",
            Self::LateAfternoon => "lateafternoon",
            Self::EarlyEvening => "earlyevening",
            Self::Evening => "evening",
            Self::LateEvening => "lateevening",
            Self::EarlyNight => "earlynight",
            Self::Night => "night",
            Self::LateNight => "latenight",
        }
    }
}

impl FromStr for PartOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pod| pod.name() == s)
            .ok_or_else(|| Error::UnknownPartOfDay(s.to_owned()))
    }
}

impl fmt::Display for PartOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
