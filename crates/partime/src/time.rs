//! Partial date/time values.
//!
//! A [`Time`] holds up to seven independently optional components. Nothing
//! forces a particular combination: "the 15th" sets only the day, "evening"
//! only the part of day. Values are immutable; every `with_*` call returns a
//! modified copy.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::Weekday;
use partime_core::{Artifact, Field, Record, Span};
use serde::{Deserialize, Serialize};

use crate::part_of_day::PartOfDay;

/// Declared components of a [`Time`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    DayOfWeek,
    PartOfDay,
}

impl Field for TimeField {
    const ALL: &'static [Self] = &[
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::DayOfWeek,
        Self::PartOfDay,
    ];

    fn index(self) -> u32 {
        self as u32
    }

    fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::DayOfWeek => "day_of_week",
            Self::PartOfDay => "part_of_day",
        }
    }
}

/// A possibly incomplete point in time.
///
/// Equality and hashing look at the seven components only; the span records
/// where the value came from and never makes two values differ.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Time {
    #[serde(skip)]
    pub(crate) span: Span,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) day_of_week: Option<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) part_of_day: Option<PartOfDay>,
}

type TimeKey = (
    Option<i32>,
    Option<u32>,
    Option<u32>,
    Option<u32>,
    Option<u32>,
    Option<Weekday>,
    Option<PartOfDay>,
);

impl Time {
    /// A value with every component absent.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_year(self, year: i32) -> Self {
        Self {
            year: Some(year),
            ..self
        }
    }

    #[must_use]
    pub fn with_month(self, month: u32) -> Self {
        Self {
            month: Some(month),
            ..self
        }
    }

    #[must_use]
    pub fn with_day(self, day: u32) -> Self {
        Self {
            day: Some(day),
            ..self
        }
    }

    #[must_use]
    pub fn with_hour(self, hour: u32) -> Self {
        Self {
            hour: Some(hour),
            ..self
        }
    }

    #[must_use]
    pub fn with_minute(self, minute: u32) -> Self {
        Self {
            minute: Some(minute),
            ..self
        }
    }

    #[must_use]
    pub fn with_day_of_week(self, day_of_week: Weekday) -> Self {
        Self {
            day_of_week: Some(day_of_week),
            ..self
        }
    }

    #[must_use]
    pub fn with_part_of_day(self, part_of_day: PartOfDay) -> Self {
        Self {
            part_of_day: Some(part_of_day),
            ..self
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn hour(&self) -> Option<u32> {
        self.hour
    }

    pub fn minute(&self) -> Option<u32> {
        self.minute
    }

    /// Weekday; its index counts from Monday = 0.
    pub fn day_of_week(&self) -> Option<Weekday> {
        self.day_of_week
    }

    pub fn part_of_day(&self) -> Option<PartOfDay> {
        self.part_of_day
    }

    fn key(&self) -> TimeKey {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.day_of_week,
            self.part_of_day,
        )
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Time {}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Record for Time {
    type Field = TimeField;

    fn is_set(&self, field: TimeField) -> bool {
        match field {
            TimeField::Year => self.year.is_some(),
            TimeField::Month => self.month.is_some(),
            TimeField::Day => self.day.is_some(),
            TimeField::Hour => self.hour.is_some(),
            TimeField::Minute => self.minute.is_some(),
            TimeField::DayOfWeek => self.day_of_week.is_some(),
            TimeField::PartOfDay => self.part_of_day.is_some(),
        }
    }
}

impl Artifact for Time {
    fn kind(&self) -> &'static str {
        "Time"
    }

    fn span(&self) -> Span {
        self.span
    }

    fn with_span(self, span: Span) -> Self {
        Self { span, ..self }
    }
}

/// `YYYY-MM-DD HH:MM (dow/pod)`, with `X` standing in for absent components.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_component(f, self.year, 4)?;
        f.write_str("-")?;
        write_component(f, self.month, 2)?;
        f.write_str("-")?;
        write_component(f, self.day, 2)?;
        f.write_str(" ")?;
        write_component(f, self.hour, 2)?;
        f.write_str(":")?;
        write_component(f, self.minute, 2)?;
        f.write_str(" (")?;
        write_component(f, self.day_of_week.map(|d| d.num_days_from_monday()), 1)?;
        f.write_str("/")?;
        match self.part_of_day {
            Some(pod) => write!(f, "{pod}")?,
            None => f.write_str("X")?,
        }
        f.write_str(")")
    }
}

fn write_component<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    value: Option<T>,
    width: usize,
) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{v:0width$}"),
        None => f.write_str("X"),
    }
}
