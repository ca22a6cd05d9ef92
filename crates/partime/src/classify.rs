//! Shape classification of partial values.
//!
//! Shapes are exact: a value is a `Date` only if year, month and day are set
//! and nothing else is. Anything outside the known combinations (a part of day
//! together with a year, say) is `Other`. The grammar uses these checks as
//! guards to decide which rules apply.

use partime_core::{FieldSet, Record};
use serde::{Deserialize, Serialize};

use crate::time::{Time, TimeField};

/// The combination of components a [`Time`] carries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeShape {
    Year,
    Month,
    /// Day without a month.
    DayOfMonth,
    /// Month and day without a year.
    DayOfYear,
    DayOfWeek,
    PartOfDay,
    /// Hour, optionally minute, without a date.
    TimeOfDay,
    Date,
    DateTime,
    Other,
}

const SHAPES: &[(TimeShape, &[TimeField])] = {
    use TimeField::{Day, DayOfWeek, Hour, Minute, Month, PartOfDay, Year};
    &[
        (TimeShape::Year, &[Year]),
        (TimeShape::Month, &[Month]),
        (TimeShape::DayOfMonth, &[Day]),
        (TimeShape::DayOfYear, &[Month, Day]),
        (TimeShape::DayOfWeek, &[DayOfWeek]),
        (TimeShape::PartOfDay, &[PartOfDay]),
        (TimeShape::TimeOfDay, &[Hour]),
        (TimeShape::TimeOfDay, &[Hour, Minute]),
        (TimeShape::Date, &[Year, Month, Day]),
        (TimeShape::DateTime, &[Year, Month, Day, Hour]),
        (TimeShape::DateTime, &[Year, Month, Day, Hour, Minute]),
    ]
};

/// Classify by exact field set.
pub fn classify(time: &Time) -> TimeShape {
    SHAPES
        .iter()
        .find(|(_, fields)| time.has_only(FieldSet::of(fields)))
        .map_or(TimeShape::Other, |(shape, _)| *shape)
}

impl Time {
    pub fn shape(&self) -> TimeShape {
        classify(self)
    }

    pub fn is_year(&self) -> bool {
        self.shape() == TimeShape::Year
    }

    pub fn is_month(&self) -> bool {
        self.shape() == TimeShape::Month
    }

    pub fn is_dom(&self) -> bool {
        self.shape() == TimeShape::DayOfMonth
    }

    pub fn is_doy(&self) -> bool {
        self.shape() == TimeShape::DayOfYear
    }

    /// Only a weekday. The grammar never attaches a weekday to a full date,
    /// so such a value falls through to `Other`.
    pub fn is_dow(&self) -> bool {
        self.shape() == TimeShape::DayOfWeek
    }

    pub fn is_pod(&self) -> bool {
        self.shape() == TimeShape::PartOfDay
    }

    pub fn is_tod(&self) -> bool {
        self.shape() == TimeShape::TimeOfDay
    }

    pub fn is_date(&self) -> bool {
        self.shape() == TimeShape::Date
    }

    pub fn is_date_time(&self) -> bool {
        self.shape() == TimeShape::DateTime
    }

    /// Year, month and day are set; other components may be too.
    pub fn has_date(&self) -> bool {
        self.has_at_least(FieldSet::of(&[
            TimeField::Year,
            TimeField::Month,
            TimeField::Day,
        ]))
    }

    pub fn has_dow(&self) -> bool {
        self.has_at_least(FieldSet::of(&[TimeField::DayOfWeek]))
    }

    /// At least the hour is set.
    pub fn has_time(&self) -> bool {
        self.has_at_least(FieldSet::of(&[TimeField::Hour]))
    }

    pub fn has_pod(&self) -> bool {
        self.has_at_least(FieldSet::of(&[TimeField::PartOfDay]))
    }
}
