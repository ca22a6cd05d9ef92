//! Lower and upper bounds of partial values.

use chrono::{NaiveDate, NaiveDateTime};
use partime_core::{FieldSet, Record};

use crate::time::{Time, TimeField};
use crate::{Error, Result};

impl Time {
    /// Earliest moment the value can denote.
    ///
    /// The hour comes from the part of day if there is one, else the explicit
    /// hour or 0; the minute defaults to 0. Date components pass through
    /// unchanged, so the result may still lack a date.
    pub fn start(&self) -> Time {
        let hour = match self.part_of_day {
            Some(pod) => pod.hours().start,
            None => self.hour.unwrap_or(0),
        };
        self.bound(hour, self.minute.unwrap_or(0))
    }

    /// Latest moment the value can denote; defaults are 23 and 59.
    pub fn end(&self) -> Time {
        let hour = match self.part_of_day {
            Some(pod) => pod.hours().end,
            None => self.hour.unwrap_or(23),
        };
        self.bound(hour, self.minute.unwrap_or(59))
    }

    fn bound(&self, hour: u32, minute: u32) -> Time {
        Time {
            span: self.span,
            year: self.year,
            month: self.month,
            day: self.day,
            hour: Some(hour),
            minute: Some(minute),
            day_of_week: None,
            part_of_day: None,
        }
    }

    /// Concrete calendar instant.
    ///
    /// Requires year, month, day, hour and minute.
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        let (Some(year), Some(month), Some(day), Some(hour), Some(minute)) =
            (self.year, self.month, self.day, self.hour, self.minute)
        else {
            let required = FieldSet::of(&[
                TimeField::Year,
                TimeField::Month,
                TimeField::Day,
                TimeField::Hour,
                TimeField::Minute,
            ]);
            return Err(Error::Incomplete {
                missing: required.difference(self.present()),
            });
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .ok_or(Error::InvalidInstant {
                year,
                month,
                day,
                hour,
                minute,
            })
    }
}
