//! Merging two partial values into a more complete one.

use std::fmt;

use partime_core::{Field, FieldSet, unify};

use crate::time::{Time, TimeField};

impl Time {
    /// Combine two fragments into one value.
    ///
    /// Returns `None` if both sides set a component to different values;
    /// that is a normal outcome meaning the fragments do not belong together.
    /// Otherwise each component comes from whichever side sets it. The merge
    /// is commutative and `Time::intersect(a, a) == Some(a)`.
    pub fn intersect(a: &Time, b: &Time) -> Option<Time> {
        Self::intersect_excluding(a, b, FieldSet::empty())
    }

    /// Like [`Time::intersect`], but components in `exclude` are neither
    /// compared nor carried over; they are absent in the result.
    pub fn intersect_excluding(a: &Time, b: &Time, exclude: FieldSet<TimeField>) -> Option<Time> {
        Some(Time {
            span: a.span.cover(b.span),
            year: merge_field(TimeField::Year, a.year, b.year, exclude)?,
            month: merge_field(TimeField::Month, a.month, b.month, exclude)?,
            day: merge_field(TimeField::Day, a.day, b.day, exclude)?,
            hour: merge_field(TimeField::Hour, a.hour, b.hour, exclude)?,
            minute: merge_field(TimeField::Minute, a.minute, b.minute, exclude)?,
            day_of_week: merge_field(
                TimeField::DayOfWeek,
                a.day_of_week,
                b.day_of_week,
                exclude,
            )?,
            part_of_day: merge_field(
                TimeField::PartOfDay,
                a.part_of_day,
                b.part_of_day,
                exclude,
            )?,
        })
    }
}

fn merge_field<T: Copy + PartialEq + fmt::Debug>(
    field: TimeField,
    a: Option<T>,
    b: Option<T>,
    exclude: FieldSet<TimeField>,
) -> Option<Option<T>> {
    if exclude.contains(field) {
        return Some(None);
    }

    let merged = unify(a, b);
    if merged.is_none() {
        tracing::trace!(field = field.name(), left = ?a, right = ?b, "merge rejected");
    }
    merged
}
