#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Partial date/time values for natural-language date extraction.
//!
//! A grammar recognizes fragments such as "15.03.", "2021" or "evening" and
//! turns each into a [`Time`] with only the matching components set. This
//! crate provides the algebra the grammar builds on:
//! - `classify` - exact shape checks used as rule guards
//! - `merge` - combining compatible fragments (`Time::intersect`)
//! - `resolve` - lower/upper bounds and conversion to a calendar instant
//! - `interval` - ranges with optional endpoints
//! - `part_of_day` - the fixed table of named day parts and their hours

pub mod classify;
pub mod interval;
mod merge;
pub mod part_of_day;
mod resolve;
pub mod time;

#[cfg(test)]
mod classify_tests;
#[cfg(test)]
mod compose_tests;

pub use chrono::Weekday;
pub use classify::{TimeShape, classify};
pub use interval::{Interval, IntervalField};
pub use part_of_day::{HourRange, PartOfDay};
pub use partime_core::{Artifact, FieldSet, ProductionId, Record, Span, Terminal};
pub use time::{Time, TimeField};

/// Errors that can occur while building or resolving values.
///
/// An incompatible merge is not an error; `Time::intersect` returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A calendar instant was requested from a value missing components.
    #[error("incomplete value: missing {missing}")]
    Incomplete { missing: FieldSet<TimeField> },

    /// All components are present but do not form a calendar instant.
    #[error("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02} is not a valid instant")]
    InvalidInstant {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },

    #[error("interval needs at least one endpoint")]
    EmptyInterval,

    #[error("unknown part of day '{0}'")]
    UnknownPartOfDay(String),

    #[error(transparent)]
    Span(#[from] partime_core::Error),
}

/// Result type for value operations.
pub type Result<T> = std::result::Result<T, Error>;
