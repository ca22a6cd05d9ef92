//! Ranges between two partial values.
//!
//! One endpoint may be missing: "until 6pm" has no start and is read as
//! starting at the beginning of that day; "from Monday" likewise ends at the
//! end of its day. An interval with neither endpoint cannot be built.

use std::fmt;
use std::hash::{Hash, Hasher};

use partime_core::{Artifact, Field, Record, Span};
use serde::{Deserialize, Serialize};

use crate::time::Time;
use crate::{Error, Result};

/// Declared endpoints of an [`Interval`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IntervalField {
    From,
    To,
}

impl Field for IntervalField {
    const ALL: &'static [Self] = &[Self::From, Self::To];

    fn index(self) -> u32 {
        self as u32
    }

    fn name(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Bounds {
    Closed(Time, Time),
    From(Time),
    To(Time),
}

/// A range of time with at least one endpoint.
///
/// Equality and hashing look at the endpoints only.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct Interval {
    span: Span,
    bounds: Bounds,
}

impl Interval {
    /// Build from optional endpoints; fails if both are absent.
    pub fn new(from: Option<Time>, to: Option<Time>) -> Result<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Ok(Self::between(from, to)),
            (Some(from), None) => Ok(Self::since(from)),
            (None, Some(to)) => Ok(Self::until(to)),
            (None, None) => {
                tracing::debug!("interval without endpoints rejected");
                Err(Error::EmptyInterval)
            }
        }
    }

    pub fn between(from: Time, to: Time) -> Self {
        Self {
            span: from.span().cover(to.span()),
            bounds: Bounds::Closed(from, to),
        }
    }

    /// Open-ended range starting at `from`.
    pub fn since(from: Time) -> Self {
        Self {
            span: from.span(),
            bounds: Bounds::From(from),
        }
    }

    /// Open-ended range ending at `to`.
    pub fn until(to: Time) -> Self {
        Self {
            span: to.span(),
            bounds: Bounds::To(to),
        }
    }

    pub fn from_time(&self) -> Option<&Time> {
        match &self.bounds {
            Bounds::Closed(from, _) | Bounds::From(from) => Some(from),
            Bounds::To(_) => None,
        }
    }

    pub fn to_time(&self) -> Option<&Time> {
        match &self.bounds {
            Bounds::Closed(_, to) | Bounds::To(to) => Some(to),
            Bounds::From(_) => None,
        }
    }

    /// Both endpoints are present and are bare times of day.
    pub fn is_time_interval(&self) -> bool {
        match &self.bounds {
            Bounds::Closed(from, to) => from.is_tod() && to.is_tod(),
            Bounds::From(_) | Bounds::To(_) => false,
        }
    }

    /// Start of `from`, or midnight of the day `to` falls on.
    pub fn start(&self) -> Time {
        match &self.bounds {
            Bounds::Closed(from, _) | Bounds::From(from) => from.start(),
            Bounds::To(to) => to.end().with_hour(0).with_minute(0),
        }
    }

    /// End of `to`, or 23:59 of the day `from` falls on.
    pub fn end(&self) -> Time {
        match &self.bounds {
            Bounds::Closed(_, to) | Bounds::To(to) => to.end(),
            Bounds::From(from) => from.start().with_hour(23).with_minute(59),
        }
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.from_time() == other.from_time() && self.to_time() == other.to_time()
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from_time().hash(state);
        self.to_time().hash(state);
    }
}

impl Record for Interval {
    type Field = IntervalField;

    fn is_set(&self, field: IntervalField) -> bool {
        match field {
            IntervalField::From => self.from_time().is_some(),
            IntervalField::To => self.to_time().is_some(),
        }
    }
}

impl Artifact for Interval {
    fn kind(&self) -> &'static str {
        "Interval"
    }

    fn span(&self) -> Span {
        self.span
    }

    fn with_span(self, span: Span) -> Self {
        Self { span, ..self }
    }
}

/// `from - to`, with `..` for a missing endpoint.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from_time() {
            Some(from) => write!(f, "{from}")?,
            None => f.write_str("..")?,
        }
        f.write_str(" - ")?;
        match self.to_time() {
            Some(to) => write!(f, "{to}"),
            None => f.write_str(".."),
        }
    }
}

/// Serialized form; both endpoints optional.
#[derive(Serialize, Deserialize)]
struct RawInterval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<Time>,
}

impl TryFrom<RawInterval> for Interval {
    type Error = Error;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::new(raw.from, raw.to)
    }
}

impl From<Interval> for RawInterval {
    fn from(interval: Interval) -> Self {
        Self {
            from: interval.from_time().copied(),
            to: interval.to_time().copied(),
        }
    }
}
