#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core building blocks shared by every partime value.
//!
//! - `span` - source ranges and the `Artifact` trait all grammar values implement
//! - `fields` - fixed field records with presence checks (`has_only`, `has_at_least`)
//! - `terminal` - leaf artifact wrapping one capture group of a pattern match

pub mod fields;
pub mod span;
pub mod terminal;

#[cfg(test)]
mod span_tests;

pub use fields::{Field, FieldSet, Record, unify};
pub use span::{Annotated, Artifact, Span, TextSize, Unanchored, covering};
pub use terminal::{ProductionId, Terminal};

/// Errors raised while building artifacts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `update_span` was called without any children.
    #[error("cannot derive a span from an empty child sequence")]
    EmptyChildren,

    /// The last child ends before the first child starts.
    #[error("children out of order: first child starts at {start:?}, last child ends at {end:?}")]
    UnorderedChildren { start: TextSize, end: TextSize },

    /// The capture group for a production did not take part in the match.
    #[error("production {0} did not participate in the match")]
    GroupNotMatched(ProductionId),

    /// The match was taken over a different, shorter haystack.
    #[error("match range {start}..{end} lies outside the haystack")]
    OutsideHaystack { start: usize, end: usize },

    /// A match offset does not fit into a `TextSize`.
    #[error("match offset {0} exceeds the supported text size")]
    OffsetOverflow(usize),
}

/// Result type for artifact construction.
pub type Result<T> = std::result::Result<T, Error>;
