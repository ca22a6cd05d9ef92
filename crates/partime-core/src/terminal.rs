//! Leaf artifacts built from pattern matches.
//!
//! The grammar compiles each terminal alternative into a named capture group
//! `R{id}`. A successful match is turned into a [`Terminal`] per participating
//! group; the terminal keeps the group's span and the captured text verbatim.

use std::fmt;

use regex_automata::util::captures::Captures;

use crate::span::{Artifact, Span, TextSize};
use crate::{Error, Result};

/// Identifies the grammar alternative a terminal was matched by.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ProductionId(u16);

impl ProductionId {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Name of the capture group carrying this production in a match.
    pub fn group_name(self) -> String {
        format!("R{}", self.0)
    }
}

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recognized input token.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Terminal {
    production: ProductionId,
    span: Span,
    text: String,
}

impl Terminal {
    pub fn new(production: ProductionId, span: Span, text: impl Into<String>) -> Self {
        Self {
            production,
            span,
            text: text.into(),
        }
    }

    /// Build from the `R{production}` group of a successful match over `haystack`.
    pub fn from_captures(
        production: ProductionId,
        haystack: &str,
        captures: &Captures,
    ) -> Result<Self> {
        let group = captures
            .get_group_by_name(&production.group_name())
            .ok_or(Error::GroupNotMatched(production))?;

        let text = haystack
            .get(group.range())
            .ok_or(Error::OutsideHaystack {
                start: group.start,
                end: group.end,
            })?;

        let start = to_text_size(group.start)?;
        let end = to_text_size(group.end)?;

        Ok(Self {
            production,
            span: Span::new(start, end),
            text: text.to_owned(),
        })
    }

    pub fn production(&self) -> ProductionId {
        self.production
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

fn to_text_size(offset: usize) -> Result<TextSize> {
    TextSize::try_from(offset).map_err(|_| Error::OffsetOverflow(offset))
}

impl Artifact for Terminal {
    fn kind(&self) -> &'static str {
        "Terminal"
    }

    fn span(&self) -> Span {
        self.span
    }

    fn with_span(self, span: Span) -> Self {
        Self { span, ..self }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.production, self.text)
    }
}
