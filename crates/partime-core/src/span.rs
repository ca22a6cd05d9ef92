//! Source spans and the artifact base trait.
//!
//! Every value the grammar builds remembers which range of the input text it
//! was derived from. Spans are plain `TextRange`s; composing a parent from its
//! children re-derives the range from the first and last child and returns a
//! new value, so artifacts stay immutable once handed to the next stage.

use std::fmt;

pub use rowan::{TextRange as Span, TextSize};

use crate::{Error, Result};

/// A grammar value anchored to a range of the input text.
///
/// `Display` renders the value alone; use [`Artifact::annotated`] to include
/// the entity name and span.
pub trait Artifact: fmt::Display {
    /// Entity name used in annotated output (e.g. `Time`).
    fn kind(&self) -> &'static str;

    fn span(&self) -> Span;

    /// Same value, anchored to `span`.
    fn with_span(self, span: Span) -> Self
    where
        Self: Sized;

    /// Length of the covered input.
    fn len(&self) -> TextSize {
        self.span().len()
    }

    fn is_empty(&self) -> bool {
        self.span().is_empty()
    }

    /// Re-anchor to the range from the first child's start to the last child's end.
    ///
    /// Children must be given in input order.
    fn update_span(self, children: &[&dyn Artifact]) -> Result<Self>
    where
        Self: Sized,
    {
        let span = covering(children)?;
        Ok(self.with_span(span))
    }

    /// Renders as `Kind[start-end]{value}`.
    fn annotated(&self) -> Annotated<'_, Self>
    where
        Self: Sized,
    {
        Annotated(self)
    }

    /// Renders as `Kind[]{value}`, independent of where the value was found.
    fn unanchored(&self) -> Unanchored<'_, Self>
    where
        Self: Sized,
    {
        Unanchored(self)
    }
}

/// Range from the first child's start to the last child's end.
pub fn covering(children: &[&dyn Artifact]) -> Result<Span> {
    let (Some(first), Some(last)) = (children.first(), children.last()) else {
        return Err(Error::EmptyChildren);
    };

    let start = first.span().start();
    let end = last.span().end();
    if end < start {
        return Err(Error::UnorderedChildren { start, end });
    }
    Ok(Span::new(start, end))
}

/// Display adapter returned by [`Artifact::annotated`].
pub struct Annotated<'a, A>(&'a A);

impl<A: Artifact> fmt::Display for Annotated<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.0.span();
        write!(
            f,
            "{}[{}-{}]{{{}}}",
            self.0.kind(),
            u32::from(span.start()),
            u32::from(span.end()),
            self.0
        )
    }
}

/// Display adapter returned by [`Artifact::unanchored`].
pub struct Unanchored<'a, A>(&'a A);

impl<A: Artifact> fmt::Display for Unanchored<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[]{{{}}}", self.0.kind(), self.0)
    }
}
