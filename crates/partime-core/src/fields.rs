//! Fixed field records.
//!
//! A record type declares its optional fields as a fieldless enum implementing
//! [`Field`]. Presence checks work on [`FieldSet`], a bitset over that enum, so
//! the set of fields is known at compile time and no name lookup happens at
//! runtime.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::BitOr;

/// One declared field of a record.
pub trait Field: Copy + Eq + fmt::Debug + 'static {
    /// All fields in declaration order.
    const ALL: &'static [Self];

    /// Bit position, must be below 32 and unique per field.
    fn index(self) -> u32;

    fn name(self) -> &'static str;
}

/// Set of fields of one record type.
pub struct FieldSet<F> {
    bits: u32,
    _field: PhantomData<fn() -> F>,
}

impl<F: Field> FieldSet<F> {
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _field: PhantomData,
        }
    }

    pub fn of(fields: &[F]) -> Self {
        fields.iter().copied().collect()
    }

    /// Every declared field.
    pub fn all() -> Self {
        Self::of(F::ALL)
    }

    #[must_use]
    pub fn with(self, field: F) -> Self {
        debug_assert!(field.index() < 32, "field index {} out of range", field.index());
        Self {
            bits: self.bits | (1 << field.index()),
            _field: PhantomData,
        }
    }

    #[inline]
    pub fn contains(self, field: F) -> bool {
        debug_assert!(field.index() < 32, "field index {} out of range", field.index());
        self.bits & (1 << field.index()) != 0
    }

    #[inline]
    pub fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
            _field: PhantomData,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = F> {
        F::ALL.iter().copied().filter(move |f| self.contains(*f))
    }
}

impl<F> Clone for FieldSet<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FieldSet<F> {}

impl<F> PartialEq for FieldSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F> Eq for FieldSet<F> {}

impl<F> Hash for FieldSet<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<F: Field> Default for FieldSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Field> FromIterator<F> for FieldSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl<F: Field> BitOr for FieldSet<F> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
            _field: PhantomData,
        }
    }
}

impl<F: Field> fmt::Debug for FieldSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Comma-separated field names, e.g. `year, month`.
impl<F: Field> fmt::Display for FieldSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.name())?;
        }
        Ok(())
    }
}

/// A value made of independently optional declared fields.
pub trait Record {
    type Field: Field;

    fn is_set(&self, field: Self::Field) -> bool;

    /// Fields currently holding a value.
    fn present(&self) -> FieldSet<Self::Field> {
        Self::Field::ALL
            .iter()
            .copied()
            .filter(|f| self.is_set(*f))
            .collect()
    }

    /// Exactly `fields` are set, every other declared field is absent.
    fn has_only(&self, fields: FieldSet<Self::Field>) -> bool {
        self.present() == fields
    }

    /// All of `fields` are set; other fields are unconstrained.
    fn has_at_least(&self, fields: FieldSet<Self::Field>) -> bool {
        fields.is_subset(self.present())
    }
}

/// Merge one optional field from two sides.
///
/// Returns `None` when both sides hold different values, otherwise the merged
/// field (which is absent only if both sides are absent).
pub fn unify<T: PartialEq>(a: Option<T>, b: Option<T>) -> Option<Option<T>> {
    match (a, b) {
        (Some(a), Some(b)) if a != b => None,
        (Some(a), _) => Some(Some(a)),
        (None, b) => Some(b),
    }
}
