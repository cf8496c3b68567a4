//! Proposition IDs and signed literals.
//!
//! A [`PropositionId`] is a dense positive integer assigned by the
//! [`SymbolTable`](crate::model::SymbolTable). A [`Literal`] pairs an ID with
//! a polarity: positive asserts truth, negative asserts falsity.

use std::fmt;
use std::num::{NonZeroI32, NonZeroU32};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Positive integer identifying one named proposition.
///
/// IDs are never zero and never reused within an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropositionId(NonZeroU32);

impl PropositionId {
    /// Wrap a raw ID. Returns `None` for `0` or values that do not fit a
    /// signed literal.
    #[must_use]
    pub fn new(raw: u32) -> Option<Self> {
        if i32::try_from(raw).is_err() {
            return None;
        }
        NonZeroU32::new(raw).map(Self)
    }

    /// The raw positive integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Little-endian bytes of the raw ID (fingerprint encoding).
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.get().to_le_bytes()
    }
}

impl fmt::Display for PropositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed literal: `L > 0` asserts proposition `L`, `L < 0` asserts `-L` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Literal(NonZeroI32);

impl Literal {
    /// The literal asserting `prop` is true.
    #[must_use]
    pub fn positive(prop: PropositionId) -> Self {
        Self(signed(prop))
    }

    /// The literal asserting `prop` is false.
    #[must_use]
    pub fn negative(prop: PropositionId) -> Self {
        Self(-signed(prop))
    }

    /// Build from the signed-integer encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ZeroLiteral`] for `0`.
    pub fn from_signed(raw: i32) -> Result<Self, ModelError> {
        // i32::MIN has no positive counterpart.
        if raw == i32::MIN {
            return Err(ModelError::ZeroLiteral);
        }
        NonZeroI32::new(raw).map(Self).ok_or(ModelError::ZeroLiteral)
    }

    /// The proposition this literal talks about.
    #[must_use]
    pub fn prop(self) -> PropositionId {
        PropositionId(self.0.unsigned_abs())
    }

    /// `true` when the literal asserts truth.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0.get() > 0
    }

    /// The literal with the opposite polarity.
    #[must_use]
    pub fn negate(self) -> Self {
        Self(-self.0)
    }

    /// The signed-integer encoding.
    #[must_use]
    pub const fn to_signed(self) -> i32 {
        self.0.get()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn signed(prop: PropositionId) -> NonZeroI32 {
    // PropositionId::new guarantees the raw value fits i32.
    let raw = i32::try_from(prop.get()).unwrap_or(i32::MAX);
    NonZeroI32::new(raw).unwrap_or(NonZeroI32::MAX)
}
