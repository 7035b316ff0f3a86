//! Bounded review rating.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error constructing a [`Rating`] from an out-of-range value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("rating must be between {min} and {max}, got {value}", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingError {
    /// The rejected value.
    pub value: i64,
}

/// A review rating, always in `1..=5`.
///
/// The storage layer enforces the same bound with a CHECK constraint; this
/// type keeps in-process values honest before they reach the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(i64);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: i64 = 1;
    /// Highest allowed rating.
    pub const MAX: i64 = 5;

    /// Create a rating, rejecting values outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if `value` is out of range.
    pub const fn new(value: i64) -> Result<Self, RatingError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RatingError { value })
        }
    }

    /// Clamp an arbitrary value into the valid range.
    #[must_use]
    pub const fn clamped(value: i64) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
