//! Core types for DataScout.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod payment;
pub mod rating;

pub use id::*;
pub use payment::PaymentMethod;
pub use rating::{Rating, RatingError};
