//! Picotime is a library providing exact scalar time values: absolute
//! [`Moment`]s and relative [`Duration`]s, both stored as a signed count of
//! seconds plus a signed count of picoseconds.
//!
//! The value range reserves its extreme seconds to encode `NaN`, positive
//! infinity and negative infinity. Arithmetic never panics and never wraps:
//! overflow saturates to the correctly signed infinity, and invalid
//! combinations produce `NaN`, which then propagates through everything it
//! touches.
//!
//! # Moments and durations
//! The two wrapper types only allow combinations that make sense:
//!
//! ```
//! # use picotime::time::{Duration, Moment};
//! let start = Moment::from_secs(10);
//! let end = start + Duration::from_millis(1500);
//!
//! assert_eq!(end - start, Duration::new(1, 500_000_000_000));
//! assert_eq!(Duration::from_secs(2) * 3, Duration::from_secs(6));
//! ```
//!
//! Adding two moments, negating a moment or scaling a moment are rejected by
//! the compiler.
//!
//! # Time scale
//! Values are pure offsets on a linear, TAI-like time scale. There is no
//! notion of calendars, time zones or leap seconds here; those belong to
//! whatever civil time layer is built on top.
//!
//! # Features
//! * `std` (default): link the standard library and derive
//!   [`std::error::Error`] for the error types.
//! * `serde`: serialization support for all value types.
//! * `fuzz`: expose internal invariant checks to the fuzzing harness.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod float_polyfill;
pub mod time;

pub use error::{ConversionError, ParseError};
pub use time::{Category, Duration, Moment, ScalarValue};

#[cfg(feature = "fuzz")]
pub mod fuzz {
    use crate::time::{ScalarValue, Wholes};

    /// Whether the storage of a value upholds the representation invariants.
    pub fn is_canonical<W: Wholes>(value: &ScalarValue<W>) -> bool {
        value.fixed_point().is_canonical()
    }
}
