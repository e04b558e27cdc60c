//! Errors of the conversion surfaces.
//!
//! Arithmetic itself never fails, invalid results are represented by `NaN`.
//! Only parsing text and converting into types without special values can
//! go wrong.

/// Failure to parse a time value from text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ParseError {
    /// There was nothing to parse
    #[cfg_attr(feature = "std", error("empty time value"))]
    Empty,
    /// The whole seconds were missing or not decimal digits
    #[cfg_attr(feature = "std", error("invalid whole seconds"))]
    InvalidSeconds,
    /// The fraction after the decimal point was missing or not decimal digits
    #[cfg_attr(feature = "std", error("invalid fraction of a second"))]
    InvalidFraction,
    /// The fraction had more than twelve digits
    #[cfg_attr(feature = "std", error("fraction is more precise than a picosecond"))]
    FractionTooPrecise,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => f.write_str("empty time value"),
            Self::InvalidSeconds => f.write_str("invalid whole seconds"),
            Self::InvalidFraction => f.write_str("invalid fraction of a second"),
            Self::FractionTooPrecise => f.write_str("fraction is more precise than a picosecond"),
        }
    }
}

/// Failure to convert a [`Duration`](`crate::time::Duration`) into
/// [`core::time::Duration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ConversionError {
    /// The duration was below zero
    #[cfg_attr(feature = "std", error("duration is negative"))]
    Negative,
    /// The duration was infinite
    #[cfg_attr(feature = "std", error("duration is infinite"))]
    Infinite,
    /// The duration was not a number
    #[cfg_attr(feature = "std", error("duration is not a number"))]
    NotANumber,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Negative => f.write_str("duration is negative"),
            Self::Infinite => f.write_str("duration is infinite"),
            Self::NotANumber => f.write_str("duration is not a number"),
        }
    }
}
