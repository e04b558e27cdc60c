//! Types that describe points in time ([`Moment`]), and spans between two
//! points in time ([`Duration`]), on top of a shared untyped core
//! ([`ScalarValue`]).
//!
//! All values are exposed canonically as a pair of whole seconds and
//! picoseconds, where the picoseconds always carry the sign of the seconds.

pub mod arith;
mod category;
mod duration;
mod moment;
mod repr;
mod scalar;
mod text;

pub use category::{combine, Category, Wholes};
pub use duration::Duration;
pub use moment::Moment;
pub use repr::FixedPoint;
pub use scalar::ScalarValue;

/// Picoseconds in a second, the base of the fractional part
pub const PICOS_PER_SECOND: i64 = 1_000_000_000_000;
/// Nanoseconds in a second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Microseconds in a second
pub const MICROS_PER_SECOND: i64 = 1_000_000;
/// Milliseconds in a second
pub const MILLIS_PER_SECOND: i64 = 1_000;

// Idealized units, there are no leap anythings on this time scale.

/// Seconds in a minute
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds in an hour
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
/// Seconds in a day
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
/// Seconds in a 365 day year
pub const SECONDS_PER_YEAR: i64 = SECONDS_PER_DAY * 365;
