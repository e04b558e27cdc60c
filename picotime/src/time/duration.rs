use core::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use super::{
    text::debug_value, Category, ScalarValue, Wholes, MICROS_PER_SECOND, MILLIS_PER_SECOND,
    NANOS_PER_SECOND, PICOS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::error::{ConversionError, ParseError};

/// A signed span of time, the difference between two
/// [`Moment`](`super::Moment`)s.
///
/// Durations support the full set of arithmetic among themselves: addition,
/// subtraction, negation and scaling by an integer. Values out of range
/// saturate to the infinities and invalid operations produce `NaN`.
///
/// # Example
/// ```
/// # use picotime::time::Duration;
/// let step = Duration::from_millis(250);
/// assert_eq!(step * 4, Duration::from_secs(1));
/// assert_eq!(-step, Duration::new(0, -250_000_000_000));
/// assert!((Duration::MAX + step).is_positive_infinity());
/// ```
#[derive(Default, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Duration<W: Wholes = i64> {
    inner: ScalarValue<W>,
}

impl Duration {
    /// A duration of zero length
    pub const ZERO: Self = Self::from_scalar(ScalarValue::ZERO);
    /// The longest finite duration
    pub const MAX: Self = Self::from_scalar(ScalarValue::MAX);
    /// The most negative finite duration
    pub const MIN: Self = Self::from_scalar(ScalarValue::MIN);
    /// One picosecond
    pub const EPSILON: Self = Self::from_scalar(ScalarValue::EPSILON);
    /// An endless duration
    pub const INFINITY: Self = Self::from_scalar(ScalarValue::INFINITY);
    /// An endless negative duration
    pub const NEG_INFINITY: Self = Self::from_scalar(ScalarValue::NEG_INFINITY);
    /// Not a number
    pub const NAN: Self = Self::from_scalar(ScalarValue::NAN);

    /// Create a duration from whole seconds and picoseconds, see
    /// [`ScalarValue::new`].
    pub fn new(seconds: i64, picos: i64) -> Self {
        Self::from_scalar(ScalarValue::new(seconds, picos))
    }

    /// Create a duration from whole seconds.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::Duration;
    /// assert_eq!(Duration::from_secs(-3).value(), (-3, 0));
    /// assert!(Duration::from_secs(i64::MAX).is_positive_infinity());
    /// ```
    pub fn from_secs(secs: i64) -> Self {
        Self::new(secs, 0)
    }

    /// Create a duration from milliseconds.
    pub fn from_millis(millis: i64) -> Self {
        Self::from_unit(millis, MILLIS_PER_SECOND)
    }

    /// Create a duration from microseconds.
    pub fn from_micros(micros: i64) -> Self {
        Self::from_unit(micros, MICROS_PER_SECOND)
    }

    /// Create a duration from nanoseconds.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::Duration;
    /// assert_eq!(Duration::from_nanos(1_500_000_001).value(), (1, 500_000_001_000));
    /// ```
    pub fn from_nanos(nanos: i64) -> Self {
        Self::from_unit(nanos, NANOS_PER_SECOND)
    }

    /// Create a duration from picoseconds.
    pub fn from_picos(picos: i64) -> Self {
        Self::from_unit(picos, PICOS_PER_SECOND)
    }

    /// Create a duration from minutes, saturating when out of range.
    pub fn from_mins(mins: i64) -> Self {
        Self::from_whole_units(mins, SECONDS_PER_MINUTE)
    }

    /// Create a duration from hours, saturating when out of range.
    pub fn from_hours(hours: i64) -> Self {
        Self::from_whole_units(hours, SECONDS_PER_HOUR)
    }

    /// Create a duration from 24 hour days, saturating when out of range.
    pub fn from_days(days: i64) -> Self {
        Self::from_whole_units(days, SECONDS_PER_DAY)
    }

    /// Create a duration from whole seconds plus a fraction of a second, see
    /// [`ScalarValue::from_fraction`].
    pub fn from_fraction(seconds: i64, numerator: i64, denominator: i64) -> Self {
        Self::from_scalar(ScalarValue::from_fraction(seconds, numerator, denominator))
    }

    /// Create a duration from floating point seconds, see
    /// [`ScalarValue::from_f64`].
    pub fn from_f64(seconds: f64) -> Self {
        Self::from_scalar(ScalarValue::from_f64(seconds))
    }

    /// Create a duration of the given category, zero for [`Category::Num`].
    pub fn from_category(category: Category) -> Self {
        Self::from_scalar(ScalarValue::from_category(category))
    }

    fn from_whole_units(count: i64, seconds_per_unit: i64) -> Self {
        // i64::MIN would read as the NaN sentinel, but it is just a very
        // negative count
        Self::from_secs(count.max(-i64::MAX)) * seconds_per_unit
    }

    fn from_unit(count: i64, per_second: i64) -> Self {
        // The remainder stays below one second, so scaling it up cannot
        // overflow
        let picos = count % per_second * (PICOS_PER_SECOND / per_second);
        Self::new(count / per_second, picos)
    }
}

impl<W: Wholes> Duration<W> {
    /// Label an untyped value as a duration.
    pub const fn from_scalar(inner: ScalarValue<W>) -> Self {
        Self { inner }
    }

    /// The untyped value of this duration
    pub fn as_scalar(&self) -> ScalarValue<W> {
        self.inner
    }

    /// Rewrap with a different storage width, see [`ScalarValue::convert`].
    pub fn convert<V: Wholes>(self) -> Duration<V> {
        Duration::from_scalar(self.inner.convert())
    }

    /// The category of this duration
    pub fn category(&self) -> Category {
        self.inner.category()
    }

    /// Overwrite with a duration of the given category.
    pub fn set_category(&mut self, category: Category) {
        self.inner.set_category(category)
    }

    /// Whether this is a finite number
    pub fn is_number(&self) -> bool {
        self.inner.is_number()
    }

    /// Whether this is `NaN` or an infinity
    pub fn is_special(&self) -> bool {
        self.inner.is_special()
    }

    /// Whether this is `NaN`
    pub fn is_nan(&self) -> bool {
        self.inner.is_nan()
    }

    /// Whether this is either infinity
    pub fn is_infinite(&self) -> bool {
        self.inner.is_infinite()
    }

    /// Whether this is positive infinity
    pub fn is_positive_infinity(&self) -> bool {
        self.inner.is_positive_infinity()
    }

    /// Whether this is negative infinity
    pub fn is_negative_infinity(&self) -> bool {
        self.inner.is_negative_infinity()
    }

    /// Whole seconds. Special values return their canonical sentinel.
    pub fn seconds(&self) -> i64 {
        self.inner.seconds()
    }

    /// Picoseconds within the second
    pub fn subseconds(&self) -> i64 {
        self.inner.subseconds()
    }

    /// The canonical `(seconds, picoseconds)` pair
    pub fn value(&self) -> (i64, i64) {
        self.inner.value()
    }

    /// Approximate as floating point seconds
    pub fn to_seconds_lossy(&self) -> f64 {
        self.inner.to_seconds_lossy()
    }

    /// Whether this is below zero. Negative infinity counts, `NaN` does not.
    pub fn is_negative(&self) -> bool {
        match self.category() {
            Category::Num => self.seconds() < 0 || self.subseconds() < 0,
            Category::NegInf => true,
            Category::NaN | Category::PosInf => false,
        }
    }

    /// Whether this is exactly zero
    pub fn is_zero(&self) -> bool {
        self.is_number() && self.value() == (0, 0)
    }

    /// The magnitude of this duration.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::Duration;
    /// assert_eq!(Duration::new(-1, -5).abs(), Duration::new(1, 5));
    /// assert_eq!(Duration::NEG_INFINITY.abs(), Duration::INFINITY);
    /// assert!(Duration::NAN.abs().is_nan());
    /// ```
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Add one second
    pub fn increment(&mut self) {
        self.inner.increment()
    }

    /// Subtract one second
    pub fn decrement(&mut self) {
        self.inner.decrement()
    }
}

impl<W: Wholes, V: Wholes> PartialEq<Duration<V>> for Duration<W> {
    fn eq(&self, other: &Duration<V>) -> bool {
        self.inner == other.inner
    }
}

impl<W: Wholes, V: Wholes> PartialOrd<Duration<V>> for Duration<W> {
    fn partial_cmp(&self, other: &Duration<V>) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<W: Wholes> Neg for Duration<W> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_scalar(-self.inner)
    }
}

impl<W: Wholes> Add for Duration<W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_scalar(self.inner + rhs.inner)
    }
}

impl<W: Wholes> AddAssign for Duration<W> {
    fn add_assign(&mut self, rhs: Self) {
        self.inner += rhs.inner;
    }
}

impl<W: Wholes> Sub for Duration<W> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_scalar(self.inner - rhs.inner)
    }
}

impl<W: Wholes> SubAssign for Duration<W> {
    fn sub_assign(&mut self, rhs: Self) {
        self.inner -= rhs.inner;
    }
}

macro_rules! duration_mul_impl {
    ($($t:ty),*) => {
        $(
            impl<W: Wholes> Mul<$t> for Duration<W> {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self::Output {
                    Self::from_scalar(self.inner.scaled(i64::from(rhs)))
                }
            }

            impl<W: Wholes> Mul<Duration<W>> for $t {
                type Output = Duration<W>;

                fn mul(self, rhs: Duration<W>) -> Self::Output {
                    rhs * self
                }
            }

            impl<W: Wholes> MulAssign<$t> for Duration<W> {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }
        )*
    };
}

duration_mul_impl!(i8, i16, i32, i64, u8, u16, u32);

impl<W: Wholes> Sum for Duration<W> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a, W: Wholes> Sum<&'a Duration<W>> for Duration<W> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<W: Wholes> fmt::Display for Duration<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<W: Wholes> fmt::Debug for Duration<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_value("Duration", &self.inner, f)
    }
}

impl<W: Wholes> FromStr for Duration<W> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.parse().map(Self::from_scalar)
    }
}

impl From<core::time::Duration> for Duration {
    /// Convert from a standard duration, saturating to infinity when the
    /// seconds are out of range.
    fn from(value: core::time::Duration) -> Self {
        let seconds = i64::try_from(value.as_secs()).unwrap_or(i64::MAX);
        let picos = i64::from(value.subsec_nanos()) * (PICOS_PER_SECOND / NANOS_PER_SECOND);
        Self::new(seconds, picos)
    }
}

impl<W: Wholes> TryFrom<Duration<W>> for core::time::Duration {
    type Error = ConversionError;

    /// Convert into a standard duration, truncating to whole nanoseconds.
    ///
    /// # Example
    /// ```
    /// # use picotime::{time::Duration, ConversionError};
    /// let std = core::time::Duration::try_from(Duration::new(1, 1_999)).unwrap();
    /// assert_eq!(std, core::time::Duration::new(1, 1));
    /// assert_eq!(
    ///     core::time::Duration::try_from(Duration::from_secs(-1)),
    ///     Err(ConversionError::Negative)
    /// );
    /// ```
    fn try_from(value: Duration<W>) -> Result<Self, Self::Error> {
        match value.category() {
            Category::NaN => Err(ConversionError::NotANumber),
            Category::NegInf | Category::PosInf => Err(ConversionError::Infinite),
            Category::Num => {
                let (seconds, picos) = value.value();
                if seconds < 0 || picos < 0 {
                    return Err(ConversionError::Negative);
                }

                let nanos = picos / (PICOS_PER_SECOND / NANOS_PER_SECOND);
                Ok(core::time::Duration::new(seconds as u64, nanos as u32))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: i64 = PICOS_PER_SECOND;

    #[test]
    fn unit_constructors() {
        assert_eq!(Duration::from_millis(1500).value(), (1, P / 2));
        assert_eq!(Duration::from_micros(-1).value(), (0, -1_000_000));
        assert_eq!(Duration::from_nanos(-1_000_000_001).value(), (-1, -1_000));
        assert_eq!(Duration::from_picos(P + 3).value(), (1, 3));
        assert_eq!(Duration::from_mins(2), Duration::from_secs(120));
        assert_eq!(Duration::from_hours(1), Duration::from_secs(3600));
        assert_eq!(Duration::from_days(-1), Duration::from_secs(-86_400));

        assert_eq!(
            Duration::from_nanos(i64::MIN).value(),
            (-9_223_372_036, -854_775_808_000)
        );
        assert!(Duration::from_days(i64::MAX / 2).is_positive_infinity());
        assert!(Duration::from_hours(i64::MIN / 2).is_negative_infinity());

        assert!(Duration::from_mins(i64::MIN).is_negative_infinity());
        assert!(Duration::from_hours(i64::MIN).is_negative_infinity());
        assert!(Duration::from_days(i64::MIN).is_negative_infinity());
        assert!(Duration::from_days(i64::MAX).is_positive_infinity());
    }

    #[test]
    fn constants() {
        assert!(Duration::ZERO.is_zero());
        assert_eq!(Duration::MIN, -Duration::MAX);
        assert_eq!(Duration::EPSILON, Duration::from_picos(1));
        assert!(Duration::NAN.is_nan());
        assert!(Duration::INFINITY > Duration::MAX);
        assert!(Duration::NEG_INFINITY < Duration::MIN);
        assert!(Duration::from_category(Category::NaN).is_nan());
    }

    #[test]
    fn arithmetic() {
        let a = Duration::new(1, P / 2);
        let b = Duration::from_millis(250);

        assert_eq!(a + b, Duration::new(1, P / 4 * 3));
        assert_eq!(a - b, Duration::new(1, P / 4));
        assert_eq!(b - a, Duration::new(-1, -P / 4));
        assert_eq!(-a, Duration::new(-1, -P / 2));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);

        c.increment();
        assert_eq!(c, Duration::new(1, P / 4));
        c.decrement();
        c.decrement();
        assert_eq!(c, Duration::new(-1, P / 4 * 3));
    }

    #[test]
    fn scaling() {
        let d = Duration::from_secs(2);
        assert_eq!(d * 3, Duration::from_secs(6));
        assert_eq!(3 * d, Duration::from_secs(6));
        assert_eq!(d * -3i8, Duration::from_secs(-6));
        assert_eq!(d * 3u8, Duration::from_secs(6));
        assert_eq!(d * 3u32, Duration::from_secs(6));
        assert_eq!(d * 0i16, Duration::ZERO);
        assert_eq!(Duration::INFINITY * 0, Duration::ZERO);
        assert!((Duration::NEG_INFINITY * -3i32).is_negative_infinity());

        assert_eq!(
            Duration::new(0, 1) * i64::MAX,
            Duration::new(9_223_372, 36_854_775_807)
        );

        let mut e = Duration::from_millis(500);
        e *= 5;
        assert_eq!(e, Duration::new(2, P / 2));
        e *= 2u16;
        assert_eq!(e, Duration::from_secs(5));
    }

    #[test]
    fn sum() {
        let parts = [
            Duration::from_millis(400),
            Duration::from_millis(700),
            Duration::from_secs(1),
        ];
        assert_eq!(parts.iter().sum::<Duration>(), Duration::new(2, P / 10));
        assert_eq!(parts.into_iter().sum::<Duration>(), Duration::new(2, P / 10));

        let empty: [Duration; 0] = [];
        assert!(empty.iter().sum::<Duration>().is_zero());

        let with_nan = [Duration::from_secs(1), Duration::NAN];
        assert!(with_nan.iter().sum::<Duration>().is_nan());
    }

    #[test]
    fn sign_queries() {
        assert!(Duration::new(0, -1).is_negative());
        assert!(!Duration::ZERO.is_negative());
        assert!(Duration::NEG_INFINITY.is_negative());
        assert!(!Duration::NAN.is_negative());
        assert!(!Duration::NAN.is_zero());
        assert_eq!(Duration::new(0, -7).abs(), Duration::new(0, 7));
        assert_eq!(Duration::MIN.abs(), Duration::MAX);
    }

    #[test]
    fn core_duration() {
        let std = core::time::Duration::new(3, 7);
        assert_eq!(Duration::from(std).value(), (3, 7_000));
        assert_eq!(core::time::Duration::try_from(Duration::from(std)), Ok(std));

        assert!(Duration::from(core::time::Duration::MAX).is_positive_infinity());

        assert_eq!(
            core::time::Duration::try_from(Duration::new(0, -1)),
            Err(ConversionError::Negative)
        );
        assert_eq!(
            core::time::Duration::try_from(Duration::INFINITY),
            Err(ConversionError::Infinite)
        );
        assert_eq!(
            core::time::Duration::try_from(Duration::NAN),
            Err(ConversionError::NotANumber)
        );
        assert_eq!(
            core::time::Duration::try_from(Duration::from_secs(5).convert::<i32>()),
            Ok(core::time::Duration::from_secs(5))
        );
    }

    #[test]
    fn widths() {
        let narrow: Duration<i16> = Duration::from_secs(30_000).convert();
        assert_eq!(narrow, Duration::from_secs(30_000));
        assert!((narrow + narrow).is_positive_infinity());
        assert!((narrow * 2i32).is_positive_infinity());
        assert!((narrow * -2i32).is_negative_infinity());
        assert_eq!((narrow - narrow).convert::<i64>(), Duration::ZERO);
    }

    #[cfg(feature = "std")]
    #[test]
    fn text() {
        use std::{format, string::ToString};

        assert_eq!(Duration::from_millis(-1500).to_string(), "-1.500000000000s");
        assert_eq!(
            format!("{:?}", Duration::from_secs(1)),
            "Duration { category: Num, seconds: 1, picos: 0 }"
        );

        let parsed: Duration = "+2.25s".parse().unwrap();
        assert_eq!(parsed, Duration::new(2, P / 4));
        assert_eq!("x".parse::<Duration>(), Err(ParseError::InvalidSeconds));
    }
}
