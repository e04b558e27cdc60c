use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use super::{text::debug_value, Category, Duration, ScalarValue, Wholes};
use crate::error::ParseError;

/// An absolute point on the time line, stored as its offset from an implicit
/// epoch.
///
/// Moments can be shifted by a [`Duration`], and the distance between two
/// moments is a [`Duration`]. Everything else is rejected by the compiler:
///
/// Adding two moments
/// ```compile_fail
/// # use picotime::time::Moment;
/// let _ = Moment::from_secs(1) + Moment::from_secs(2);
/// ```
///
/// Negating a moment
/// ```compile_fail
/// # use picotime::time::Moment;
/// let _ = -Moment::from_secs(1);
/// ```
///
/// Scaling a moment
/// ```compile_fail
/// # use picotime::time::Moment;
/// let _ = Moment::from_secs(1) * 2;
/// ```
///
/// Subtracting a moment from a duration
/// ```compile_fail
/// # use picotime::time::{Duration, Moment};
/// let _ = Duration::from_secs(1) - Moment::from_secs(2);
/// ```
///
/// Using a duration as a moment, or a moment as a duration
/// ```compile_fail
/// # use picotime::time::{Duration, Moment};
/// let _: Moment = Duration::from_secs(1);
/// ```
/// ```compile_fail
/// # use picotime::time::{Duration, Moment};
/// let _: Duration = Moment::from_secs(1);
/// ```
///
/// # Example
/// ```
/// # use picotime::time::{Duration, Moment};
/// let start = Moment::from_secs(100);
/// let later = start + Duration::from_millis(20);
/// assert_eq!(Duration::from_millis(20) + start, later);
/// assert_eq!(later - start, Duration::from_millis(20));
/// assert_eq!(later - Duration::from_millis(20), start);
/// ```
#[derive(Default, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Moment<W: Wholes = i64> {
    inner: ScalarValue<W>,
}

impl Moment {
    /// The epoch, the origin of the time line
    pub const EPOCH: Self = Self::from_scalar(ScalarValue::ZERO);
    /// Same as [`EPOCH`](`Self::EPOCH`)
    pub const ZERO: Self = Self::EPOCH;
    /// The last finite moment
    pub const MAX: Self = Self::from_scalar(ScalarValue::MAX);
    /// The first finite moment
    pub const MIN: Self = Self::from_scalar(ScalarValue::MIN);
    /// One picosecond after the epoch
    pub const EPSILON: Self = Self::from_scalar(ScalarValue::EPSILON);
    /// After every finite moment
    pub const INFINITY: Self = Self::from_scalar(ScalarValue::INFINITY);
    /// Before every finite moment
    pub const NEG_INFINITY: Self = Self::from_scalar(ScalarValue::NEG_INFINITY);
    /// Not a number
    pub const NAN: Self = Self::from_scalar(ScalarValue::NAN);

    /// Create a moment from whole seconds and picoseconds since the epoch,
    /// see [`ScalarValue::new`].
    pub fn new(seconds: i64, picos: i64) -> Self {
        Self::from_scalar(ScalarValue::new(seconds, picos))
    }

    /// Create a moment from whole seconds since the epoch
    pub fn from_secs(secs: i64) -> Self {
        Self::new(secs, 0)
    }

    /// Create a moment from seconds plus a fraction of a second since the
    /// epoch, see [`ScalarValue::from_fraction`].
    pub fn from_fraction(seconds: i64, numerator: i64, denominator: i64) -> Self {
        Self::from_scalar(ScalarValue::from_fraction(seconds, numerator, denominator))
    }

    /// Create a moment from floating point seconds since the epoch, see
    /// [`ScalarValue::from_f64`].
    pub fn from_f64(seconds: f64) -> Self {
        Self::from_scalar(ScalarValue::from_f64(seconds))
    }

    /// Create a moment of the given category, the epoch for
    /// [`Category::Num`].
    pub fn from_category(category: Category) -> Self {
        Self::from_scalar(ScalarValue::from_category(category))
    }
}

impl<W: Wholes> Moment<W> {
    /// Label an untyped value as a moment.
    pub const fn from_scalar(inner: ScalarValue<W>) -> Self {
        Self { inner }
    }

    /// The untyped value of this moment
    pub fn as_scalar(&self) -> ScalarValue<W> {
        self.inner
    }

    /// The moment that lies the given duration after the epoch.
    pub fn from_since_epoch(offset: Duration<W>) -> Self {
        Self::from_scalar(offset.as_scalar())
    }

    /// The duration between the epoch and this moment.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::{Duration, Moment};
    /// assert_eq!(Moment::from_secs(-2).since_epoch(), Duration::from_secs(-2));
    /// assert_eq!(Moment::EPOCH.since_epoch(), Duration::ZERO);
    /// ```
    pub fn since_epoch(&self) -> Duration<W> {
        Duration::from_scalar(self.inner)
    }

    /// Rewrap with a different storage width, see [`ScalarValue::convert`].
    pub fn convert<V: Wholes>(self) -> Moment<V> {
        Moment::from_scalar(self.inner.convert())
    }

    /// The category of this moment
    pub fn category(&self) -> Category {
        self.inner.category()
    }

    /// Overwrite with a moment of the given category.
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

    /// Whole seconds since the epoch
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

    /// Approximate as floating point seconds since the epoch
    pub fn to_seconds_lossy(&self) -> f64 {
        self.inner.to_seconds_lossy()
    }

    /// Move one second forward
    pub fn increment(&mut self) {
        self.inner.increment()
    }

    /// Move one second back
    pub fn decrement(&mut self) {
        self.inner.decrement()
    }
}

impl<W: Wholes, V: Wholes> PartialEq<Moment<V>> for Moment<W> {
    fn eq(&self, other: &Moment<V>) -> bool {
        self.inner == other.inner
    }
}

impl<W: Wholes, V: Wholes> PartialOrd<Moment<V>> for Moment<W> {
    fn partial_cmp(&self, other: &Moment<V>) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<W: Wholes> Add<Duration<W>> for Moment<W> {
    type Output = Self;

    fn add(self, rhs: Duration<W>) -> Self::Output {
        Self::from_scalar(self.inner + rhs.as_scalar())
    }
}

impl<W: Wholes> Add<Moment<W>> for Duration<W> {
    type Output = Moment<W>;

    fn add(self, rhs: Moment<W>) -> Self::Output {
        rhs + self
    }
}

impl<W: Wholes> AddAssign<Duration<W>> for Moment<W> {
    fn add_assign(&mut self, rhs: Duration<W>) {
        self.inner += rhs.as_scalar();
    }
}

impl<W: Wholes> Sub<Duration<W>> for Moment<W> {
    type Output = Self;

    fn sub(self, rhs: Duration<W>) -> Self::Output {
        Self::from_scalar(self.inner - rhs.as_scalar())
    }
}

impl<W: Wholes> SubAssign<Duration<W>> for Moment<W> {
    fn sub_assign(&mut self, rhs: Duration<W>) {
        self.inner -= rhs.as_scalar();
    }
}

impl<W: Wholes> Sub for Moment<W> {
    type Output = Duration<W>;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration::from_scalar(self.inner - rhs.inner)
    }
}

impl<W: Wholes> fmt::Display for Moment<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<W: Wholes> fmt::Debug for Moment<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_value("Moment", &self.inner, f)
    }
}

impl<W: Wholes> FromStr for Moment<W> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.parse().map(Self::from_scalar)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use serde_test::{assert_tokens, Token};

    use super::*;

    #[test]
    fn tokens() {
        assert_tokens(
            &Moment::new(7, 3),
            &[
                Token::Tuple { len: 2 },
                Token::I64(7),
                Token::I64(3),
                Token::TupleEnd,
            ],
        );
    }

    #[test]
    fn json() {
        let value = Moment::NEG_INFINITY;
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, "[-9223372036854775807,0]");
        assert_eq!(serde_json::from_str::<Moment>(&text).unwrap(), value);

        let narrow: Moment<i16> = serde_json::from_str("[40000,0]").unwrap();
        assert!(narrow.is_positive_infinity());
    }
}
