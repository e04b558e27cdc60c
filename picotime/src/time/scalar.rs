use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[allow(unused_imports)]
use crate::float_polyfill::FloatPolyfill;

use super::{
    arith::{add_with_carry, div128, mul128},
    combine, Category, FixedPoint, Wholes, PICOS_PER_SECOND,
};

/// Largest finite canonical seconds
const MAX_SECONDS: i64 = <i64 as Wholes>::MAX;

/// An untyped time value: whole seconds plus picoseconds, or one of the
/// special values `NaN`, `+Inf` and `-Inf`.
///
/// This is the shared core of [`Duration`](`super::Duration`) and
/// [`Moment`](`super::Moment`). It allows every operation; the wrappers only
/// expose the ones that make sense for them.
///
/// Comparisons follow floating point rules: `NaN` is unordered and unequal to
/// everything, itself included.
///
/// Constructors live on the canonical `i64` width. Values with narrower
/// storage are made with [`convert`](`Self::convert`) or
/// [`from_fixed_point`](`Self::from_fixed_point`).
#[derive(Default, Clone, Copy)]
pub struct ScalarValue<W: Wholes = i64> {
    repr: FixedPoint<W>,
}

impl ScalarValue {
    /// Zero seconds
    pub const ZERO: Self = Self::from_fixed_point(FixedPoint::from_raw(0, 0));
    /// The largest finite value
    pub const MAX: Self =
        Self::from_fixed_point(FixedPoint::from_raw(MAX_SECONDS, PICOS_PER_SECOND - 1));
    /// The smallest finite value, the exact negation of [`MAX`](`Self::MAX`)
    pub const MIN: Self =
        Self::from_fixed_point(FixedPoint::from_raw(-MAX_SECONDS, -(PICOS_PER_SECOND - 1)));
    /// One picosecond
    pub const EPSILON: Self = Self::from_fixed_point(FixedPoint::from_raw(0, 1));
    /// Positive infinity
    pub const INFINITY: Self = Self::from_fixed_point(FixedPoint::special(Category::PosInf));
    /// Negative infinity
    pub const NEG_INFINITY: Self = Self::from_fixed_point(FixedPoint::special(Category::NegInf));
    /// Not a number
    pub const NAN: Self = Self::from_fixed_point(FixedPoint::special(Category::NaN));

    /// Create a value from whole seconds and picoseconds.
    ///
    /// Picoseconds take on the sign of negative seconds, whole seconds in
    /// the picoseconds are carried over and out of range values saturate.
    /// Positive seconds with negative picoseconds produce `NaN`.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::ScalarValue;
    /// assert_eq!(ScalarValue::new(-1, 5).value(), (-1, -5));
    /// assert_eq!(ScalarValue::new(0, 1_000_000_000_000), ScalarValue::new(1, 0));
    /// assert!(ScalarValue::new(1, -1).is_nan());
    /// ```
    pub fn new(seconds: i64, picos: i64) -> Self {
        Self::from_fixed_point(FixedPoint::new(seconds, picos))
    }

    /// Create a value from whole seconds
    pub fn from_seconds(seconds: i64) -> Self {
        Self::new(seconds, 0)
    }

    /// Create a value from whole seconds plus a fraction of a second.
    ///
    /// The fraction is converted to picoseconds with truncation. A zero
    /// denominator, or a fraction too large to express in picoseconds,
    /// produces `NaN`.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::ScalarValue;
    /// assert_eq!(ScalarValue::from_fraction(1, 1, 2), ScalarValue::new(1, 500_000_000_000));
    /// assert!(ScalarValue::from_fraction(1, 1, 0).is_nan());
    /// ```
    pub fn from_fraction(seconds: i64, numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::NAN;
        }

        let picos = numerator as i128 * PICOS_PER_SECOND as i128 / denominator as i128;
        match i64::try_from(picos) {
            Ok(picos) => Self::new(seconds, picos),
            Err(_) => Self::NAN,
        }
    }

    /// Create a value from floating point seconds.
    ///
    /// This is imprecise and slow, it is meant for convenience only. The
    /// float is truncated into whole and fractional seconds separately.
    /// Float infinities and values out of range map to the infinities, a
    /// float `NaN` maps to `NaN`.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::ScalarValue;
    /// assert_eq!(ScalarValue::from_f64(1.5), ScalarValue::new(1, 500_000_000_000));
    /// assert_eq!(ScalarValue::from_f64(-1.25), ScalarValue::new(-1, 250_000_000_000));
    /// ```
    pub fn from_f64(seconds: f64) -> Self {
        // Below this, truncation cannot land inside the finite range
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;

        if seconds.is_nan() {
            return Self::NAN;
        }

        let whole = seconds.trunc();
        if whole >= LIMIT {
            return Self::INFINITY;
        } else if whole <= -LIMIT {
            return Self::NEG_INFINITY;
        }

        let picos = seconds.fract() * PICOS_PER_SECOND as f64;
        Self::new(whole as i64, picos as i64)
    }

    /// Create a value of the given category, zero for [`Category::Num`].
    pub fn from_category(category: Category) -> Self {
        let mut value = Self::ZERO;
        value.set_category(category);
        value
    }
}

impl<W: Wholes> ScalarValue<W> {
    /// Wrap stored values.
    pub const fn from_fixed_point(repr: FixedPoint<W>) -> Self {
        Self { repr }
    }

    /// The underlying storage
    pub fn fixed_point(&self) -> &FixedPoint<W> {
        &self.repr
    }

    /// Rewrap this value with a different storage width.
    ///
    /// Values outside the range of the new width saturate to infinity.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::ScalarValue;
    /// let narrow = ScalarValue::from_seconds(40_000).convert::<i16>();
    /// assert!(narrow.is_positive_infinity());
    /// assert_eq!(narrow.convert::<i64>(), ScalarValue::INFINITY);
    /// ```
    pub fn convert<V: Wholes>(self) -> ScalarValue<V> {
        let (seconds, picos) = self.value();
        ScalarValue::from_fixed_point(FixedPoint::new(seconds, picos))
    }

    pub(crate) fn from_parts(seconds: i64, picos: i64) -> Self {
        Self::from_fixed_point(FixedPoint::new(seconds, picos))
    }

    pub(crate) fn from_special(category: Category) -> Self {
        Self::from_fixed_point(FixedPoint::special(category))
    }

    pub(crate) fn from_normalized(seconds: i64, picos: i64) -> Self {
        Self::from_fixed_point(FixedPoint::normalized(seconds, picos))
    }

    /// The category of this value
    pub fn category(&self) -> Category {
        self.repr.category()
    }

    /// Overwrite this value with one of the given category.
    ///
    /// Writing [`Category::Num`] resets the value to zero.
    pub fn set_category(&mut self, category: Category) {
        self.repr.set_category(category)
    }

    /// Whether this is a finite number
    pub fn is_number(&self) -> bool {
        self.category().is_number()
    }

    /// Whether this is `NaN` or an infinity
    pub fn is_special(&self) -> bool {
        !self.is_number()
    }

    /// Whether this is `NaN`
    pub fn is_nan(&self) -> bool {
        self.category() == Category::NaN
    }

    /// Whether this is either infinity
    pub fn is_infinite(&self) -> bool {
        self.category().is_infinite()
    }

    /// Whether this is positive infinity
    pub fn is_positive_infinity(&self) -> bool {
        self.category() == Category::PosInf
    }

    /// Whether this is negative infinity
    pub fn is_negative_infinity(&self) -> bool {
        self.category() == Category::NegInf
    }

    /// Whole seconds. Special values return their canonical sentinel.
    pub fn seconds(&self) -> i64 {
        self.repr.seconds()
    }

    /// Picoseconds within the second, with the same sign as the seconds.
    pub fn subseconds(&self) -> i64 {
        self.repr.subseconds()
    }

    /// The canonical `(seconds, picoseconds)` pair
    pub fn value(&self) -> (i64, i64) {
        self.repr.value()
    }

    /// Approximate this value as floating point seconds.
    ///
    /// The special values map onto their floating point counterparts.
    pub fn to_seconds_lossy(&self) -> f64 {
        match self.category() {
            Category::Num => {
                let (seconds, picos) = self.value();
                seconds as f64 + picos as f64 / PICOS_PER_SECOND as f64
            }
            Category::NaN => f64::NAN,
            Category::NegInf => f64::NEG_INFINITY,
            Category::PosInf => f64::INFINITY,
        }
    }

    /// Add one second
    pub fn increment(&mut self) {
        *self += Self::from_parts(1, 0);
    }

    /// Subtract one second
    pub fn decrement(&mut self) {
        *self += Self::from_parts(-1, 0);
    }

    fn sum(self, rhs: Self) -> Self {
        let left = self.category();
        let right = rhs.category();
        if !left.is_number() || !right.is_number() {
            let category = combine(left, right);
            if category == Category::NaN && left != Category::NaN && right != Category::NaN {
                log::trace!("Adding opposite infinities, result is NaN");
            }
            return Self::from_special(category);
        }

        let (left_seconds, left_picos) = self.value();
        let (right_seconds, right_picos) = rhs.value();

        // Both halves are below one second in magnitude, this cannot overflow
        let picos = left_picos + right_picos;

        let (seconds, carry) = add_with_carry(left_seconds, right_seconds);
        if carry > 0 || seconds > MAX_SECONDS {
            // Exceeding the range needs two positive operands, so the
            // picoseconds cannot bring the sum back down.
            log::trace!("Addition overflowed, saturating to +Inf");
            return Self::from_special(Category::PosInf);
        } else if carry < 0 || seconds < -MAX_SECONDS {
            log::trace!("Addition underflowed, saturating to -Inf");
            return Self::from_special(Category::NegInf);
        }

        // The seconds may disagree in sign with the picoseconds here, which
        // normalization settles by moving a second across.
        Self::from_normalized(seconds, picos)
    }

    /// Multiply by an integer.
    ///
    /// Multiplying by zero always gives zero. Otherwise special values are
    /// left as they are, and results out of range saturate to the correctly
    /// signed infinity. The picoseconds are scaled through a 128 bit
    /// intermediate, so no precision is lost.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::ScalarValue;
    /// let pico = ScalarValue::new(0, 1);
    /// assert_eq!(pico.scaled(i64::MAX), ScalarValue::new(9_223_372, 36_854_775_807));
    /// assert_eq!(ScalarValue::INFINITY.scaled(0), ScalarValue::ZERO);
    /// ```
    pub fn scaled(self, factor: i64) -> Self {
        if factor == 0 {
            return Self::from_parts(0, 0);
        }
        if self.is_special() {
            return self;
        }

        let (seconds, picos) = self.value();
        let saturated = if (seconds < 0 || picos < 0) == (factor < 0) {
            Category::PosInf
        } else {
            Category::NegInf
        };

        let Some(seconds) = seconds.checked_mul(factor) else {
            log::trace!("Multiplication overflowed, saturating to {saturated}");
            return Self::from_special(saturated);
        };

        let (hi, lo) = mul128(picos, factor);
        // |picos| < 10^12, so the quotient is always smaller than |factor|
        let Some((carried, picos)) = div128(hi, lo, PICOS_PER_SECOND) else {
            return Self::from_special(Category::NaN);
        };

        // Both halves were scaled separately, so they have to agree in sign
        // again. Canonical values always do; this catches storage whose
        // halves already disagreed.
        if (seconds > 0 && picos < 0) || (seconds < 0 && picos > 0) {
            log::trace!("Scaled halves disagree in sign, result is NaN");
            return Self::from_special(Category::NaN);
        }

        let (seconds, carry) = add_with_carry(seconds, carried);
        if carry != 0 || !(-MAX_SECONDS..=MAX_SECONDS).contains(&seconds) {
            log::trace!("Multiplication overflowed, saturating to {saturated}");
            return Self::from_special(saturated);
        }

        Self::from_normalized(seconds, picos)
    }
}

impl<W: Wholes, V: Wholes> PartialEq<ScalarValue<V>> for ScalarValue<W> {
    fn eq(&self, other: &ScalarValue<V>) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<W: Wholes, V: Wholes> PartialOrd<ScalarValue<V>> for ScalarValue<W> {
    fn partial_cmp(&self, other: &ScalarValue<V>) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }

        // The infinity sentinels sit beyond every finite seconds value and
        // carry no picoseconds, so plain lexicographic order is correct.
        Some(self.value().cmp(&other.value()))
    }
}

impl<W: Wholes> Neg for ScalarValue<W> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.category() {
            Category::Num => {
                let (seconds, picos) = self.value();
                Self::from_parts(-seconds, -picos)
            }
            Category::NaN => self,
            Category::NegInf => Self::from_special(Category::PosInf),
            Category::PosInf => Self::from_special(Category::NegInf),
        }
    }
}

impl<W: Wholes> Add for ScalarValue<W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(rhs)
    }
}

impl<W: Wholes> AddAssign for ScalarValue<W> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.sum(rhs);
    }
}

impl<W: Wholes> Sub for ScalarValue<W> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sum(-rhs)
    }
}

impl<W: Wholes> SubAssign for ScalarValue<W> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.sum(-rhs);
    }
}

impl<W: Wholes> Mul<i64> for ScalarValue<W> {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.scaled(rhs)
    }
}

impl<W: Wholes> MulAssign<i64> for ScalarValue<W> {
    fn mul_assign(&mut self, rhs: i64) {
        *self = self.scaled(rhs);
    }
}

#[cfg(feature = "serde")]
impl<W: Wholes> serde::Serialize for ScalarValue<W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, W: Wholes> serde::Deserialize<'de> for ScalarValue<W> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (seconds, picos) = <(i64, i64) as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_parts(seconds, picos))
    }
}
