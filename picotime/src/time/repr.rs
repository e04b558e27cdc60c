use super::{Category, Wholes, PICOS_PER_SECOND};

/// Storage for a time value: a count of whole seconds and a count of
/// picoseconds within the second.
///
/// The fractions always share the sign of the wholes, or one of the two is
/// zero, and their magnitude is always below one full second. Whatever the
/// width of the wholes, the value is presented as canonical `i64` seconds and
/// `i64` picoseconds.
///
/// Only a one-to-one ratio between wholes and seconds is supported, and the
/// fractions are always picoseconds. Narrower wholes simply saturate sooner.
///
/// This type does no arithmetic; it only normalizes what is written to it.
/// Equality on it is equality of the stored bits, use [`ScalarValue`] for
/// numeric comparisons.
///
/// [`ScalarValue`]: super::ScalarValue
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPoint<W: Wholes = i64> {
    wholes: W,
    fractions: i64,
}

impl<W: Wholes> FixedPoint<W> {
    /// Create from seconds and picoseconds.
    ///
    /// Picoseconds without a sign take on the sign of negative seconds. Full
    /// seconds in the picoseconds are carried over, and out of range values
    /// saturate to the infinities. Positive seconds with negative picoseconds
    /// are a contradiction and produce `NaN`.
    pub fn new(seconds: i64, picos: i64) -> Self {
        let mut seconds = seconds;
        let mut picos = picos;

        if seconds < 0 && picos > 0 {
            picos = -picos;
        } else if seconds > 0 && picos < 0 {
            log::trace!("Conflicting signs {seconds}s and {picos}ps, storing NaN");
            seconds = <i64 as Wholes>::NAN;
        }

        Self::normalized(seconds, picos)
    }

    /// Create from seconds and picoseconds that may be out of range or
    /// disagree in sign, but that together denote the intended value.
    ///
    /// Unlike [`new`](`Self::new`), this never reinterprets the sign of the
    /// picoseconds: a disagreement is settled by moving one second across.
    pub(crate) fn normalized(seconds: i64, picos: i64) -> Self {
        let category = Category::classify(seconds);
        if !category.is_number() {
            return Self::special(category);
        }

        let mut seconds = seconds;
        let mut picos = picos;

        if picos <= -PICOS_PER_SECOND || picos >= PICOS_PER_SECOND {
            seconds = seconds.saturating_add(picos / PICOS_PER_SECOND);
            picos %= PICOS_PER_SECOND;
        }

        if seconds > 0 && picos < 0 {
            seconds -= 1;
            picos += PICOS_PER_SECOND;
        } else if seconds < 0 && picos > 0 {
            seconds += 1;
            picos -= PICOS_PER_SECOND;
        }

        let result = if seconds > W::MAX.to_seconds() {
            Self::special(Category::PosInf)
        } else if seconds < W::MIN.to_seconds() {
            Self::special(Category::NegInf)
        } else {
            Self {
                wholes: W::from_seconds(seconds),
                fractions: picos,
            }
        };

        debug_assert!(result.is_canonical());
        result
    }

    /// Create from already valid storage values, without any checks.
    pub(crate) const fn from_raw(wholes: W, fractions: i64) -> Self {
        Self { wholes, fractions }
    }

    /// The stored value of a special category, or zero for
    /// [`Category::Num`].
    pub(crate) const fn special(category: Category) -> Self {
        let wholes = match category {
            Category::Num => W::ZERO,
            Category::NaN => W::NAN,
            Category::NegInf => W::NEG_INFINITY,
            Category::PosInf => W::POS_INFINITY,
        };
        Self::from_raw(wholes, 0)
    }

    /// Whole seconds, with the special values widened to the canonical
    /// sentinels.
    pub fn seconds(&self) -> i64 {
        self.wholes.to_seconds()
    }

    /// Picoseconds within the second.
    pub fn subseconds(&self) -> i64 {
        self.fractions
    }

    /// The canonical `(seconds, picoseconds)` pair.
    pub fn value(&self) -> (i64, i64) {
        (self.seconds(), self.subseconds())
    }

    /// Replace the seconds, keeping the picoseconds.
    pub fn set_seconds(&mut self, seconds: i64) {
        *self = Self::new(seconds, self.fractions);
    }

    /// Replace the picoseconds, keeping the seconds.
    pub fn set_subseconds(&mut self, picos: i64) {
        *self = Self::new(self.seconds(), picos);
    }

    /// Replace both halves.
    pub fn set_value(&mut self, seconds: i64, picos: i64) {
        *self = Self::new(seconds, picos);
    }

    /// The category encoded by the wholes.
    pub fn category(&self) -> Category {
        Category::classify(self.seconds())
    }

    /// Overwrite with a value of the given category.
    ///
    /// Writing [`Category::Num`] resets to zero.
    pub fn set_category(&mut self, category: Category) {
        *self = match category {
            Category::Num => Self::default(),
            // Positive seconds with negative picoseconds, the canonical
            // contradiction.
            Category::NaN => Self::new(1, -1),
            infinity => Self::special(infinity),
        };
    }

    /// Raw stored wholes.
    pub fn wholes(&self) -> W {
        self.wholes
    }

    /// Raw stored fractions.
    pub fn fractions(&self) -> i64 {
        self.fractions
    }

    /// Whether either half is below zero.
    pub fn is_negative(&self) -> bool {
        self.wholes < W::ZERO || self.fractions < 0
    }

    /// Whether the storage invariants hold: the fractions are below one
    /// second and agree in sign with the wholes, and special values carry no
    /// fractions.
    pub(crate) fn is_canonical(&self) -> bool {
        let seconds = self.seconds();
        let picos = self.fractions;

        if !self.category().is_number() {
            return picos == 0;
        }

        picos.unsigned_abs() < PICOS_PER_SECOND as u64
            && !(seconds > 0 && picos < 0)
            && !(seconds < 0 && picos > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: i64 = PICOS_PER_SECOND;
    const MAX: i64 = <i64 as Wholes>::MAX;

    #[test]
    fn zero() {
        let zero = FixedPoint::<i64>::default();
        assert_eq!(zero.value(), (0, 0));
        assert_eq!(zero.category(), Category::Num);
        assert!(!zero.is_negative());
    }

    #[test]
    fn picos_take_sign_of_negative_seconds() {
        assert_eq!(FixedPoint::<i64>::new(-1, 5).value(), (-1, -5));
        assert_eq!(FixedPoint::<i64>::new(-1, -5).value(), (-1, -5));
        assert_eq!(FixedPoint::<i64>::new(0, -5).value(), (0, -5));
    }

    #[test]
    fn conflicting_signs_are_invalid() {
        let value = FixedPoint::<i64>::new(1, -1);
        assert_eq!(value.category(), Category::NaN);
        assert_eq!(value.subseconds(), 0);
    }

    #[test]
    fn rollover() {
        assert_eq!(FixedPoint::<i64>::new(0, P).value(), (1, 0));
        assert_eq!(FixedPoint::<i64>::new(2, 3 * P + 7).value(), (5, 7));
        assert_eq!(FixedPoint::<i64>::new(0, -3 * P - 7).value(), (-3, -7));
        assert_eq!(FixedPoint::<i64>::new(-3, P).value(), (-4, 0));
    }

    #[test]
    fn saturation() {
        let max = FixedPoint::<i64>::new(MAX, P - 1);
        assert_eq!(max.value(), (MAX, P - 1));

        let over = FixedPoint::<i64>::new(MAX, P);
        assert_eq!(over.category(), Category::PosInf);
        assert_eq!(over.subseconds(), 0);

        let under = FixedPoint::<i64>::new(-MAX, -P);
        assert_eq!(under.category(), Category::NegInf);
        assert_eq!(under.subseconds(), 0);

        let beyond = FixedPoint::<i64>::new(i64::MAX, i64::MAX);
        assert_eq!(beyond.category(), Category::PosInf);
    }

    #[test]
    fn specials_drop_picos() {
        assert_eq!(
            FixedPoint::<i64>::new(i64::MIN, 12).value(),
            (i64::MIN, 0)
        );
        assert_eq!(
            FixedPoint::<i64>::new(i64::MIN + 1, 12).value(),
            (i64::MIN + 1, 0)
        );
        assert_eq!(
            FixedPoint::<i64>::new(i64::MIN + 1, -3 * P).category(),
            Category::NegInf
        );
    }

    #[test]
    fn normalization_moves_a_second_across() {
        assert_eq!(FixedPoint::<i64>::normalized(MAX, -2).value(), (MAX - 1, P - 2));
        assert_eq!(FixedPoint::<i64>::normalized(-MAX, 2).value(), (-MAX + 1, -P + 2));
        assert_eq!(FixedPoint::<i64>::normalized(0, -2).value(), (0, -2));
    }

    #[test]
    fn category_setter() {
        let mut value = FixedPoint::<i64>::new(7, 7);

        value.set_category(Category::NaN);
        assert_eq!(value.seconds(), i64::MIN);
        assert_eq!(value.subseconds(), 0);

        value.set_category(Category::PosInf);
        assert_eq!(value.value(), (i64::MAX, 0));

        value.set_category(Category::NegInf);
        assert_eq!(value.value(), (i64::MIN + 1, 0));

        value.set_category(Category::Num);
        assert_eq!(value.value(), (0, 0));
    }

    #[test]
    fn setters_normalize() {
        let mut value = FixedPoint::<i64>::new(3, 0);
        value.set_subseconds(P + 1);
        assert_eq!(value.value(), (4, 1));

        value.set_seconds(-2);
        assert_eq!(value.value(), (-2, -1));

        value.set_value(5, -1);
        assert_eq!(value.category(), Category::NaN);
    }

    #[test]
    fn canonical_forms() {
        assert!(FixedPoint::<i64>::new(-4, 7).is_canonical());
        assert!(FixedPoint::<i64>::special(Category::NaN).is_canonical());
        assert!(FixedPoint::<i16>::new(1 << 20, 0).is_canonical());
        assert!(!FixedPoint::<i64>::from_raw(1, -1).is_canonical());
        assert!(!FixedPoint::<i64>::from_raw(0, P).is_canonical());
        assert!(!FixedPoint::<i64>::from_raw(i64::MAX, 1).is_canonical());
    }

    #[test]
    fn narrow_wholes() {
        let value = FixedPoint::<i16>::new(32766, 5);
        assert_eq!(value.value(), (32766, 5));
        assert_eq!(value.wholes(), 32766i16);

        let value = FixedPoint::<i16>::new(32767, 0);
        assert_eq!(value.category(), Category::PosInf);
        assert_eq!(value.wholes(), i16::MAX);
        assert_eq!(value.seconds(), i64::MAX);

        let value = FixedPoint::<i16>::new(-40_000, -5);
        assert_eq!(value.category(), Category::NegInf);
        assert_eq!(value.seconds(), i64::MIN + 1);

        let mut value = FixedPoint::<i32>::new(1, 0);
        value.set_category(Category::NaN);
        assert_eq!(value.wholes(), i32::MIN);
        assert_eq!(value.seconds(), i64::MIN);
    }
}
