use core::fmt::{Debug, Display};

/// The kind of value a seconds field encodes.
///
/// Only [`Num`](`Self::Num`) carries a numeric payload. The other categories
/// are encoded by reserving the extreme values of the seconds field, see
/// [`Wholes`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// An ordinary finite value
    #[default]
    Num,
    /// Not a number, the result of any invalid operation
    NaN,
    /// Negative infinity, the result of underflow
    NegInf,
    /// Positive infinity, the result of overflow
    PosInf,
}

impl Category {
    /// Classify a canonical seconds value.
    ///
    /// Every `i64` falls into exactly one category.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::Category;
    /// assert_eq!(Category::classify(0), Category::Num);
    /// assert_eq!(Category::classify(i64::MAX), Category::PosInf);
    /// assert_eq!(Category::classify(i64::MIN + 1), Category::NegInf);
    /// assert_eq!(Category::classify(i64::MIN), Category::NaN);
    /// ```
    pub const fn classify(seconds: i64) -> Self {
        if seconds >= <i64 as Wholes>::POS_INFINITY {
            Self::PosInf
        } else if seconds > <i64 as Wholes>::NEG_INFINITY {
            Self::Num
        } else if seconds > <i64 as Wholes>::NAN {
            Self::NegInf
        } else {
            Self::NaN
        }
    }

    /// Returns `true` for [`Num`](`Self::Num`)
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Num)
    }

    /// Returns `true` for either infinity
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::NegInf | Self::PosInf)
    }

    /// The canonical seconds sentinel of a special category, `None` for
    /// [`Num`](`Self::Num`).
    pub const fn sentinel(self) -> Option<i64> {
        match self {
            Self::Num => None,
            Self::NaN => Some(<i64 as Wholes>::NAN),
            Self::NegInf => Some(<i64 as Wholes>::NEG_INFINITY),
            Self::PosInf => Some(<i64 as Wholes>::POS_INFINITY),
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Num => "Num",
            Self::NaN => "NaN",
            Self::NegInf => "-Inf",
            Self::PosInf => "+Inf",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the category of a sum from the categories of its operands.
///
/// Finite plus finite stays finite, `NaN` absorbs everything, an infinity
/// absorbs finite values and itself, and opposite infinities cancel into
/// `NaN`.
///
/// # Example
/// ```
/// # use picotime::time::{combine, Category};
/// assert_eq!(combine(Category::PosInf, Category::Num), Category::PosInf);
/// assert_eq!(combine(Category::PosInf, Category::NegInf), Category::NaN);
/// ```
pub const fn combine(left: Category, right: Category) -> Category {
    use Category::*;

    match (left, right) {
        (Num, Num) => Num,
        (NaN, _) | (_, NaN) => NaN,
        (PosInf, NegInf) | (NegInf, PosInf) => NaN,
        (PosInf, _) | (_, PosInf) => PosInf,
        (NegInf, _) | (_, NegInf) => NegInf,
    }
}

mod private {
    pub trait Sealed {}
}

/// Integer types that can hold the whole seconds of a value.
///
/// Each width reserves its own extremes:
///
/// | value            | meaning           |
/// |------------------|-------------------|
/// | `MAX` of the int | positive infinity |
/// | one less         | largest number    |
/// | negation of that | smallest number   |
/// | `MIN + 1`        | negative infinity |
/// | `MIN`            | not a number      |
///
/// Keeping the smallest number at the negation of the largest means negation
/// can never overflow. Narrow widths widen their sentinels onto the `i64`
/// ones on read and saturate to their own infinities on write, using a fixed
/// one-to-one ratio between wholes and seconds.
pub trait Wholes: private::Sealed + Copy + Default + PartialEq + PartialOrd + Debug {
    /// Zero seconds
    const ZERO: Self;
    /// Encodes not-a-number
    const NAN: Self;
    /// Encodes negative infinity
    const NEG_INFINITY: Self;
    /// Encodes positive infinity
    const POS_INFINITY: Self;
    /// Largest finite value
    const MAX: Self;
    /// Smallest finite value
    const MIN: Self;

    /// Widen to canonical seconds.
    fn to_seconds(self) -> i64;

    /// Narrow canonical seconds, saturating to the infinities of this width.
    fn from_seconds(seconds: i64) -> Self;
}

macro_rules! wholes_impl {
    ($t:ty) => {
        impl private::Sealed for $t {}

        impl Wholes for $t {
            const ZERO: Self = 0;
            const NAN: Self = <$t>::MIN;
            const NEG_INFINITY: Self = <$t>::MIN + 1;
            const POS_INFINITY: Self = <$t>::MAX;
            const MAX: Self = <$t>::MAX - 1;
            const MIN: Self = -(<$t>::MAX - 1);

            #[inline]
            fn to_seconds(self) -> i64 {
                if self == Self::NAN {
                    <i64 as Wholes>::NAN
                } else if self > <Self as Wholes>::MAX {
                    <i64 as Wholes>::POS_INFINITY
                } else if self < <Self as Wholes>::MIN {
                    <i64 as Wholes>::NEG_INFINITY
                } else {
                    self as i64
                }
            }

            #[inline]
            fn from_seconds(seconds: i64) -> Self {
                if seconds == <i64 as Wholes>::NAN {
                    Self::NAN
                } else if seconds > <Self as Wholes>::MAX as i64 {
                    Self::POS_INFINITY
                } else if seconds < <Self as Wholes>::MIN as i64 {
                    Self::NEG_INFINITY
                } else {
                    seconds as $t
                }
            }
        }
    };
}

wholes_impl!(i16);
wholes_impl!(i32);
wholes_impl!(i64);
