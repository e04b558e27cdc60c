//! Diagnostic text form of time values.
//!
//! Finite values render as a signed decimal number of seconds with all
//! twelve fractional digits, like `+1.500000000000s`. The special values
//! render as `NaN`, `+Inf` and `-Inf`. This is not a wire format, it exists
//! for logs and debugging.

use core::{fmt, str::FromStr};

use super::{Category, ScalarValue, Wholes};
use crate::error::ParseError;

/// Digits in the fractional part
const FRACTION_DIGITS: usize = 12;

/// Every value above zero gets a `+`, including those below one second such
/// as `+0.500000000000s`. Zero itself has no sign.
impl<W: Wholes> fmt::Display for ScalarValue<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            Category::Num => {
                let (seconds, picos) = self.value();
                let sign = if seconds < 0 || picos < 0 {
                    "-"
                } else if seconds > 0 || picos > 0 {
                    "+"
                } else {
                    ""
                };

                write!(
                    f,
                    "{sign}{}.{:0width$}s",
                    seconds.unsigned_abs(),
                    picos.unsigned_abs(),
                    width = FRACTION_DIGITS
                )
            }
            special => f.write_str(special.as_str()),
        }
    }
}

impl<W: Wholes> fmt::Debug for ScalarValue<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_value("ScalarValue", self, f)
    }
}

pub(crate) fn debug_value<W: Wholes>(
    name: &str,
    value: &ScalarValue<W>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_struct(name)
        .field("category", &value.category())
        .field("seconds", &value.seconds())
        .field("picos", &value.subseconds())
        .finish()
}

impl<W: Wholes> FromStr for ScalarValue<W> {
    type Err = ParseError;

    /// Parse the text form back into a value.
    ///
    /// The sign is optional for positive values, the fraction may have
    /// between one and twelve digits, and the trailing `s` may be left out.
    /// Whole seconds beyond the representable range saturate.
    ///
    /// # Example
    /// ```
    /// # use picotime::time::ScalarValue;
    /// let value: ScalarValue = "-1.25s".parse().unwrap();
    /// assert_eq!(value, ScalarValue::new(-1, 250_000_000_000));
    /// assert!("NaN".parse::<ScalarValue>().unwrap().is_nan());
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text).map(ScalarValue::convert)
    }
}

fn parse(text: &str) -> Result<ScalarValue, ParseError> {
    let text = text.trim();
    match text {
        "" => return Err(ParseError::Empty),
        "NaN" => return Ok(ScalarValue::NAN),
        "+Inf" | "Inf" => return Ok(ScalarValue::INFINITY),
        "-Inf" => return Ok(ScalarValue::NEG_INFINITY),
        _ => {}
    }

    let text = text.strip_suffix('s').unwrap_or(text);
    let (negative, text) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    };

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    let seconds = parse_digits(whole).ok_or(ParseError::InvalidSeconds)?;
    let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);

    let picos = match fraction {
        None => 0,
        Some(fraction) => {
            let digits = parse_digits(fraction).ok_or(ParseError::InvalidFraction)?;
            if fraction.len() > FRACTION_DIGITS {
                return Err(ParseError::FractionTooPrecise);
            }
            // Fewer than twelve digits, so this fits comfortably
            digits as i64 * 10i64.pow((FRACTION_DIGITS - fraction.len()) as u32)
        }
    };

    if negative {
        Ok(ScalarValue::new(-seconds, -picos))
    } else {
        Ok(ScalarValue::new(seconds, picos))
    }
}

/// Parse a non-empty run of decimal digits, saturating on overflow.
fn parse_digits(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Only overflow can make this fail now
    Some(digits.parse().unwrap_or(u64::MAX))
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::{format, string::ToString};

    use super::*;
    use crate::time::PICOS_PER_SECOND;

    #[test]
    fn display() {
        assert_eq!(ScalarValue::new(1, 500_000_000_000).to_string(), "+1.500000000000s");
        assert_eq!(ScalarValue::new(0, -1).to_string(), "-0.000000000001s");
        assert_eq!(ScalarValue::new(0, 1).to_string(), "+0.000000000001s");
        assert_eq!(ScalarValue::new(-12, 3).to_string(), "-12.000000000003s");
        assert_eq!(ScalarValue::ZERO.to_string(), "0.000000000000s");
        assert_eq!(ScalarValue::NAN.to_string(), "NaN");
        assert_eq!(ScalarValue::INFINITY.to_string(), "+Inf");
        assert_eq!(ScalarValue::NEG_INFINITY.to_string(), "-Inf");
        assert_eq!(
            ScalarValue::MIN.to_string(),
            "-9223372036854775806.999999999999s"
        );
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", ScalarValue::new(2, 1)),
            "ScalarValue { category: Num, seconds: 2, picos: 1 }"
        );
        assert_eq!(
            format!("{:?}", ScalarValue::NAN),
            "ScalarValue { category: NaN, seconds: -9223372036854775808, picos: 0 }"
        );
    }

    #[test]
    fn parse_rendered() {
        for value in [
            ScalarValue::new(1, 500_000_000_000),
            ScalarValue::new(0, -1),
            ScalarValue::ZERO,
            ScalarValue::MAX,
            ScalarValue::MIN,
            ScalarValue::INFINITY,
            ScalarValue::NEG_INFINITY,
        ] {
            let parsed: ScalarValue = value.to_string().parse().unwrap();
            assert_eq!(parsed, value);
        }

        let parsed: ScalarValue = ScalarValue::NAN.to_string().parse().unwrap();
        assert!(parsed.is_nan());
    }

    #[test]
    fn parse_loose() {
        let parsed: ScalarValue = "3".parse().unwrap();
        assert_eq!(parsed, ScalarValue::from_seconds(3));

        let parsed: ScalarValue = " 2.5s ".parse().unwrap();
        assert_eq!(parsed, ScalarValue::new(2, PICOS_PER_SECOND / 2));

        let parsed: ScalarValue = "-0.000001".parse().unwrap();
        assert_eq!(parsed, ScalarValue::new(0, -1_000_000));

        let parsed: ScalarValue = "Inf".parse().unwrap();
        assert!(parsed.is_positive_infinity());

        let parsed: ScalarValue = "99999999999999999999999s".parse().unwrap();
        assert!(parsed.is_positive_infinity());

        let parsed: ScalarValue = "-99999999999999999999999s".parse().unwrap();
        assert!(parsed.is_negative_infinity());

        let parsed: ScalarValue<i16> = "40000".parse().unwrap();
        assert!(parsed.is_positive_infinity());
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<ScalarValue>(), Err(ParseError::Empty));
        assert_eq!("  ".parse::<ScalarValue>(), Err(ParseError::Empty));
        assert_eq!("s".parse::<ScalarValue>(), Err(ParseError::InvalidSeconds));
        assert_eq!(".5s".parse::<ScalarValue>(), Err(ParseError::InvalidSeconds));
        assert_eq!("1.s".parse::<ScalarValue>(), Err(ParseError::InvalidFraction));
        assert_eq!("1.5x".parse::<ScalarValue>(), Err(ParseError::InvalidFraction));
        assert_eq!("+-1".parse::<ScalarValue>(), Err(ParseError::InvalidSeconds));
        assert_eq!(
            "1.0000000000001".parse::<ScalarValue>(),
            Err(ParseError::FractionTooPrecise)
        );
    }
}
