use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an element count into the language's integer type.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the count does not fit in an `i64`.
///
/// ## Example
/// ```
/// use lispy::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42).unwrap(), 42);
/// ```
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Converts a language integer into a position, if it is non-negative and
/// addressable.
///
/// ## Errors
/// Returns `Err(error)` for negative values or values beyond `usize::MAX`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if the conversion is not possible.
///
/// ## Example
/// ```
/// use lispy::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(3, "negative"), Ok(3));
/// assert_eq!(i64_to_usize_checked(-1, "negative"), Err("negative"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Parses a run of ASCII digits in base 10, wrapping on overflow.
///
/// The lexer only hands this function slices made of `0-9`, so it never
/// fails; literals too large for an `i64` produce an unspecified value
/// instead of an error.
///
/// ## Example
/// ```
/// use lispy::util::num::parse_digits_wrapping;
///
/// assert_eq!(parse_digits_wrapping("1234"), 1234);
/// ```
#[must_use]
pub fn parse_digits_wrapping(digits: &str) -> i64 {
    digits.bytes()
          .filter(u8::is_ascii_digit)
          .fold(0_i64, |acc, b| acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0')))
}
