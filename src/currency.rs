//! US currency formatting.
//!
//! # Examples
//!
//! ```
//! use settle_utils::currency::format_currency;
//!
//! assert_eq!(format_currency(23), "$23.00");
//! assert_eq!(format_currency(-1234.5), "-$1,234.50");
//! assert_eq!(format_currency("abc"), "$0.00");
//! ```

use serde_json::Value;

/// The formatted amount for input that isn't a finite number.
pub const ZERO_DOLLARS: &str = "$0.00";

/// Types that may hold a numeric amount.
///
/// Numeric primitives always hold one. Text, booleans and other non-numeric
/// values never do, even when their contents look like a number.
pub trait AsAmount {
    /// The amount held by `self`, if any.
    fn as_amount(&self) -> Option<f64>;
}

macro_rules! impl_numeric_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsAmount for $ty {
                #[inline]
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss, clippy::unnecessary_cast)]
                fn as_amount(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_amount!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! impl_non_numeric_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsAmount for $ty {
                #[inline]
                fn as_amount(&self) -> Option<f64> {
                    None
                }
            }
        )*
    };
}

impl_non_numeric_amount!(str, String, char, bool, ());

impl AsAmount for Value {
    fn as_amount(&self) -> Option<f64> {
        match self {
            Value::Number(number) => number.as_f64(),
            _ => None,
        }
    }
}

impl<T: AsAmount> AsAmount for Option<T> {
    fn as_amount(&self) -> Option<f64> {
        self.as_ref().and_then(AsAmount::as_amount)
    }
}

impl<T: AsAmount + ?Sized> AsAmount for &T {
    fn as_amount(&self) -> Option<f64> {
        (**self).as_amount()
    }
}

/// Format `input` as US dollars, e.g. `$1,234.50`.
///
/// Amounts are rounded to two decimals and grouped by thousands; negative
/// amounts carry a leading `-`. Input without a finite amount formats as
/// [`ZERO_DOLLARS`].
pub fn format_currency<A: AsAmount>(input: A) -> String {
    match input.as_amount().filter(|amount| amount.is_finite()) {
        Some(amount) => format_usd(amount),
        None => String::from(ZERO_DOLLARS),
    }
}

fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // Amounts that round to zero lose their sign.
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push('$');
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(cents);
    out
}

#[cfg(test)]
mod test {
    use super::*;

    use serde_json::json;

    #[test]
    fn non_numbers_format_as_zero() {
        assert_eq!(format_currency("abc"), "$0.00");
        assert_eq!(format_currency(String::from("23")), "$0.00");
        assert_eq!(format_currency(true), "$0.00");
        assert_eq!(format_currency(None::<f64>), "$0.00");
        assert_eq!(format_currency(json!("23")), "$0.00");
        assert_eq!(format_currency(json!(null)), "$0.00");
    }

    #[test]
    fn numbers_format_as_us_dollars() {
        assert_eq!(format_currency(23), "$23.00");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(23.5f32), "$23.50");
        assert_eq!(format_currency(Some(7u8)), "$7.00");
        assert_eq!(format_currency(json!(23)), "$23.00");
        assert_eq!(format_currency(&42u64), "$42.00");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_currency(999), "$999.00");
        assert_eq!(format_currency(1000), "$1,000.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000), "$1,000,000.00");
        assert_eq!(format_currency(123_456_789.99), "$123,456,789.99");
    }

    #[test]
    fn negatives() {
        assert_eq!(format_currency(-5), "-$5.00");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_currency(0.999), "$1.00");
        assert_eq!(format_currency(19.994), "$19.99");
    }

    #[test]
    fn non_finite_formats_as_zero() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$0.00");
    }
}
