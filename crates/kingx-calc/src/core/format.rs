//! Number parsing and display formatting
//!
//! Integral results print their full decimal expansion (`8`, never `8.0`).
//! Everything else prints in "general" notation with a fixed number of
//! significant digits, trailing zeros trimmed, switching to `d.ddde±XX`
//! when the decimal exponent leaves `-4..significant_digits`.

/// Formats and parses the numbers shown on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    significant_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIGNIFICANT_DIGITS)
    }
}

impl NumberFormat {
    /// Significant digits shown for non-integral results
    pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 10;

    /// Largest useful precision for an `f64`
    pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

    /// Creates a formatter, clamping the precision to `1..=17`
    #[must_use]
    pub fn new(significant_digits: usize) -> Self {
        Self {
            significant_digits: significant_digits.clamp(1, Self::MAX_SIGNIFICANT_DIGITS),
        }
    }

    /// Returns the configured precision
    #[must_use]
    pub const fn significant_digits(&self) -> usize {
        self.significant_digits
    }

    /// Renders a finite value for the display
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value == 0.0 {
            // also folds -0 into "0"
            return "0".to_string();
        }
        if value.is_finite() && value.fract() == 0.0 {
            return format!("{value:.0}");
        }
        self.format_general(value)
    }

    /// Parses display text back into a number
    ///
    /// Returns `None` for empty or malformed text and for anything that
    /// would not be finite, so `"."`, `"inf"` and `"NaN"` are all rejected.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<f64> {
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// True when `text` is a well-formed number too large for an `f64`
    ///
    /// `"1"` followed by 309 zeros parses, but only to infinity.
    #[must_use]
    pub fn overflows(&self, text: &str) -> bool {
        text.parse::<f64>().is_ok_and(f64::is_infinite)
    }

    fn format_general(&self, value: f64) -> String {
        let precision = self.significant_digits;
        // The exponent of the rounded scientific form decides the notation
        let scientific = format!("{:.*e}", precision - 1, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return scientific;
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return scientific;
        };

        if exponent < -4 || exponent >= precision as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!(
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (precision as i32 - 1 - exponent) as usize;
            trim_fraction(&format!("{value:.decimals$}")).to_string()
        }
    }
}

/// Drops trailing zeros after the decimal point, then the point itself
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
