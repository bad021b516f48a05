//! Prompt rendering for numeric trip fields.

use std::fmt;

/// Renders an `f64` the way the web form's numbers read back as text.
///
/// Ordinary values print like `f64`'s `Display` (`1500`, `2.5`, `-1`).
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent
/// form with an explicit sign (`1e+21`, `1.5e-7`). Negative zero prints
/// as `0` and infinities as `Infinity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptNumber(pub f64);

impl fmt::Display for PromptNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value == 0.0 {
            return f.write_str("0");
        }

        let magnitude = value.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{value}");
        }

        let exp = format!("{value:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exp),
        }
    }
}
