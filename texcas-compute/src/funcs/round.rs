//! Rounding functions.

/// Rounds a number to a given number of fractional digits.
///
/// Values that are not finite, or too large to be scaled without overflowing, are returned as-is.
#[derive(Debug)]
pub struct RoundTo;

impl RoundTo {
    pub fn eval_static(n: f64, digits: usize) -> f64 {
        if !n.is_finite() {
            return n;
        }

        let magnitude = 10f64.powi(digits.min(300) as i32);
        let scaled = n * magnitude;
        if !scaled.is_finite() {
            return n;
        }

        let rounded = scaled.round() / magnitude;
        // avoid printing `-0`
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }
}
