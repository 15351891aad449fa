//! Functions related to powers and roots.

/// Basic power function, `x^y`.
#[derive(Debug)]
pub struct Pow;

impl Pow {
    pub fn eval_static(x: f64, y: f64) -> f64 {
        if y.fract() == 0.0 && y.abs() <= i32::MAX as f64 {
            x.powi(y as i32)
        } else {
            x.powf(y)
        }
    }
}

/// The `n`-th root of a number, `\sqrt[n]{x}`, with `n = 2` when no degree is given.
///
/// Odd roots of negative numbers are real (`\sqrt[3]{-8} = -2`); even roots of negative numbers
/// are `NaN`.
#[derive(Debug)]
pub struct Root;

impl Root {
    pub fn eval_static(x: f64, n: Option<f64>) -> f64 {
        match n {
            None => x.sqrt(),
            Some(n) if n == 2.0 => x.sqrt(),
            Some(n) if n == 3.0 => x.cbrt(),
            Some(n) if x < 0.0 && n.fract() == 0.0 && n % 2.0 != 0.0 => -(-x).powf(n.recip()),
            Some(n) => x.powf(n.recip()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn powers() {
        assert_eq!(Pow::eval_static(2.0, 10.0), 1024.0);
        assert_eq!(Pow::eval_static(2.0, -1.0), 0.5);
        assert_float_absolute_eq!(Pow::eval_static(4.0, 0.5), 2.0, 1e-12);
    }

    #[test]
    fn roots() {
        assert_eq!(Root::eval_static(16.0, None), 4.0);
        assert_eq!(Root::eval_static(-8.0, Some(3.0)), -2.0);
        assert_float_absolute_eq!(Root::eval_static(-32.0, Some(5.0)), -2.0, 1e-12);
        assert_float_absolute_eq!(Root::eval_static(81.0, Some(4.0)), 3.0, 1e-12);
        assert!(Root::eval_static(-4.0, None).is_nan());
        assert!(Root::eval_static(-16.0, Some(4.0)).is_nan());
    }
}
