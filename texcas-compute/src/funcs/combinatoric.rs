//! Counting functions.

/// Combinations function.
///
/// The returned value can be interepeted in a number of ways:
///
/// - Returns the number of ways to choose `k` items from `n` items, where the order of the items
/// does not matter.
/// - Returns the coefficient of the `x^k` term in the polynomial expansion of `(x + 1)^n`.
/// - Returns the number in row `n` and column `k` of Pascal's triangle.
///
/// Both arguments must be non-negative integers; the caller is responsible for checking this.
#[derive(Debug)]
pub struct Binom;

impl Binom {
    pub fn eval_static(n: f64, k: f64) -> f64 {
        if k > n {
            return 0.0;
        }

        // C(n, k) = C(n, n - k), so accumulate over whichever is smaller
        let k = k.min(n - k) as u64;
        let mut result = 1.0;
        for i in 1..=k {
            result = result * (n - k as f64 + i as f64) / i as f64;

            // every factor is at least 1, so an overflowed result stays infinite
            if result.is_infinite() {
                return result;
            }
        }
        result.round()
    }
}

/// The binomial probability mass function: the probability of exactly `k` successes in `n`
/// independent trials, each succeeding with probability `p`.
#[derive(Debug)]
pub struct BinomPdf;

impl BinomPdf {
    pub fn eval_static(n: f64, k: f64, p: f64) -> f64 {
        Binom::eval_static(n, k) * p.powf(k) * (1.0 - p).powf(n - k)
    }
}

/// Returns true if the value can be used as an argument to [`Binom`].
pub fn is_count(n: f64) -> bool {
    n >= 0.0 && n.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn coefficients() {
        assert_eq!(Binom::eval_static(5.0, 2.0), 10.0);
        assert_eq!(Binom::eval_static(5.0, 3.0), 10.0);
        assert_eq!(Binom::eval_static(10.0, 0.0), 1.0);
        assert_eq!(Binom::eval_static(30.0, 15.0), 155117520.0);
        assert_eq!(Binom::eval_static(2.0, 5.0), 0.0);
    }

    #[test]
    fn huge_coefficients_overflow_quickly() {
        assert_eq!(Binom::eval_static(1e10, 5e9), f64::INFINITY);
        assert_eq!(Binom::eval_static(1e300, 1e299), f64::INFINITY);
        assert_eq!(Binom::eval_static(1e10, 1.0), 1e10);
    }

    #[test]
    fn probability() {
        assert_float_absolute_eq!(BinomPdf::eval_static(5.0, 2.0, 0.5), 0.3125, 1e-12);
        assert_float_absolute_eq!(BinomPdf::eval_static(3.0, 0.0, 0.2), 0.512, 1e-12);
    }

    #[test]
    fn counts() {
        assert!(is_count(0.0));
        assert!(is_count(7.0));
        assert!(!is_count(-1.0));
        assert!(!is_count(2.5));
    }
}
