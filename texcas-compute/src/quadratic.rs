//! Solving an equation that has been reduced to `terms of one variable = number`.

use crate::{
    error::UnsupportedDegree,
    funcs::round::RoundTo,
    options::EvalOptions,
    solution::Solution,
};
use texcas_error::Error;
use texcas_parser::{
    registry::Op,
    sequence::signed_terms,
    token::{span_of, Term},
    TokenSeq,
};

/// Solves the equation in the sequence if it has the shape `a x^2 + b x = r` or `b x = r`, where
/// any of the terms on the left may be missing. Returns [`None`] if the sequence does not have
/// this shape.
///
/// Linear equations are solved to [`Solution::Equation`], with the value rounded to
/// [`EvalOptions::precision`]. Quadratic equations are solved with the quadratic formula to
/// [`Solution::Roots`], rounded to [`EvalOptions::root_precision`]; if the discriminant is
/// negative, both roots are `NaN`.
pub fn solve(seq: &TokenSeq, options: &EvalOptions) -> Result<Option<Solution>, Error> {
    let tokens = seq.tokens();
    let Some(eq) = tokens.iter().position(|token| token.is_op(Op::Eq)) else {
        return Ok(None);
    };
    let (Some(left), Some(right)) = (signed_terms(&tokens[..eq]), signed_terms(&tokens[eq + 1..])) else {
        return Ok(None);
    };
    let &[Term::Number(r)] = right.as_slice() else {
        return Ok(None);
    };

    let Some(variable) = left.first().and_then(Term::variable_name) else {
        return Ok(None);
    };
    if left.iter().any(|term| term.variable_name() != Some(variable)) {
        return Ok(None);
    }

    let coefficient_of = |exponent: u32| left.iter()
        .filter(|term| term.exponent() == exponent)
        .map(Term::coefficient)
        .sum::<f64>();
    let degree = left.iter().map(Term::exponent).max().unwrap_or(0);

    let solution = match degree {
        1 => {
            let value = RoundTo::eval_static(r / coefficient_of(1), options.precision);
            Solution::Equation { variable: variable.to_string(), value }
        },
        2 => {
            let roots = quadratic_roots(coefficient_of(2), coefficient_of(1), -r)
                .map(|root| RoundTo::eval_static(root, options.root_precision));
            Solution::Roots { variable: variable.to_string(), roots }
        },
        degree => return Err(Error::new(vec![span_of(tokens)], UnsupportedDegree { degree })),
    };

    tracing::debug!(%solution, "solved equation");
    Ok(Some(solution))
}

/// Returns the roots of `a x^2 + b x + c = 0`, with the larger numerator first.
fn quadratic_roots(a: f64, b: f64, c: f64) -> [f64; 2] {
    let discriminant = b * b - 4.0 * a * c;
    let root = discriminant.sqrt();
    [(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;
    use texcas_parser::tokenizer::tokenize;

    fn solved(input: &str) -> Option<Solution> {
        let mut seq = tokenize(input).unwrap();
        seq.fuse();
        solve(&seq, &EvalOptions::default()).unwrap()
    }

    #[test]
    fn linear() {
        assert_eq!(solved("x=4"), Some(Solution::Equation { variable: "x".to_string(), value: 4.0 }));
        assert_eq!(solved("-x=-5"), Some(Solution::Equation { variable: "x".to_string(), value: 5.0 }));
        assert_eq!(solved("x+x=3"), Some(Solution::Equation { variable: "x".to_string(), value: 1.5 }));
    }

    #[test]
    fn quadratic() {
        assert_eq!(solved("x x-x=0"), Some(Solution::Roots { variable: "x".to_string(), roots: [1.0, 0.0] }));
        assert_eq!(solved("x x=4"), Some(Solution::Roots { variable: "x".to_string(), roots: [2.0, -2.0] }));
    }

    #[test]
    fn negative_discriminant() {
        let Some(Solution::Roots { roots, .. }) = solved("x x=-1") else {
            panic!("expected roots");
        };
        assert!(roots.iter().all(|root| root.is_nan()));
    }

    #[test]
    fn formula() {
        let [x1, x2] = quadratic_roots(1.0, 4.0, 1.0);
        assert_float_absolute_eq!(x1, -0.2679491924, 1e-9);
        assert_float_absolute_eq!(x2, -3.7320508076, 1e-9);
    }

    #[test]
    fn other_shapes() {
        assert_eq!(solved("x+1=4"), None);
        assert_eq!(solved("4=x"), None);
        assert_eq!(solved("x=y"), None);
        assert_eq!(solved("2+3"), None);
    }

    #[test]
    fn unsupported_degree() {
        let mut seq = tokenize("x x x=8").unwrap();
        seq.fuse();
        let err = solve(&seq, &EvalOptions::default()).unwrap_err();
        assert_eq!(err.message(), "equations of degree 3 are not supported");
    }
}
