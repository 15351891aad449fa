//! The final result of an evaluation.

use std::fmt::{self, Display, Formatter};
use texcas_parser::latex::{fmt_name, fmt_number};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The final result of an evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Solution {
    /// The expression reduced to a number.
    Number(f64),

    /// The expression was a comparison of two numbers, such as `4 = 4`.
    Boolean(bool),

    /// A linear equation was solved for its variable.
    Equation {
        variable: String,
        value: f64,
    },

    /// A quadratic equation was solved for both of its roots. A negative discriminant results in
    /// `NaN` roots.
    Roots {
        variable: String,
        roots: [f64; 2],
    },

    /// The expression could not be reduced any further; this is its final LaTeX.
    Expression(String),
}

impl Solution {
    /// Returns the number this solution holds, if it is [`Solution::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", fmt_number(*n)),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Equation { variable, value } => {
                write!(f, "{} = {}", fmt_name(variable), fmt_number(*value))
            },
            Self::Roots { variable, roots: [x1, x2] } => write!(
                f,
                "{name}1 = {}, {name}2 = {}",
                fmt_number(*x1),
                fmt_number(*x2),
                name = variable,
            ),
            Self::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Solution::Number(34.0).to_string(), "34");
        assert_eq!(Solution::Boolean(false).to_string(), "false");
        assert_eq!(
            Solution::Equation { variable: "y_1".to_string(), value: -2.5 }.to_string(),
            "y_{1} = -2.5",
        );
        assert_eq!(
            Solution::Roots { variable: "x".to_string(), roots: [-0.26795, -3.73205] }.to_string(),
            "x1 = -0.26795, x2 = -3.73205",
        );
        assert_eq!(
            Solution::Roots { variable: "x".to_string(), roots: [f64::NAN, f64::NAN] }.to_string(),
            "x1 = NaN, x2 = NaN",
        );
    }
}
