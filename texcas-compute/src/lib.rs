//! Step-by-step evaluation of LaTeX-flavored algebraic expressions.
//!
//! An expression is tokenized by [`texcas_parser`] into a flat sequence of tokens, which is then
//! reduced one operator at a time, in order of precedence and parenthesis nesting, until a single
//! value remains. Equations in a single variable are rearranged to isolate the variable, and solved
//! if they are linear or quadratic. Every intermediate expression and every applied operator is
//! recorded in a [`Trace`].
//!
//! ```
//! use texcas_compute::{evaluate, Solution};
//!
//! let evaluation = evaluate("(x+1)(x+3)=2").unwrap();
//! assert_eq!(evaluation.solution.to_string(), "x1 = -0.26795, x2 = -3.73205");
//!
//! let evaluation = evaluate("2+3\\cdot4").unwrap();
//! assert_eq!(evaluation.solution, Solution::Number(14.0));
//! assert_eq!(
//!     evaluation.trace.solved().map(ToString::to_string).collect::<Vec<_>>(),
//!     ["3\\cdot4 \\rightarrow 12", "2+12 \\rightarrow 14"],
//! );
//! ```

pub mod controller;
pub mod error;
pub mod eval;
pub mod expand;
pub mod funcs;
pub mod options;
pub mod quadratic;
pub mod rearrange;
pub mod resolve;
pub mod solution;
pub mod step;

pub use error::EvalError;
pub use options::{EvalOptions, EvalOptionsBuilder, TrigMode};
pub use solution::Solution;
pub use step::{Step, StepCollector, Trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    /// The final result.
    pub solution: Solution,

    /// Every step taken to reach the result.
    pub trace: Trace,
}

/// Evaluates the expression with the default [`EvalOptions`].
pub fn evaluate(input: &str) -> Result<Evaluation, EvalError> {
    evaluate_with(input, EvalOptions::default())
}

/// Evaluates the expression with the given options.
pub fn evaluate_with(input: &str, options: EvalOptions) -> Result<Evaluation, EvalError> {
    let mut trace = Trace::new();
    let solution = controller::run(input, &options, &mut trace)?;
    Ok(Evaluation { solution, trace })
}

/// Evaluates the expression without recording a trace.
pub fn evaluate_value(input: &str, options: EvalOptions) -> Result<Solution, EvalError> {
    controller::run(input, &options, &mut ())
}
