//! Errors that can occur while evaluating a tokenized expression.

use ariadne::Fmt;
use texcas_attrs::ErrorKind;
use texcas_error::{Error, ErrorKind, EXPR};
use std::io;

/// An operator is missing one of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` operator is missing an operand: operand must have a value", self.op),
    labels = ["this operator"],
)]
pub struct MissingOperand {
    /// The name of the operator.
    pub op: &'static str,
}

/// The expression contains more than one distinct variable where only one can be handled.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "expressions with multiple variables ({}) are not supported yet",
        self.names.join(", "),
    ),
    labels = ["this expression"],
    help = "only equations in a single variable can be solved",
)]
pub struct MultipleVariables {
    /// The names of the variables found.
    pub names: Vec<String>,
}

/// The tangent of an angle of 90 degrees or more was requested.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the argument to `tan` must be smaller than 90, got {}", self.angle),
    labels = ["this function", "this argument"],
    help = "the tangent of 90 degrees is undefined",
)]
pub struct TanUndefined {
    /// The angle that was given, in degrees.
    pub angle: f64,
}

/// A power with an exponent that cannot be applied.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unsupported exponent",
    labels = ["this exponent"],
    help = format!(
        "variables and sums can only be raised to positive integer powers, such as {}",
        "(x+1)^{2}".fg(EXPR),
    ),
)]
pub struct UnsupportedExponent;

/// A function was applied to an argument it cannot handle symbolically, such as `\sin x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply `{}` to a variable", self.op),
    labels = ["this function", "this argument"],
    help = "isolate the variable first, or substitute a value for it",
)]
pub struct UnsupportedArgument {
    /// The name of the function.
    pub op: &'static str,
}

/// A binomial coefficient with arguments that are not non-negative integers.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot compute the binomial coefficient of {} and {}", self.n, self.k),
    labels = ["this binomial"],
    help = "both arguments must be non-negative integers",
)]
pub struct InvalidBinomial {
    /// The number of items.
    pub n: f64,

    /// The number of chosen items.
    pub k: f64,
}

/// A function was given the wrong number of comma-separated arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes {} arguments, but {} were given", self.op, self.expected, self.given),
    labels = ["this function"],
)]
pub struct ArgumentCount {
    /// The name of the function.
    pub op: &'static str,

    /// A description of the number of arguments expected, e.g. `2 or 3`.
    pub expected: &'static str,

    /// The number of arguments given.
    pub given: usize,
}

/// An equation whose variable is raised to a power that cannot be solved for.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("equations of degree {} are not supported", self.degree),
    labels = ["this equation"],
    help = "only linear and quadratic equations can be solved",
)]
pub struct UnsupportedDegree {
    /// The highest exponent of the variable.
    pub degree: u32,
}

/// An expression with a variable and more than one `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "equations with more than one `=` are not supported",
    labels = ["this equality"],
)]
pub struct MultipleEqualities;

/// The variable of an equation could not be moved to one side.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot isolate `{}` in this equation", self.variable),
    labels = ["this equation"],
    help = "each side of the equation must be a sum of terms, or a single fraction",
)]
pub struct CannotIsolate {
    /// The variable that was being isolated.
    pub variable: String,
}

/// The evaluation did not finish within the configured number of reductions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("reduction limit reached after {} steps", self.limit),
    labels = ["this expression"],
    help = "the expression may be too large, or cannot be simplified further",
)]
pub struct ReductionLimit {
    /// The configured limit.
    pub limit: usize,
}

/// An error produced by [`evaluate`](crate::evaluate).
#[derive(Debug)]
pub enum EvalError {
    /// The expression could not be tokenized. Every problem found in the input is reported.
    Syntax(Vec<Error>),

    /// The expression was tokenized, but could not be evaluated. Evaluation stops at the first
    /// such error.
    Semantic(Error),
}

impl EvalError {
    /// Returns the errors contained in this [`EvalError`].
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Syntax(errs) => errs,
            Self::Semantic(err) => std::slice::from_ref(err),
        }
    }

    /// Returns the plain-text message of each error.
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(Error::message).collect()
    }

    /// Report the errors in this [`EvalError`] to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.errors()
            .iter()
            .try_for_each(|err| err.report_to_stderr(src_id, input))
    }

    /// Renders the reports of every error into a single string, including any ANSI color codes.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        self.errors()
            .iter()
            .map(|err| err.report_to_string(src_id, input))
            .collect()
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("\n"))
    }
}

impl std::error::Error for EvalError {}

impl From<Vec<Error>> for EvalError {
    fn from(errs: Vec<Error>) -> Self {
        Self::Syntax(errs)
    }
}

impl From<Error> for EvalError {
    fn from(err: Error) -> Self {
        Self::Semantic(err)
    }
}
