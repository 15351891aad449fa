//! Recording the steps of an evaluation.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm, such as in [`evaluate_value`].
///
/// [`evaluate_value`]: crate::evaluate_value
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}

/// A single entry in the [`Trace`] of an evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// The whole expression, rendered as LaTeX, before a step was applied.
    Expression(String),

    /// An operator was applied to its operands: `before` is the LaTeX of the operator and its
    /// operands, and `after` is the LaTeX of the result.
    Solved {
        before: String,
        after: String,
    },

    /// A free-form description of what the evaluator did, such as expanding a product or
    /// rearranging an equation.
    Debug(String),
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{}", expr),
            Self::Solved { before, after } => write!(f, "{} \\rightarrow {}", before, after),
            Self::Debug(message) => write!(f, "{}", message),
        }
    }
}

/// The ordered record of the steps taken by an evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace {
    /// Every step, in the order it was taken.
    pub steps: Vec<Step>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshots of the expression, in order.
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::Expression(expr) => Some(expr.as_str()),
            _ => None,
        })
    }

    /// Returns the solved steps, in order.
    pub fn solved(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|step| matches!(step, Step::Solved { .. }))
    }

    /// Returns the debug log, in order.
    pub fn debug(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::Debug(message) => Some(message.as_str()),
            _ => None,
        })
    }
}

impl StepCollector<Step> for Trace {
    #[inline]
    fn push(&mut self, step: Step) {
        self.steps.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_views() {
        let mut trace = Trace::new();
        trace.push(Step::Expression("2+3".to_string()));
        trace.push(Step::Debug("reduce `+`".to_string()));
        trace.push(Step::Solved { before: "2+3".to_string(), after: "5".to_string() });
        trace.push(Step::Expression("5".to_string()));

        assert_eq!(trace.expressions().collect::<Vec<_>>(), ["2+3", "5"]);
        assert_eq!(trace.debug().collect::<Vec<_>>(), ["reduce `+`"]);
        assert_eq!(
            trace.solved().map(ToString::to_string).collect::<Vec<_>>(),
            ["2+3 \\rightarrow 5"],
        );
    }

    #[test]
    fn unit_collector_discards() {
        let mut collector = ();
        StepCollector::<Step>::push(&mut collector, Step::Debug(String::new()));
    }
}
