#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The trigonometric mode of an evaluation. This will affect the evaluation of input to
/// trigonometric functions, and output from inverse trigonometric functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrigMode {
    /// Use radians.
    Radians,

    /// Use degrees.
    #[default]
    Degrees,
}

/// Options that control how an expression is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalOptions {
    /// The unit of angles passed to and returned from trigonometric functions.
    pub trig_mode: TrigMode,

    /// The number of fractional digits every intermediate and final result is rounded to.
    ///
    /// Rounding keeps results like `\sin 30` at `0.5` instead of `0.49999999999999994`, at the cost
    /// of precision for very small values.
    pub precision: usize,

    /// The number of fractional digits the roots of a quadratic equation are rounded to.
    pub root_precision: usize,

    /// The maximum number of reductions a single evaluation may perform before it is abandoned
    /// with an error.
    pub max_reductions: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            trig_mode: TrigMode::Degrees,
            precision: 5,
            root_precision: 5,
            max_reductions: 100,
        }
    }
}

impl EvalOptions {
    /// Wraps the given [`EvalOptions`] into a builder for further customization.
    pub fn into_builder(self) -> EvalOptionsBuilder {
        EvalOptionsBuilder(self)
    }
}

/// A builder for [`EvalOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptionsBuilder(EvalOptions);

impl EvalOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trigonometric mode.
    pub fn trig_mode(mut self, trig_mode: TrigMode) -> Self {
        self.0.trig_mode = trig_mode;
        self
    }

    /// Sets the number of fractional digits results are rounded to.
    pub fn precision(mut self, precision: usize) -> Self {
        self.0.precision = precision;
        self
    }

    /// Sets the number of fractional digits quadratic roots are rounded to.
    pub fn root_precision(mut self, root_precision: usize) -> Self {
        self.0.root_precision = root_precision;
        self
    }

    /// Sets the maximum number of reductions.
    pub fn max_reductions(mut self, max_reductions: usize) -> Self {
        self.0.max_reductions = max_reductions;
        self
    }

    /// Builds the [`EvalOptions`].
    pub fn build(self) -> EvalOptions {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let options = EvalOptionsBuilder::new()
            .trig_mode(TrigMode::Radians)
            .precision(3)
            .build();
        assert_eq!(options.trig_mode, TrigMode::Radians);
        assert_eq!(options.precision, 3);
        assert_eq!(options.root_precision, 5);
        assert_eq!(options.max_reductions, 100);
        assert_eq!(options.into_builder().max_reductions(7).build().max_reductions, 7);
    }
}
