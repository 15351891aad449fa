//! Trigonometric functions and their inverses.

use crate::options::TrigMode;
use texcas_parser::registry::Op;

/// Build a trigonometric function that takes in a single angle as input.
macro_rules! build_angle_input {
    ($($upname:ident; $func:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64, mode: TrigMode) -> f64 {
                    let radians = match mode {
                        TrigMode::Degrees => n.to_radians(),
                        TrigMode::Radians => n,
                    };

                    // NOTE: the closure call is contained within the macro, so we allow
                    // the clippy::redundant_closure_call lint
                    #[allow(clippy::redundant_closure_call)]
                    ($func)(radians)
                }
            }
        )*
    };
}

/// Build an inverse trigonometric function that returns an angle.
macro_rules! build_angle_output {
    ($($upname:ident; $func:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64, mode: TrigMode) -> f64 {
                    #[allow(clippy::redundant_closure_call)]
                    let radians = ($func)(n);
                    match mode {
                        TrigMode::Degrees => radians.to_degrees(),
                        TrigMode::Radians => radians,
                    }
                }
            }
        )*
    };
}

build_angle_input! {
    Sin; f64::sin,
    Cos; f64::cos,
    Tan; f64::tan,
}

build_angle_output! {
    Asin; f64::asin,
    Acos; f64::acos,
    Atan; f64::atan,
}

/// Evaluates the trigonometric function represented by the given operator. Returns [`None`] if the
/// operator is not a trigonometric function.
pub fn eval_trig(op: Op, n: f64, mode: TrigMode) -> Option<f64> {
    Some(match op {
        Op::Sin => Sin::eval_static(n, mode),
        Op::Cos => Cos::eval_static(n, mode),
        Op::Tan => Tan::eval_static(n, mode),
        Op::Asin => Asin::eval_static(n, mode),
        Op::Acos => Acos::eval_static(n, mode),
        Op::Atan => Atan::eval_static(n, mode),
        _ => return None,
    })
}
