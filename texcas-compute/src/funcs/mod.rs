//! The numeric functions applied by the evaluator.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method, which
//! evaluates the function on plain [`f64`] arguments. Checks that need the source of the
//! expression, such as reporting `\tan 90`, are done by the evaluator before calling these.
//!
//! # Example
//!
//! ```
//! use texcas_compute::funcs::{combinatoric::Binom, trigonometry::Sin};
//! use texcas_compute::TrigMode;
//!
//! assert_eq!(Binom::eval_static(5.0, 2.0), 10.0);
//! assert!((Sin::eval_static(90.0, TrigMode::Degrees) - 1.0).abs() < 1e-12);
//! ```

pub mod combinatoric;
pub mod power;
pub mod round;
pub mod trigonometry;
