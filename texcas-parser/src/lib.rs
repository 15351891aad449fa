//! Tokenizer and token sequence for LaTeX-flavored algebraic expressions.
//!
//! Expressions are never parsed into a tree. Instead, [`tokenizer::tokenize`] produces a flat
//! [`TokenSeq`], which an evaluator reduces in place by repeatedly replacing an operator and its
//! operands with the result. The sequence can be rendered back to LaTeX at any point, which is how
//! every intermediate step of an evaluation is displayed.
//!
//! ```
//! use texcas_parser::tokenizer::tokenize;
//!
//! let seq = tokenize("2x + \\frac{1}{2}").unwrap();
//! assert_eq!(seq.reconstruct(), "2\\cdot x+\\frac{1}{2}");
//! ```
//!
//! Every operator the tokenizer understands is described by an entry in the static
//! [`registry::REGISTRY`], which also defines its precedence and how its operands are laid out.
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for [`Op`] and the term types.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`Op`]: registry::Op

pub mod error;
pub mod latex;
pub mod paren;
pub mod registry;
pub mod sequence;
pub mod token;
pub mod tokenizer;

pub use sequence::TokenSeq;
