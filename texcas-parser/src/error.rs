//! Syntax errors reported by the tokenizer. These are collected rather than short-circuited, so
//! a single call can report every problem in the input at once.

use ariadne::Fmt;
use texcas_attrs::ErrorKind;
use texcas_error::{ErrorKind, EXPR};

/// The input contained nothing to evaluate.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "nothing to evaluate",
    labels = ["the expression is empty"],
    help = format!("type an expression, such as {}", "2+3\\cdot 4".fg(EXPR)),
)]
pub struct EmptyInput;

/// A character that no tokenizer rule understands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Unknown character `{}` at position {}", self.character, self.position),
    labels = ["this character"],
    help = "only numbers, variables, brackets, and the supported LaTeX operators can be used",
)]
pub struct UnknownCharacter {
    /// The character that was found.
    pub character: char,

    /// The byte offset of the character in the input.
    pub position: usize,
}

/// A backslash command that is not in the operator registry.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `\\{}`", self.name),
    labels = ["this command"],
    help = if self.suggestions.is_empty() {
        "see the documentation for a list of supported commands".to_string()
    } else {
        format!(
            "did you mean {}?",
            self.suggestions
                .iter()
                .map(|s| format!("`\\{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownCommand {
    /// The name of the command, without the backslash.
    pub name: String,

    /// Similarly named commands, if any.
    pub suggestions: Vec<String>,
}

/// A numeric literal that could not be parsed, such as `1.2.3`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", self.lexeme),
    labels = ["this number"],
    help = "numbers can contain at most one decimal point",
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub lexeme: String,
}

/// A closing bracket without an opening partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Unmatched closing bracket",
    labels = ["this bracket is never opened"],
    help = "add an opening bracket `(` somewhere before this",
)]
pub struct UnmatchedClosing;

/// An opening bracket without a closing partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Unmatched opening bracket",
    labels = ["this bracket is not closed"],
    help = "add a closing bracket `)` somewhere after this",
)]
pub struct UnmatchedOpening;

/// A pair of brackets with nothing inside.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside brackets",
    labels = ["add an expression here"],
)]
pub struct EmptyBrackets;

/// The degree of a root in `\sqrt[n]{...}` was not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid root degree",
    labels = ["this root"],
    help = format!("write the degree as a number, such as {}", "\\sqrt[3]{8}".fg(EXPR)),
)]
pub struct InvalidRootDegree;

/// A subscript `_` that does not follow a variable, or is not followed by a name or number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "misplaced subscript",
    labels = ["this subscript"],
    help = format!("subscripts are written directly after a variable, such as {}", "x_{1}".fg(EXPR)),
)]
pub struct MisplacedSubscript;
