use crate::registry::Op;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A variable term, such as `x`, `3x`, or `-0.5x^{2}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The name of the variable, including any subscript (e.g. `x_1`).
    pub name: String,

    /// The numeric coefficient the variable is multiplied by.
    pub coefficient: f64,

    /// The power the variable is raised to. Freshly tokenized variables have an exponent of 1;
    /// power reductions raise it.
    pub exponent: u32,
}

impl Variable {
    /// Creates a variable with a coefficient and exponent of 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coefficient: 1.0,
            exponent: 1,
        }
    }

    /// Sets the coefficient of the variable.
    pub fn with_coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    /// Sets the exponent of the variable.
    pub fn with_exponent(mut self, exponent: u32) -> Self {
        self.exponent = exponent;
        self
    }
}

/// A single value: either a number, or a variable with a coefficient and exponent.
///
/// Terms are what operator rules consume and produce.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    Number(f64),
    Variable(Variable),
}

impl Term {
    /// Returns the numeric part of the term: the number itself, or the variable's coefficient.
    pub fn coefficient(&self) -> f64 {
        match self {
            Term::Number(n) => *n,
            Term::Variable(var) => var.coefficient,
        }
    }

    /// Returns the name of the variable, if this is a variable term.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Term::Number(_) => None,
            Term::Variable(var) => Some(&var.name),
        }
    }

    /// Returns the exponent of the variable, or 0 for numbers.
    pub fn exponent(&self) -> u32 {
        match self {
            Term::Number(_) => 0,
            Term::Variable(var) => var.exponent,
        }
    }

    /// Returns true if the term is negative (for variables, if the coefficient is negative).
    pub fn is_negative(&self) -> bool {
        self.coefficient() < 0.0
    }

    /// Returns the term multiplied by -1.
    pub fn negated(&self) -> Term {
        self.with_coefficient(-self.coefficient())
    }

    /// Returns a copy of the term with its numeric part replaced.
    pub fn with_coefficient(&self, coefficient: f64) -> Term {
        match self {
            Term::Number(_) => Term::Number(coefficient),
            Term::Variable(var) => Term::Variable(var.clone().with_coefficient(coefficient)),
        }
    }

    /// Returns true if the two terms can be added together into a single term: both are numbers,
    /// or both are the same variable raised to the same power.
    pub fn is_like(&self, other: &Term) -> bool {
        match (self, other) {
            (Term::Number(_), Term::Number(_)) => true,
            (Term::Variable(a), Term::Variable(b)) => a.name == b.name && a.exponent == b.exponent,
            _ => false,
        }
    }
}

impl From<f64> for Term {
    fn from(n: f64) -> Self {
        Term::Number(n)
    }
}

impl From<Variable> for Term {
    fn from(var: Variable) -> Self {
        Term::Variable(var)
    }
}

/// An operator token. The operator kind itself is described by the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operator {
    /// The operator.
    pub op: Op,

    /// An optional modifier, such as the degree of a root in `\sqrt[3]{x}`.
    pub modifier: Option<f64>,

    /// Whether this operator was inserted by the tokenizer (implicit multiplication).
    pub implicit: bool,
}

impl Operator {
    /// Creates an explicit operator without a modifier.
    pub fn new(op: Op) -> Self {
        Self { op, modifier: None, implicit: false }
    }
}

/// Whether a parenthesis opens or closes its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenRole {
    Open,
    Close,
}

/// A parenthesis token. Every parenthesis shares its `group` id with exactly one partner of the
/// opposite role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paren {
    /// Whether the parenthesis opens or closes the group.
    pub role: ParenRole,

    /// The id shared with the matching parenthesis.
    pub group: usize,
}

/// The different kinds of tokens in a token sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Variable(Variable),
    Operator(Operator),
    Paren(Paren),
}

/// A token in a token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,

    /// The region of the source code that this token originated from. Tokens produced by a
    /// reduction cover the regions of all the tokens they replaced.
    pub span: Range<usize>,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Creates a number token.
    pub fn number(n: f64, span: Range<usize>) -> Self {
        Self::new(TokenKind::Number(n), span)
    }

    /// Creates an explicit operator token.
    pub fn operator(op: Op, span: Range<usize>) -> Self {
        Self::new(TokenKind::Operator(Operator::new(op)), span)
    }

    /// Creates a parenthesis token.
    pub fn paren(role: ParenRole, group: usize, span: Range<usize>) -> Self {
        Self::new(TokenKind::Paren(Paren { role, group }), span)
    }

    /// Creates a token holding the given term.
    pub fn term(term: Term, span: Range<usize>) -> Self {
        match term {
            Term::Number(n) => Self::new(TokenKind::Number(n), span),
            Term::Variable(var) => Self::new(TokenKind::Variable(var), span),
        }
    }

    /// Returns the term this token holds, if it is a number or variable.
    pub fn as_term(&self) -> Option<Term> {
        match &self.kind {
            TokenKind::Number(n) => Some(Term::Number(*n)),
            TokenKind::Variable(var) => Some(Term::Variable(var.clone())),
            _ => None,
        }
    }

    /// Returns true if the token is a number or variable.
    pub fn is_value(&self) -> bool {
        matches!(self.kind, TokenKind::Number(_) | TokenKind::Variable(_))
    }

    /// Returns the operator token, if this is one.
    pub fn as_operator(&self) -> Option<&Operator> {
        match &self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns the operator kind, if this is an operator token.
    pub fn op(&self) -> Option<Op> {
        self.as_operator().map(|op| op.op)
    }

    /// Returns true if this is an operator token of the given kind.
    pub fn is_op(&self, op: Op) -> bool {
        self.op() == Some(op)
    }

    /// Returns the parenthesis, if this is a parenthesis token.
    pub fn as_paren(&self) -> Option<Paren> {
        match self.kind {
            TokenKind::Paren(paren) => Some(paren),
            _ => None,
        }
    }

    /// Returns true if this is an opening parenthesis.
    pub fn is_open(&self) -> bool {
        matches!(self.as_paren(), Some(Paren { role: ParenRole::Open, .. }))
    }

    /// Returns true if this is a closing parenthesis.
    pub fn is_close(&self) -> bool {
        matches!(self.as_paren(), Some(Paren { role: ParenRole::Close, .. }))
    }

    /// Returns true if a value ends at this token, i.e. a number, variable, or closing
    /// parenthesis.
    pub fn ends_value(&self) -> bool {
        self.is_value() || self.is_close()
    }

    /// Returns true if a value starts at this token, i.e. a number, variable, opening
    /// parenthesis, or a prefix operator such as `\sqrt`.
    pub fn starts_value(&self) -> bool {
        self.is_value()
            || self.is_open()
            || self.op().map_or(false, |op| op.info().implicit_mul)
    }
}

/// Returns the smallest range covering both ranges.
pub fn join_spans(a: &Range<usize>, b: &Range<usize>) -> Range<usize> {
    a.start.min(b.start)..a.end.max(b.end)
}

/// Returns the smallest range covering the spans of all the given tokens.
pub fn span_of(tokens: &[Token]) -> Range<usize> {
    tokens.iter()
        .map(|token| token.span.clone())
        .reduce(|a, b| join_spans(&a, &b))
        .unwrap_or(0..0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_terms() {
        let x = Term::Variable(Variable::new("x"));
        let x2 = Term::Variable(Variable::new("x").with_exponent(2));
        let three_x = Term::Variable(Variable::new("x").with_coefficient(3.0));
        assert!(x.is_like(&three_x));
        assert!(!x.is_like(&x2));
        assert!(Term::Number(1.0).is_like(&Term::Number(-4.0)));
        assert!(!Term::Number(1.0).is_like(&x));
    }

    #[test]
    fn negation() {
        let term = Term::Variable(Variable::new("y").with_coefficient(2.5));
        assert_eq!(term.negated().coefficient(), -2.5);
        assert!(term.negated().is_negative());
        assert_eq!(Term::Number(3.0).negated(), Term::Number(-3.0));
    }

    #[test]
    fn spans() {
        let tokens = [
            Token::number(1.0, 4..5),
            Token::operator(Op::Add, 5..6),
            Token::number(2.0, 6..9),
        ];
        assert_eq!(span_of(&tokens), 4..9);
        assert_eq!(span_of(&[]), 0..0);
    }
}
