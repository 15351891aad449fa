//! Applying a resolved operator to its operands.

use crate::{
    error::{
        InvalidBinomial,
        MissingOperand,
        MultipleVariables,
        TanUndefined,
        UnsupportedArgument,
        UnsupportedExponent,
    },
    funcs::{
        combinatoric::{is_count, Binom, BinomPdf},
        power::{Pow, Root},
        round::RoundTo,
        trigonometry::eval_trig,
    },
    options::{EvalOptions, TrigMode},
    resolve::Position,
};
use texcas_error::Error;
use texcas_parser::{
    registry::Op,
    token::{join_spans, Term, Variable},
};

/// The result of applying an operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A single term that replaces the operator and its operands.
    Term(Term),

    /// The result of comparing two numbers with `=`. Evaluation stops here.
    Boolean(bool),
}

/// Applies the operator at the given position to its operands. Every numeric result is rounded to
/// the configured precision.
pub fn apply(position: &Position, options: &EvalOptions) -> Result<Outcome, Error> {
    let Some(terms) = position.terms() else {
        return Err(Error::new(vec![position.span.clone()], MissingOperand { op: position.op.name() }));
    };
    let ctxt = Apply { position, options };

    let term = match (position.op, terms.as_slice()) {
        (Op::Add | Op::Sub, [a, b]) => ctxt.add(a, b),
        (Op::Mul, [a, b]) => ctxt.multiply(a, b)?,
        (Op::Div | Op::Frac, [a, b]) => ctxt.divide(a, b)?,
        (Op::Pow, [a, b]) => ctxt.power(a, b)?,
        (Op::Sqrt, [Term::Number(x)]) => {
            Term::Number(ctxt.round(Root::eval_static(*x, position.modifier)))
        },
        (op, [Term::Number(x)]) if op.is_trig() => ctxt.trig(op, *x)?,
        (Op::Binom, args) if args.len() == 2 || args.len() == 3 => ctxt.binomial(args)?,
        (Op::Eq, [Term::Number(a), Term::Number(b)]) => return Ok(Outcome::Boolean(a == b)),
        _ => return Err(ctxt.unsupported_argument()),
    };

    tracing::trace!(op = position.op.name(), ?term, "applied operator");
    Ok(Outcome::Term(term))
}

/// An operator being applied.
struct Apply<'a> {
    position: &'a Position,
    options: &'a EvalOptions,
}

impl Apply<'_> {
    fn round(&self, n: f64) -> f64 {
        RoundTo::eval_static(n, self.options.precision)
    }

    /// Returns the span of the operand at index `k`.
    fn operand_span(&self, k: usize) -> std::ops::Range<usize> {
        self.position.operands.get(k)
            .map_or_else(|| self.position.span.clone(), |operand| operand.span.clone())
    }

    fn unsupported_argument(&self) -> Error {
        Error::new(
            vec![self.position.span.clone(), self.operand_span(0)],
            UnsupportedArgument { op: self.position.op.name() },
        )
    }

    /// `a + b` or `a - b`, for like terms.
    fn add(&self, a: &Term, b: &Term) -> Term {
        let a = if self.position.negate_left { a.negated() } else { a.clone() };
        let b = if self.position.op == Op::Sub { b.negated() } else { b.clone() };
        let sum = self.round(a.coefficient() + b.coefficient());

        // `x - x` is 0, not `0x`
        if sum == 0.0 {
            Term::Number(0.0)
        } else {
            a.with_coefficient(sum)
        }
    }

    fn multiply(&self, a: &Term, b: &Term) -> Result<Term, Error> {
        Ok(match (a, b) {
            (Term::Number(x), Term::Number(y)) => Term::Number(self.round(x * y)),
            (Term::Number(n), Term::Variable(var)) | (Term::Variable(var), Term::Number(n)) => {
                Term::Variable(var.clone().with_coefficient(self.round(var.coefficient * n)))
            },
            (Term::Variable(x), Term::Variable(y)) => {
                if x.name != y.name {
                    return Err(Error::new(
                        vec![join_spans(&self.operand_span(0), &self.operand_span(1))],
                        MultipleVariables { names: vec![x.name.clone(), y.name.clone()] },
                    ));
                }
                Term::Variable(Variable {
                    name: x.name.clone(),
                    coefficient: self.round(x.coefficient * y.coefficient),
                    exponent: x.exponent.saturating_add(y.exponent),
                })
            },
        })
    }

    fn divide(&self, a: &Term, b: &Term) -> Result<Term, Error> {
        match (a, b) {
            (_, Term::Number(n)) => Ok(a.with_coefficient(self.round(a.coefficient() / n))),
            (Term::Variable(x), Term::Variable(y)) if x.name == y.name && y.exponent <= x.exponent => {
                let coefficient = self.round(x.coefficient / y.coefficient);
                Ok(match x.exponent - y.exponent {
                    0 => Term::Number(coefficient),
                    exponent => Term::Variable(Variable { name: x.name.clone(), coefficient, exponent }),
                })
            },
            _ => Err(self.unsupported_argument()),
        }
    }

    fn power(&self, base: &Term, exponent: &Term) -> Result<Term, Error> {
        let unsupported = || Error::new(vec![self.operand_span(1)], UnsupportedExponent);
        let Term::Number(n) = *exponent else {
            return Err(unsupported());
        };

        match base {
            Term::Number(x) => Ok(Term::Number(self.round(Pow::eval_static(*x, n)))),
            Term::Variable(var) => {
                if n.fract() != 0.0 || n < 0.0 || n > u32::MAX as f64 {
                    return Err(unsupported());
                }
                if n == 0.0 {
                    return Ok(Term::Number(1.0));
                }
                Ok(Term::Variable(Variable {
                    name: var.name.clone(),
                    coefficient: self.round(Pow::eval_static(var.coefficient, n)),
                    exponent: var.exponent.saturating_mul(n as u32),
                }))
            },
        }
    }

    fn trig(&self, op: Op, x: f64) -> Result<Term, Error> {
        if op == Op::Tan && self.options.trig_mode == TrigMode::Degrees && x >= 90.0 {
            return Err(Error::new(
                vec![self.position.span.clone(), self.operand_span(0)],
                TanUndefined { angle: x },
            ));
        }

        let value = eval_trig(op, x, self.options.trig_mode)
            .ok_or_else(|| self.unsupported_argument())?;
        Ok(Term::Number(self.round(value)))
    }

    /// `\binom{n}{k}`, or the binomial probability `binom(n, k, p)`.
    fn binomial(&self, args: &[Term]) -> Result<Term, Error> {
        let numbers = args.iter()
            .map(|arg| match arg {
                Term::Number(n) => Some(*n),
                Term::Variable(_) => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.unsupported_argument())?;

        let (n, k) = (numbers[0], numbers[1]);
        if !is_count(n) || !is_count(k) {
            return Err(Error::new(
                vec![join_spans(&self.position.span, &self.operand_span(args.len() - 1))],
                InvalidBinomial { n, k },
            ));
        }

        let value = match numbers.get(2) {
            Some(&p) => BinomPdf::eval_static(n, k, p),
            None => Binom::eval_static(n, k),
        };
        Ok(Term::Number(self.round(value)))
    }
}
