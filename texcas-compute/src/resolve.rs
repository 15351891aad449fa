//! Finding the next step to take in a [`TokenSeq`].
//!
//! The resolver looks at one **window** of the sequence at a time: the contents of a parenthesized
//! group, or the whole sequence. Windows are visited innermost first, and the whole sequence is
//! visited last. Within a window, only the operators that are not nested in a deeper group are
//! considered, in order of their precedence [`Tier`], from highest to lowest. Within a tier, the
//! leftmost operator that can be applied wins.
//!
//! Most operators are applied by [`Action::Reduce`], which replaces the operator and its operands
//! with a single result. Operators whose operands are sums of terms are instead expanded
//! ([`Action::Expand`]) into a form that can be reduced further, and sums whose like terms are not
//! next to each other are reordered ([`Action::Regroup`]).

use crate::error::{ArgumentCount, MissingOperand, MultipleVariables, UnsupportedExponent};
use std::{cmp::Ordering, ops::Range};
use texcas_error::Error;
use texcas_parser::{
    registry::{Layout, Op, Tier},
    sequence::signed_terms,
    token::{join_spans, Term},
    TokenSeq,
};

/// The highest power a sum in parentheses can be raised to.
const MAX_REPEAT: f64 = 16.0;

/// An operand of a resolved operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    /// The tokens the operand covers, including the parentheses of a group.
    pub range: Range<usize>,

    /// The region of the source code that the operand covers.
    pub span: Range<usize>,

    /// The terms of the operand. A value has a single term; a group holding a sum has one term per
    /// summand, with the sign of the summand applied.
    pub terms: Vec<Term>,
}

impl Operand {
    /// Returns the term of the operand if it holds a single term.
    pub fn single(&self) -> Option<&Term> {
        match self.terms.as_slice() {
            [term] => Some(term),
            _ => None,
        }
    }

    /// Returns true if the operand spans more than one token.
    pub fn is_multi_token(&self) -> bool {
        self.range.len() > 1
    }
}

/// Describes the next reduction: an operator, its operands, and the tokens the result replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// The operator to apply.
    pub op: Op,

    /// The index of the operator token.
    pub index: usize,

    /// The region of the source code that the operator came from.
    pub span: Range<usize>,

    /// The modifier of the operator, such as the degree of a root.
    pub modifier: Option<f64>,

    /// The operands, in order of appearance.
    pub operands: Vec<Operand>,

    /// The tokens replaced by the result.
    pub range: Range<usize>,

    /// Whether the left operand of a `+` or `-` is preceded by a `-`, which then applies to it.
    ///
    /// In `x - 3 + 2`, the `+` is applied to `-3` and `2`, and the `-` is included in the replaced
    /// range; the result is added back with a `+`.
    pub negate_left: bool,
}

impl Position {
    /// Returns the terms of the operands, if every operand holds a single term.
    pub fn terms(&self) -> Option<Vec<Term>> {
        self.operands
            .iter()
            .map(|operand| operand.single().cloned())
            .collect()
    }
}

/// Rewrites that make a sum reducible.
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion {
    /// Distributes a product or quotient over the terms of sums: `(a + b)(c + d)` becomes
    /// `(ac + ad + bc + bd)`, and `\frac{a + b}{d}` becomes `(a / d + b / d)`.
    Distribute {
        /// The tokens replaced by the expansion.
        range: Range<usize>,

        /// The operator applied to each pair of terms.
        op: Op,

        /// The terms of the left operand.
        left: Vec<Term>,

        /// The terms of the right operand.
        right: Vec<Term>,
    },

    /// Writes a power of a sum as repeated multiplication: `(x + 1)^{2}` becomes
    /// `((x + 1)(x + 1))`.
    Repeat {
        /// The tokens replaced by the expansion.
        range: Range<usize>,

        /// The tokens inside the parentheses of the base.
        group: Range<usize>,

        /// The number of copies.
        count: u32,
    },
}

/// The next step to take.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Apply an operator to its operands.
    Reduce(Position),

    /// Expand a product, quotient, or power of sums.
    Expand(Expansion),

    /// Replace a sum with the same terms, reordered so that like terms are next to each other.
    Regroup {
        /// The tokens of the sum.
        range: Range<usize>,

        /// The reordered terms.
        terms: Vec<Term>,
    },
}

/// Finds the next step to take in the sequence, or [`None`] if there is nothing left to reduce.
pub fn resolve(seq: &TokenSeq) -> Result<Option<Action>, Error> {
    let mut groups = seq.groups();
    groups.sort_by(|a, b| b.depth.cmp(&a.depth).then(a.open.cmp(&b.open)));

    let windows = groups.iter()
        .map(|group| group.open + 1..group.close)
        .chain(std::iter::once(0..seq.len()));

    for range in windows {
        let window = Window { seq, range };
        let top_level = window.top_level();
        let ops = top_level.iter()
            .filter_map(|&i| seq.tokens()[i].op().map(|op| (i, op)))
            .collect::<Vec<_>>();
        if ops.is_empty() {
            continue;
        }

        for tier in Tier::REDUCIBLE {
            for &(i, op) in ops.iter().filter(|(_, op)| op.tier() == tier) {
                if let Some(action) = window.candidate(i, op)? {
                    tracing::debug!(op = op.name(), index = i, "resolved next step");
                    return Ok(Some(action));
                }
            }
        }

        if let Some(action) = window.regroup(&top_level) {
            tracing::debug!(window = ?window.range, "regrouping like terms");
            return Ok(Some(action));
        }
    }

    Ok(None)
}

/// The state of an operand slot next to an operator.
enum Slot {
    /// There is no operand; the operator cannot be applied.
    Missing,

    /// There is an operand, but it has to be reduced further first.
    Pending,

    /// The operand is ready.
    Ready(Operand),
}

/// A range of the sequence being searched for a step.
struct Window<'a> {
    seq: &'a TokenSeq,
    range: Range<usize>,
}

impl Window<'_> {
    /// Returns the indices of the tokens in the window that are not nested in a group.
    fn top_level(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut i = self.range.start;
        while i < self.range.end {
            indices.push(i);
            i = if self.seq.tokens()[i].is_open() {
                self.seq.partner(i).map_or(i + 1, |close| close + 1)
            } else {
                i + 1
            };
        }
        indices
    }

    /// Returns an error pointing at the operator at `i`, which is missing an operand.
    fn missing(&self, i: usize, op: Op) -> Error {
        Error::new(vec![self.seq.tokens()[i].span.clone()], MissingOperand { op: op.name() })
    }

    /// Returns the operand made of the single value at `i`.
    fn value(&self, i: usize) -> Option<Operand> {
        let token = &self.seq.tokens()[i];
        Some(Operand {
            range: i..i + 1,
            span: token.span.clone(),
            terms: vec![token.as_term()?],
        })
    }

    /// Returns the operand made of the group with the given parentheses.
    fn group(&self, open: usize, close: usize) -> Slot {
        let tokens = self.seq.tokens();
        match signed_terms(&tokens[open + 1..close]) {
            Some(terms) => Slot::Ready(Operand {
                range: open..close + 1,
                span: join_spans(&tokens[open].span, &tokens[close].span),
                terms,
            }),
            None => Slot::Pending,
        }
    }

    /// Returns the operand to the left of the infix operator at `i`.
    fn left_operand(&self, i: usize) -> Slot {
        if i == self.range.start {
            return Slot::Missing;
        }

        let token = &self.seq.tokens()[i - 1];
        if token.is_value() {
            return self.value(i - 1).map_or(Slot::Missing, Slot::Ready);
        }

        if token.is_close() {
            return match self.seq.partner(i - 1) {
                // the group belongs to another operator, which has to be applied first
                Some(open) if self.seq.group_owner(open).is_some() => Slot::Pending,
                Some(open) => self.group(open, i - 1),
                None => Slot::Missing,
            };
        }

        Slot::Missing
    }

    /// Returns the operand to the right of the operator at `i`.
    fn right_operand(&self, i: usize) -> Slot {
        let j = i + 1;
        if j >= self.range.end {
            return Slot::Missing;
        }

        let token = &self.seq.tokens()[j];
        if token.is_value() {
            return self.value(j).map_or(Slot::Missing, Slot::Ready);
        }

        if token.is_open() {
            return match self.seq.partner(j) {
                Some(close) => self.group(j, close),
                None => Slot::Missing,
            };
        }

        match token.op() {
            Some(op) if op.layout() != Layout::Infix => Slot::Pending,
            _ => Slot::Missing,
        }
    }

    /// Returns both operands of the infix operator at `i`, [`None`] if either is pending, or an
    /// error if either is missing.
    fn infix_operands(&self, i: usize, op: Op) -> Result<Option<(Operand, Operand)>, Error> {
        match (self.left_operand(i), self.right_operand(i)) {
            (Slot::Missing, _) | (_, Slot::Missing) => Err(self.missing(i, op)),
            (Slot::Ready(left), Slot::Ready(right)) => Ok(Some((left, right))),
            _ => Ok(None),
        }
    }

    /// Returns true if the operator at `neighbor` binds tighter than `op`, so that the operand of
    /// `op` next to it belongs to the neighbor instead.
    fn blocked_by(&self, op: Op, neighbor: Option<usize>, on_left: bool) -> bool {
        let Some(other) = neighbor
            .filter(|n| self.range.contains(n))
            .and_then(|n| self.seq.tokens()[n].op())
        else {
            return false;
        };

        // `a / b \cdot c` is `(a / b) \cdot c`, never `a / (b \cdot c)`
        let divides_left = on_left && other == Op::Div && op.tier() == Tier::Multiplicative;
        other.tier() > op.tier() || divides_left
    }

    /// Returns true if the operands of the infix operator are next to an operator that binds
    /// tighter.
    fn blocked(&self, op: Op, left: &Operand, right: &Operand) -> bool {
        self.blocked_by(op, left.range.start.checked_sub(1), true)
            || self.blocked_by(op, Some(right.range.end), false)
    }

    /// Creates the position of the operator at `i`.
    fn position(&self, i: usize, operands: Vec<Operand>, range: Range<usize>) -> Position {
        let token = &self.seq.tokens()[i];
        let operator = token.as_operator();
        Position {
            op: operator.map_or(Op::Comma, |operator| operator.op),
            index: i,
            span: token.span.clone(),
            modifier: operator.and_then(|operator| operator.modifier),
            operands,
            range,
            negate_left: false,
        }
    }

    /// Returns the action for the operator at `i`, if it can be applied.
    fn candidate(&self, i: usize, op: Op) -> Result<Option<Action>, Error> {
        match op {
            Op::Pow => self.power(i),
            Op::Mul | Op::Div => self.multiplicative(i, op),
            Op::Add | Op::Sub => self.additive(i, op),
            Op::Eq => self.equality(i),
            Op::Frac => self.fraction(i),
            Op::Binom => self.binomial(i),
            Op::Comma => Ok(None),
            Op::Sqrt | Op::Sin | Op::Cos | Op::Tan | Op::Asin | Op::Acos | Op::Atan => self.prefix(i, op),
        }
    }

    /// `a^b`
    fn power(&self, i: usize) -> Result<Option<Action>, Error> {
        let Some((left, right)) = self.infix_operands(i, Op::Pow)? else {
            return Ok(None);
        };
        let Some(exponent) = right.single() else {
            return Ok(None);
        };
        let Term::Number(n) = *exponent else {
            return Err(Error::new(vec![right.span.clone()], UnsupportedExponent));
        };

        let range = left.range.start..right.range.end;
        if left.terms.len() > 1 {
            if n.fract() != 0.0 || !(0.0..=MAX_REPEAT).contains(&n) {
                return Err(Error::new(vec![right.span.clone()], UnsupportedExponent));
            }
            let group = left.range.start + 1..left.range.end - 1;
            return Ok(Some(Action::Expand(Expansion::Repeat { range, group, count: n as u32 })));
        }

        Ok(Some(Action::Reduce(self.position(i, vec![left, right], range))))
    }

    /// `a \cdot b`, `a \div b`
    fn multiplicative(&self, i: usize, op: Op) -> Result<Option<Action>, Error> {
        let Some((left, right)) = self.infix_operands(i, op)? else {
            return Ok(None);
        };
        if self.blocked(op, &left, &right) {
            return Ok(None);
        }

        let range = left.range.start..right.range.end;
        match (left.single(), right.single(), op) {
            (Some(a), Some(b), Op::Mul) => {
                if let (Some(x), Some(y)) = (a.variable_name(), b.variable_name()) {
                    if x != y {
                        return Err(Error::new(
                            vec![join_spans(&left.span, &right.span)],
                            MultipleVariables { names: vec![x.to_string(), y.to_string()] },
                        ));
                    }
                }
                Ok(Some(Action::Reduce(self.position(i, vec![left, right], range))))
            },
            (Some(a), Some(b), _) if divisible(a, b) => {
                Ok(Some(Action::Reduce(self.position(i, vec![left, right], range))))
            },
            (_, _, Op::Mul) => Ok(Some(Action::Expand(Expansion::Distribute {
                range,
                op,
                left: left.terms,
                right: right.terms,
            }))),
            (None, Some(Term::Number(_)), _) => Ok(Some(Action::Expand(Expansion::Distribute {
                range,
                op,
                left: left.terms,
                right: right.terms,
            }))),
            _ => Ok(None),
        }
    }

    /// `a + b`, `a - b`
    fn additive(&self, i: usize, op: Op) -> Result<Option<Action>, Error> {
        let Some((left, right)) = self.infix_operands(i, op)? else {
            return Ok(None);
        };
        let (Some(a), Some(b)) = (left.single(), right.single()) else {
            return Ok(None);
        };
        if !a.is_like(b) {
            return Ok(None);
        }

        let before = left.range.start.checked_sub(1).filter(|n| self.range.contains(n));
        let negate_left = before.map_or(false, |n| self.seq.tokens()[n].is_op(Op::Sub));
        if !negate_left && self.blocked_by(op, before, true) {
            return Ok(None);
        }
        if self.blocked_by(op, Some(right.range.end), false) {
            return Ok(None);
        }

        let start = match before {
            Some(n) if negate_left => n,
            _ => left.range.start,
        };
        let mut position = self.position(i, vec![left, right.clone()], start..right.range.end);
        position.negate_left = negate_left;
        Ok(Some(Action::Reduce(position)))
    }

    /// `a = b`, when both sides are numbers.
    fn equality(&self, i: usize) -> Result<Option<Action>, Error> {
        let Some((left, right)) = self.infix_operands(i, Op::Eq)? else {
            return Ok(None);
        };
        if !matches!((left.single(), right.single()), (Some(Term::Number(_)), Some(Term::Number(_))))
            || left.is_multi_token()
            || right.is_multi_token()
            || self.blocked(Op::Eq, &left, &right)
        {
            return Ok(None);
        }

        let range = left.range.start..right.range.end;
        Ok(Some(Action::Reduce(self.position(i, vec![left, right], range))))
    }

    /// `\sqrt{a}`, `\sin a`, ...
    fn prefix(&self, i: usize, op: Op) -> Result<Option<Action>, Error> {
        let j = i + 1;
        if j >= self.range.end {
            return Err(self.missing(i, op));
        }

        let token = &self.seq.tokens()[j];
        let slot = if token.is_value() {
            self.value(j).map_or(Slot::Missing, Slot::Ready)
        } else if token.is_open() {
            match self.seq.partner(j) {
                Some(close) => self.group(j, close),
                None => Slot::Missing,
            }
        } else if token.op().map_or(false, |op| op.layout() != Layout::Infix) {
            Slot::Pending
        } else {
            Slot::Missing
        };

        match slot {
            Slot::Missing => Err(self.missing(i, op)),
            Slot::Ready(operand) if operand.single().is_some() => {
                let range = i..operand.range.end;
                Ok(Some(Action::Reduce(self.position(i, vec![operand], range))))
            },
            _ => Ok(None),
        }
    }

    /// `\frac{a}{b}`
    fn fraction(&self, i: usize) -> Result<Option<Action>, Error> {
        let (Some((num_open, num_close)), Some((den_open, den_close))) =
            (self.seq.first_group(i), self.seq.second_group(i))
        else {
            return Err(self.missing(i, Op::Frac));
        };
        let (Slot::Ready(num), Slot::Ready(den)) =
            (self.group(num_open, num_close), self.group(den_open, den_close))
        else {
            return Ok(None);
        };

        let range = i..den_close + 1;
        match (num.single(), den.single()) {
            (Some(a), Some(b)) if divisible(a, b) => {
                Ok(Some(Action::Reduce(self.position(i, vec![num, den], range))))
            },
            (None, Some(Term::Number(_))) => Ok(Some(Action::Expand(Expansion::Distribute {
                range,
                op: Op::Div,
                left: num.terms,
                right: den.terms,
            }))),
            // a sum containing the variable in the denominator is cleared by rearranging
            _ => Ok(None),
        }
    }

    /// `\binom{n}{k}`, `binom(n, k)`, or `binom(n, k, p)`
    fn binomial(&self, i: usize) -> Result<Option<Action>, Error> {
        let Some((open, close)) = self.seq.first_group(i) else {
            return Err(self.missing(i, Op::Binom));
        };

        if let Some((second_open, second_close)) = self.seq.second_group(i) {
            let (Slot::Ready(n), Slot::Ready(k)) =
                (self.group(open, close), self.group(second_open, second_close))
            else {
                return Ok(None);
            };
            if n.single().is_none() || k.single().is_none() {
                return Ok(None);
            }
            let range = i..second_close + 1;
            return Ok(Some(Action::Reduce(self.position(i, vec![n, k], range))));
        }

        let Some(args) = self.arguments(i, open, close)? else {
            return Ok(None);
        };
        if !(2..=3).contains(&args.len()) {
            return Err(Error::new(
                vec![self.seq.tokens()[i].span.clone()],
                ArgumentCount { op: Op::Binom.name(), expected: "2 or 3", given: args.len() },
            ));
        }
        Ok(Some(Action::Reduce(self.position(i, args, i..close + 1))))
    }

    /// Splits the contents of the group into comma-separated arguments. Returns [`None`] if any
    /// argument is not a single value yet.
    fn arguments(&self, i: usize, open: usize, close: usize) -> Result<Option<Vec<Operand>>, Error> {
        let inner = Window { seq: self.seq, range: open + 1..close };
        let top_level = inner.top_level();

        let mut args = Vec::new();
        for part in top_level.split(|&j| self.seq.tokens()[j].is_op(Op::Comma)) {
            match part {
                [] => return Err(self.missing(i, Op::Binom)),
                [j] => match self.value(*j) {
                    Some(operand) => args.push(operand),
                    None => return Ok(None),
                },
                _ => return Ok(None),
            }
        }
        Ok(Some(args))
    }

    /// Returns a regroup action for the first sum in the window whose like terms are not next to
    /// each other.
    fn regroup(&self, top_level: &[usize]) -> Option<Action> {
        let tokens = self.seq.tokens();
        let segments = top_level.split(|&j| tokens[j].is_op(Op::Eq) || tokens[j].is_op(Op::Comma));

        for segment in segments {
            let (Some(&start), Some(&last)) = (segment.first(), segment.last()) else {
                continue;
            };
            // segments containing a group are not plain sums
            if last + 1 - start != segment.len() {
                continue;
            }
            let Some(terms) = signed_terms(&tokens[start..last + 1]) else {
                continue;
            };
            if !has_separated_like_terms(&terms) {
                continue;
            }

            let mut sorted = terms;
            sorted.sort_by(term_order);
            return Some(Action::Regroup { range: start..last + 1, terms: sorted });
        }

        None
    }
}

/// Returns true if `a / b` can be reduced to a single term.
fn divisible(a: &Term, b: &Term) -> bool {
    match (a, b) {
        (_, Term::Number(_)) => true,
        (Term::Variable(x), Term::Variable(y)) => x.name == y.name && y.exponent <= x.exponent,
        _ => false,
    }
}

/// Returns true if some pair of like terms is separated by another term.
fn has_separated_like_terms(terms: &[Term]) -> bool {
    terms.iter()
        .enumerate()
        .any(|(i, a)| terms.iter().skip(i + 2).any(|b| a.is_like(b)))
}

/// The order of terms in a regrouped sum: variables by name, higher powers first, then numbers.
fn term_order(a: &Term, b: &Term) -> Ordering {
    match (a, b) {
        (Term::Variable(x), Term::Variable(y)) => {
            x.name.cmp(&y.name).then(y.exponent.cmp(&x.exponent))
        },
        (Term::Variable(_), Term::Number(_)) => Ordering::Less,
        (Term::Number(_), Term::Variable(_)) => Ordering::Greater,
        (Term::Number(_), Term::Number(_)) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use texcas_parser::{token::Variable, tokenizer::tokenize};

    fn action(input: &str) -> Option<Action> {
        let mut seq = tokenize(input).unwrap();
        seq.fuse();
        resolve(&seq).unwrap()
    }

    fn reduced_op(input: &str) -> Option<(Op, Range<usize>)> {
        match action(input)? {
            Action::Reduce(position) => Some((position.op, position.range)),
            _ => None,
        }
    }

    fn message(input: &str) -> String {
        let mut seq = tokenize(input).unwrap();
        seq.fuse();
        resolve(&seq).unwrap_err().message()
    }

    #[test]
    fn precedence_tiers() {
        assert_eq!(reduced_op("2+3\\cdot4"), Some((Op::Mul, 2..5)));
        assert_eq!(reduced_op("2\\cdot3^{2}"), Some((Op::Pow, 2..5)));
        assert_eq!(reduced_op("1+\\sin30"), Some((Op::Sin, 2..4)));
        assert_eq!(reduced_op("1-2+3"), Some((Op::Sub, 0..3)));
    }

    #[test]
    fn innermost_group_first() {
        assert_eq!(reduced_op("2\\cdot(3\\cdot(4-1))"), Some((Op::Sub, 6..9)));
    }

    #[test]
    fn negated_left_operand() {
        let Some(Action::Reduce(position)) = action("x-3+2") else {
            panic!("expected a reduction");
        };
        assert_eq!(position.op, Op::Add);
        assert!(position.negate_left);
        assert_eq!(position.range, 1..5);
    }

    #[test]
    fn unlike_terms_are_skipped() {
        assert_eq!(action("x+1"), None);
        assert_eq!(action("3+4\\div x"), None);
    }

    #[test]
    fn division_by_variable() {
        assert_eq!(action("2\\div x"), None);
        assert_eq!(reduced_op("x^{2}\\div x"), Some((Op::Pow, 0..3)));
        assert_eq!(reduced_op("6\\div x\\cdot 2"), None);
    }

    #[test]
    fn distribution() {
        assert_eq!(action("(x+1)(x+3)"), Some(Action::Expand(Expansion::Distribute {
            range: 0..11,
            op: Op::Mul,
            left: vec![Term::Variable(Variable::new("x")), Term::Number(1.0)],
            right: vec![Term::Variable(Variable::new("x")), Term::Number(3.0)],
        })));
        assert_eq!(action("\\frac{x+4}{2}"), Some(Action::Expand(Expansion::Distribute {
            range: 0..8,
            op: Op::Div,
            left: vec![Term::Variable(Variable::new("x")), Term::Number(4.0)],
            right: vec![Term::Number(2.0)],
        })));
        assert_eq!(action("\\frac{132}{1260+x}"), None);
    }

    #[test]
    fn repeated_groups() {
        assert_eq!(action("(x+1)^{3}"), Some(Action::Expand(Expansion::Repeat {
            range: 0..7,
            group: 1..4,
            count: 3,
        })));
    }

    #[test]
    fn regroup_like_terms() {
        // powers are reduced before anything is reordered
        assert_eq!(reduced_op("3+x+2+x^{2}=1"), Some((Op::Pow, 6..9)));

        assert_eq!(action("3+x+2"), Some(Action::Regroup {
            range: 0..5,
            terms: vec![
                Term::Variable(Variable::new("x")),
                Term::Number(3.0),
                Term::Number(2.0),
            ],
        }));
    }

    #[test]
    fn equality_of_numbers() {
        assert_eq!(reduced_op("4=4"), Some((Op::Eq, 0..3)));
        assert_eq!(action("x=4"), None);
    }

    #[test]
    fn binomial_forms() {
        assert_eq!(reduced_op("\\binom{5}{2}"), Some((Op::Binom, 0..7)));
        assert_eq!(reduced_op("binom(5,2,0.5)"), Some((Op::Binom, 0..8)));
        assert_eq!(message("binom(5)"), "`binom` takes 2 or 3 arguments, but 1 were given");
    }

    #[test]
    fn semantic_errors() {
        assert_eq!(message("2+"), "the `+` operator is missing an operand: operand must have a value");
        assert_eq!(message("\\sin"), "the `sin` operator is missing an operand: operand must have a value");
        assert_eq!(message("2^x"), "unsupported exponent");
        assert_eq!(message("x\\cdot y"), "expressions with multiple variables (x, y) are not supported yet");
    }
}
