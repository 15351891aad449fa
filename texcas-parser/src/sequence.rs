//! The live token array that evaluation reduces, one splice at a time.

use crate::{
    latex::{fmt_number, Latex, LatexWriter},
    paren::{self, Group},
    registry::{BracketStyle, Layout, Op},
    token::{span_of, Term, Token, TokenKind},
};
use std::{fmt::{self, Formatter}, ops::Range};

/// An ordered sequence of tokens, representing the current state of an expression.
///
/// Parentheses in the sequence are always well-nested, and every group id appears on exactly one
/// opening and one closing parenthesis. The sequence is only modified through [`TokenSeq::splice`]
/// and [`TokenSeq::fuse`], which both preserve this.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSeq {
    /// The tokens.
    tokens: Vec<Token>,

    /// The next unused group id.
    next_group: usize,
}

impl TokenSeq {
    /// Creates a sequence from tokens whose parentheses have already been assigned group ids below
    /// `next_group`.
    pub fn from_parts(tokens: Vec<Token>, next_group: usize) -> Self {
        Self { tokens, next_group }
    }

    /// Returns the tokens of the sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of tokens in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the sequence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at the given index.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Reserves a group id that is not used by any parenthesis in the sequence, for use by
    /// parentheses in a replacement passed to [`TokenSeq::splice`].
    pub fn fresh_group(&mut self) -> usize {
        self.next_group += 1;
        self.next_group - 1
    }

    /// Replaces the tokens in the given range with the replacement tokens.
    pub fn splice(&mut self, range: Range<usize>, replacement: impl IntoIterator<Item = Token>) {
        self.tokens.splice(range, replacement);
        debug_assert!(self.is_balanced(), "splice broke parenthesis matching");
    }

    /// Returns the index of the parenthesis matching the one at `index`.
    pub fn partner(&self, index: usize) -> Option<usize> {
        paren::partner(&self.tokens, index)
    }

    /// Returns every group in the sequence, ordered by the position of their opening parenthesis.
    pub fn groups(&self) -> Vec<Group> {
        paren::groups(&self.tokens)
    }

    /// Returns true if the parentheses of the sequence are well-nested and id-matched.
    pub fn is_balanced(&self) -> bool {
        paren::is_balanced(&self.tokens)
    }

    /// Returns the index and kind of the operator that owns the group opened at `open`, if any.
    ///
    /// A group is owned by a prefix operator directly before it (`\sqrt{...}`), by a `^` directly
    /// before it, or by the two-group operator whose first group directly precedes it (the
    /// denominator of `\frac{...}{...}`).
    pub fn group_owner(&self, open: usize) -> Option<(usize, Op)> {
        let before = open.checked_sub(1)?;
        let token = &self.tokens[before];

        if let Some(op) = token.op() {
            return match op.layout() {
                Layout::Prefix | Layout::PrefixTwoGroups => Some((before, op)),
                Layout::Infix if op == Op::Pow => Some((before, op)),
                Layout::Infix => None,
            };
        }

        if token.is_close() {
            let first = self.partner(before)?;
            let owner = first.checked_sub(1)?;
            let op = self.tokens[owner].op()?;
            if op.layout() == Layout::PrefixTwoGroups {
                return Some((owner, op));
            }
        }

        None
    }

    /// Returns the first operand group of the prefix operator at `op_index`, as the indices of its
    /// opening and closing parentheses.
    pub fn first_group(&self, op_index: usize) -> Option<(usize, usize)> {
        let open = op_index + 1;
        if !self.tokens.get(open)?.is_open() {
            return None;
        }
        Some((open, self.partner(open)?))
    }

    /// Returns the second operand group of the two-group operator at `op_index`, as the indices of
    /// its opening and closing parentheses. Returns [`None`] if the operator is followed by a
    /// single group, such as in `binom(5, 2)`.
    pub fn second_group(&self, op_index: usize) -> Option<(usize, usize)> {
        let (_, first_close) = self.first_group(op_index)?;
        let open = first_close + 1;
        if !self.tokens.get(open)?.is_open() {
            return None;
        }
        Some((open, self.partner(open)?))
    }

    /// Returns how the group opened at `open` is rendered.
    fn bracket_style(&self, open: usize) -> BracketStyle {
        match self.group_owner(open) {
            Some((owner, Op::Binom)) if self.second_group(owner).is_none() => BracketStyle::Paren,
            Some((_, op)) => op.info().brackets,
            None => BracketStyle::Paren,
        }
    }

    /// Renders the tokens in the given range as LaTeX.
    ///
    /// Each token is rendered in the context of the whole sequence, so a range that cuts through
    /// a group still renders the brackets it does contain in the right style.
    pub fn render(&self, range: Range<usize>) -> String {
        let mut writer = LatexWriter::new();

        for i in range {
            let token = &self.tokens[i];
            let after_pow = i > 0 && self.tokens[i - 1].is_op(Op::Pow);
            let mut push_value = |value: String| if after_pow {
                writer.push(&format!("{{{}}}", value));
            } else {
                writer.push(&value);
            };

            match &token.kind {
                TokenKind::Number(n) => push_value(fmt_number(*n)),
                TokenKind::Variable(var) => push_value(var.as_display().to_string()),
                TokenKind::Operator(op) => {
                    if op.op == Op::Binom && self.second_group(i).is_none() {
                        writer.push(op.op.name());
                    } else {
                        writer.push(op.op.info().latex);
                    }
                },
                TokenKind::Paren(_) => {
                    let open = if token.is_open() { Some(i) } else { self.partner(i) };
                    let style = open.map_or(BracketStyle::Paren, |open| self.bracket_style(open));
                    writer.push(match (style, token.is_open()) {
                        (BracketStyle::Brace, true) => "{",
                        (BracketStyle::Brace, false) => "}",
                        (BracketStyle::Paren, true) => "\\left(",
                        (BracketStyle::Paren, false) => "\\right)",
                    });
                },
            }
        }

        writer.finish()
    }

    /// Renders the whole sequence as LaTeX.
    pub fn reconstruct(&self) -> String {
        self.render(0..self.tokens.len())
    }

    /// Simplifies the shape of the sequence without evaluating anything, until no more changes
    /// apply:
    ///
    /// - redundant parentheses around a single value, or around a sum that is itself a term of a
    ///   sum, are removed,
    /// - a `+` or `-` followed by a negative term is flipped (`2 - -3` becomes `2 + 3`).
    ///
    /// Returns true if anything changed.
    pub fn fuse(&mut self) -> bool {
        let mut changed = false;
        while self.unwrap_group() || self.normalize_sign() {
            changed = true;
        }
        changed
    }

    /// Removes one redundant pair of parentheses. Returns true if one was found.
    fn unwrap_group(&mut self) -> bool {
        for group in self.groups() {
            if let Some(inner) = self.unwrapped(group) {
                self.tokens.splice(group.open..group.close + 1, inner);
                return true;
            }
        }
        false
    }

    /// Returns the tokens that replace the given group if its parentheses are redundant.
    fn unwrapped(&self, group: Group) -> Option<Vec<Token>> {
        let inner = &self.tokens[group.open + 1..group.close];
        let owner = self.group_owner(group.open).map(|(_, op)| op);
        let before = group.open.checked_sub(1).map(|i| &self.tokens[i]);
        let after = self.tokens.get(group.close + 1);

        if let [value] = inner {
            let term = value.as_term()?;
            let owned_by_function = owner.map_or(false, |op| op.layout() != Layout::Infix);
            let power_follows = after.map_or(false, |token| token.is_op(Op::Pow));
            if owned_by_function || (power_follows && !is_bare_base(&term)) {
                return None;
            }
            return Some(vec![value.clone()]);
        }

        signed_terms(inner)?;
        if owner.is_some() {
            return None;
        }

        let left_bounded = before.map_or(true, |token| {
            token.is_open() || token.op().map_or(false, is_sum_boundary)
        });
        let right_bounded = after.map_or(true, |token| {
            token.is_close() || token.op().map_or(false, is_sum_boundary)
        });
        if !left_bounded || !right_bounded {
            return None;
        }

        let negate = before.map_or(false, |token| token.is_op(Op::Sub));
        Some(inner.iter()
            .map(|token| match token.op() {
                Some(Op::Add) if negate => Token::operator(Op::Sub, token.span.clone()),
                Some(Op::Sub) if negate => Token::operator(Op::Add, token.span.clone()),
                _ => token.clone(),
            })
            .collect())
    }

    /// Flips one binary `+` or `-` that is followed by a negative term. Returns true if one was
    /// found.
    fn normalize_sign(&mut self) -> bool {
        for i in 1..self.tokens.len().saturating_sub(1) {
            let Some(op) = self.tokens[i].op().filter(|op| op.is_additive()) else {
                continue;
            };
            if !self.tokens[i - 1].ends_value() {
                continue;
            }
            let Some(term) = self.tokens[i + 1].as_term().filter(Term::is_negative) else {
                continue;
            };
            if self.tokens.get(i + 2).map_or(false, |token| token.is_op(Op::Pow)) {
                continue;
            }

            let flipped = if op == Op::Add { Op::Sub } else { Op::Add };
            let term_span = self.tokens[i + 1].span.clone();
            self.tokens[i] = Token::operator(flipped, self.tokens[i].span.clone());
            self.tokens[i + 1] = Token::term(term.negated(), term_span);
            return true;
        }
        false
    }
}

impl Latex for TokenSeq {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.reconstruct())
    }
}

/// Returns true if the operator separates the terms of a sum from what surrounds it.
fn is_sum_boundary(op: Op) -> bool {
    matches!(op, Op::Add | Op::Sub | Op::Eq | Op::Comma)
}

/// Returns true if the term can be the base of a power without parentheses: a non-negative number,
/// or a variable without a coefficient or exponent.
fn is_bare_base(term: &Term) -> bool {
    match term {
        Term::Number(n) => *n >= 0.0,
        Term::Variable(var) => var.coefficient == 1.0 && var.exponent == 1,
    }
}

/// Reads the tokens as a sum of terms, `t1 ± t2 ± ...`, returning each term with the sign of the
/// operator before it applied. Returns [`None`] if the tokens contain anything else.
pub fn signed_terms(tokens: &[Token]) -> Option<Vec<Term>> {
    if tokens.len() % 2 == 0 {
        return None;
    }

    let mut terms = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut negate = false;
    for (i, token) in tokens.iter().enumerate() {
        if i % 2 == 0 {
            let term = token.as_term()?;
            terms.push(if negate { term.negated() } else { term });
        } else {
            negate = match token.op()? {
                Op::Add => false,
                Op::Sub => true,
                _ => return None,
            };
        }
    }
    Some(terms)
}

/// Builds the tokens of the sum of the given terms. Negative terms after the first are written
/// with a `-` operator. All tokens receive the given span.
pub fn sum_tokens(terms: &[Term], span: Range<usize>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(terms.len() * 2);
    for (i, term) in terms.iter().enumerate() {
        if i == 0 {
            tokens.push(Token::term(term.clone(), span.clone()));
        } else if term.is_negative() {
            tokens.push(Token::operator(Op::Sub, span.clone()));
            tokens.push(Token::term(term.negated(), span.clone()));
        } else {
            tokens.push(Token::operator(Op::Add, span.clone()));
            tokens.push(Token::term(term.clone(), span.clone()));
        }
    }
    tokens
}

/// Wraps the tokens in a new pair of parentheses with the given group id. The parentheses receive
/// the span covering the tokens.
pub fn wrap_group(tokens: Vec<Token>, group: usize) -> Vec<Token> {
    use crate::token::ParenRole;

    let span = span_of(&tokens);
    let mut wrapped = Vec::with_capacity(tokens.len() + 2);
    wrapped.push(Token::paren(ParenRole::Open, group, span.clone()));
    wrapped.extend(tokens);
    wrapped.push(Token::paren(ParenRole::Close, group, span));
    wrapped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::{token::Variable, tokenizer::tokenize};

    fn reconstruct(input: &str) -> String {
        tokenize(input).unwrap().reconstruct()
    }

    fn fused(input: &str) -> String {
        let mut seq = tokenize(input).unwrap();
        seq.fuse();
        assert!(seq.is_balanced());
        seq.reconstruct()
    }

    #[test]
    fn reconstruct_macros() {
        assert_eq!(
            reconstruct("2\\frac{(5-3)34}{\\sqrt{2^{2}}}0.5"),
            "2\\cdot\\frac{\\left(5-3\\right)\\cdot34}{\\sqrt{2^{2}}}\\cdot0.5",
        );
        assert_eq!(reconstruct("\\binom{5}{2}"), "\\binom{5}{2}");
        assert_eq!(reconstruct("binom(5,2,0.5)"), "binom\\left(5,2,0.5\\right)");
        assert_eq!(reconstruct("\\sin 30 + \\cos(x)"), "\\sin30+\\cos\\left(x\\right)");
    }

    #[test]
    fn reconstruct_powers() {
        assert_eq!(reconstruct("x^2"), "x^{2}");
        assert_eq!(reconstruct("2^-3"), "2^{-3}");
        assert_eq!(reconstruct("-x x"), "-1\\cdot x^{2}");
        assert_eq!(reconstruct("3 \\div y_1"), "3\\div y_{1}");
    }

    #[test]
    fn fuse_single_values() {
        assert_eq!(fused("2\\cdot(3)+(x)"), "2\\cdot3+x");
        assert_eq!(fused("\\sqrt{(4)}"), "\\sqrt{4}");
        assert_eq!(fused("(-3)^{2}"), "\\left(-3\\right)^{2}");
        assert_eq!(fused("(x x)^{3}"), "\\left(x^{2}\\right)^{3}");
        assert_eq!(fused("\\frac{1}{2}"), "\\frac{1}{2}");
    }

    #[test]
    fn fuse_sums() {
        assert_eq!(fused("(x+1)+2"), "x+1+2");
        assert_eq!(fused("5-(x+1)"), "5-x-1");
        assert_eq!(fused("(x+1)\\cdot2"), "\\left(x+1\\right)\\cdot2");
        assert_eq!(fused("(x+1)^{2}"), "\\left(x+1\\right)^{2}");
    }

    #[test]
    fn fuse_signs() {
        assert_eq!(fused("5-(-3)"), "5+3");
        assert_eq!(fused("2+-x"), "2-x");
        assert_eq!(fused("5-(-x+1)"), "5+x-1");
    }

    #[test]
    fn owners() {
        let seq = tokenize("\\frac{1}{2}+x^{3}").unwrap();
        assert_eq!(seq.group_owner(1), Some((0, Op::Frac)));
        assert_eq!(seq.group_owner(4), Some((0, Op::Frac)));
        assert_eq!(seq.second_group(0), Some((4, 6)));
        assert_eq!(seq.group_owner(10), Some((9, Op::Pow)));
    }

    #[test]
    fn splice_keeps_balance() {
        let mut seq = tokenize("1+2").unwrap();
        let group = seq.fresh_group();
        let replacement = wrap_group(vec![Token::number(3.0, 0..3)], group);
        seq.splice(0..3, replacement);
        assert!(seq.is_balanced());
        assert_eq!(seq.reconstruct(), "\\left(3\\right)");
    }

    #[test]
    fn terms_of_sums() {
        let seq = tokenize("x-2+3").unwrap();
        assert_eq!(signed_terms(seq.tokens()), Some(vec![
            Term::Variable(Variable::new("x")),
            Term::Number(-2.0),
            Term::Number(3.0),
        ]));
        assert_eq!(signed_terms(&seq.tokens()[..2]), None);

        let tokens = sum_tokens(&[Term::Number(1.0), Term::Number(-2.0)], 0..0);
        assert_eq!(signed_terms(&tokens), Some(vec![Term::Number(1.0), Term::Number(-2.0)]));
    }
}
