//! Rewriting sums in the sequence so that the resolver can reduce them term by term.

use crate::resolve::Expansion;
use std::ops::Range;
use texcas_parser::{
    registry::Op,
    sequence::{sum_tokens, wrap_group},
    token::{span_of, Operator, Term, Token, TokenKind},
    TokenSeq,
};

/// Applies the expansion to the sequence.
pub fn expand(seq: &mut TokenSeq, expansion: &Expansion) {
    match expansion {
        Expansion::Distribute { range, op, left, right } => distribute(seq, range.clone(), *op, left, right),
        Expansion::Repeat { range, group, count } => repeat(seq, range.clone(), group.clone(), *count),
    }
}

/// Replaces the sum in the given range with the same terms, in the given order.
pub fn regroup(seq: &mut TokenSeq, range: Range<usize>, terms: &[Term]) {
    let span = span_of(&seq.tokens()[range.clone()]);
    seq.splice(range, sum_tokens(terms, span));
}

/// Replaces the range with `(a1 op b1 ± a1 op b2 ± ...)`, combining every term of `left` with every
/// term of `right`. Each product is written with the magnitudes of its terms, and its sign is
/// moved to the operator in front of it.
fn distribute(seq: &mut TokenSeq, range: Range<usize>, op: Op, left: &[Term], right: &[Term]) {
    let span = span_of(&seq.tokens()[range.clone()]);
    let mut tokens = Vec::with_capacity(left.len() * right.len() * 4);

    for a in left {
        for b in right {
            let negative = a.is_negative() != b.is_negative();
            let a = a.with_coefficient(a.coefficient().abs());
            let b = b.with_coefficient(b.coefficient().abs());

            if tokens.is_empty() {
                tokens.push(Token::term(if negative { a.negated() } else { a }, span.clone()));
            } else {
                let sign = if negative { Op::Sub } else { Op::Add };
                tokens.push(Token::operator(sign, span.clone()));
                tokens.push(Token::term(a, span.clone()));
            }
            tokens.push(Token::operator(op, span.clone()));
            tokens.push(Token::term(b, span.clone()));
        }
    }

    let group = seq.fresh_group();
    seq.splice(range, wrap_group(tokens, group));
}

/// Replaces the range with `count` copies of the group, multiplied together and wrapped in a new
/// group.
fn repeat(seq: &mut TokenSeq, range: Range<usize>, group: Range<usize>, count: u32) {
    let span = span_of(&seq.tokens()[range.clone()]);
    if count == 0 {
        seq.splice(range, [Token::number(1.0, span)]);
        return;
    }

    let inner = seq.tokens()[group].to_vec();
    let mut tokens = Vec::new();
    for i in 0..count {
        if i > 0 {
            let operator = Operator { op: Op::Mul, modifier: None, implicit: true };
            tokens.push(Token::new(TokenKind::Operator(operator), span.clone()));
        }
        let id = seq.fresh_group();
        tokens.extend(wrap_group(inner.clone(), id));
    }

    let outer = seq.fresh_group();
    seq.splice(range, wrap_group(tokens, outer));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::resolve::{resolve, Action};
    use texcas_parser::tokenizer::tokenize;

    /// Applies the first action of the input, which must be an expansion or a regroup.
    fn expanded(input: &str) -> String {
        let mut seq = tokenize(input).unwrap();
        seq.fuse();
        match resolve(&seq).unwrap() {
            Some(Action::Expand(expansion)) => expand(&mut seq, &expansion),
            Some(Action::Regroup { range, terms }) => regroup(&mut seq, range, &terms),
            other => panic!("expected an expansion, got {:?}", other),
        }
        assert!(seq.is_balanced());
        seq.reconstruct()
    }

    #[test]
    fn distribute_products() {
        assert_eq!(
            expanded("(x+1)(x+3)"),
            "\\left(x\\cdot x+x\\cdot3+1\\cdot x+1\\cdot3\\right)",
        );
        assert_eq!(
            expanded("(x-1)(x-2)"),
            "\\left(x\\cdot x-x\\cdot2-1\\cdot x+1\\cdot2\\right)",
        );
        assert_eq!(expanded("2(x+1)"), "\\left(2\\cdot x+2\\cdot1\\right)");
    }

    #[test]
    fn distribute_quotients() {
        assert_eq!(expanded("\\frac{x-4}{2}"), "\\left(x\\div2-4\\div2\\right)");
    }

    #[test]
    fn repeat_groups() {
        assert_eq!(
            expanded("(x+1)^{2}"),
            "\\left(\\left(x+1\\right)\\cdot\\left(x+1\\right)\\right)",
        );
        assert_eq!(expanded("(x+1)^{0}"), "1");
    }

    #[test]
    fn regroup_terms() {
        assert_eq!(expanded("3+x+2"), "x+3+2");
    }
}
