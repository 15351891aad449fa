//! Moving the terms of an equation across the `=` to isolate its variable.

use crate::error::CannotIsolate;
use std::ops::Range;
use texcas_error::Error;
use texcas_parser::{
    registry::Op,
    sequence::{signed_terms, sum_tokens, wrap_group},
    token::{span_of, Term, Token, TokenKind},
    TokenSeq,
};

/// Rewrites the equation in the sequence so that it is closer to `terms of variable = number`.
///
/// If one side of the equation is a fraction with the variable in its denominator, the
/// denominator is cleared first: `\frac{N}{D} = R` becomes `N = R \cdot (D)`. Otherwise, both
/// sides must be sums of terms; the terms containing the variable are moved to the left side and
/// every other term is moved to the right side, negating the terms that cross the `=`.
///
/// Returns an error if neither rewrite applies, or if the rewrite would not change the equation.
pub fn rearrange(seq: &mut TokenSeq, variable: &str) -> Result<(), Error> {
    let span = span_of(seq.tokens());
    let cannot_isolate = || Error::new(vec![span.clone()], CannotIsolate { variable: variable.to_string() });
    let Some(eq) = seq.tokens().iter().position(|token| token.is_op(Op::Eq)) else {
        return Err(cannot_isolate());
    };
    let left = 0..eq;
    let right = eq + 1..seq.len();

    if clear_denominator(seq, left.clone(), right.clone(), variable) {
        tracing::debug!(variable, "cleared denominator");
        return Ok(());
    }

    let tokens = seq.tokens();
    let (Some(left_terms), Some(right_terms)) =
        (signed_terms(&tokens[left.clone()]), signed_terms(&tokens[right.clone()]))
    else {
        return Err(cannot_isolate());
    };

    let has_variable = |term: &&Term| term.variable_name() == Some(variable);
    let new_left = left_terms.iter()
        .filter(has_variable)
        .cloned()
        .chain(right_terms.iter().filter(has_variable).map(Term::negated))
        .collect::<Vec<_>>();
    let mut new_right = right_terms.iter()
        .filter(|term| !has_variable(term))
        .cloned()
        .chain(left_terms.iter().filter(|term| !has_variable(term)).map(Term::negated))
        .collect::<Vec<_>>();
    if new_right.is_empty() {
        new_right.push(Term::Number(0.0));
    }

    if new_left == left_terms && new_right == right_terms {
        return Err(cannot_isolate());
    }

    let mut rearranged = sum_tokens(&new_left, span_of(&tokens[left]));
    rearranged.push(tokens[eq].clone());
    rearranged.extend(sum_tokens(&new_right, span_of(&tokens[right])));

    tracing::debug!(variable, moved = new_left.len() + new_right.len(), "moved terms across `=`");
    let len = seq.len();
    seq.splice(0..len, rearranged);
    Ok(())
}

/// Clears the denominator of whichever side of the equation is a fraction with the variable in its
/// denominator. Returns true if one was found.
fn clear_denominator(seq: &mut TokenSeq, left: Range<usize>, right: Range<usize>, variable: &str) -> bool {
    for (side, other, side_is_left) in [(left.clone(), right.clone(), true), (right, left, false)] {
        let Some((numerator, denominators)) = fraction_parts(seq, side) else {
            continue;
        };
        if !denominators.iter().any(|den| contains_variable(&seq.tokens()[den.clone()], variable)) {
            continue;
        }

        let numerator = seq.tokens()[numerator].to_vec();
        let mut other = seq.tokens()[other].to_vec();
        if other.len() > 1 {
            other = wrap_group(other, seq.fresh_group());
        }
        let eq = seq.tokens()
            .iter()
            .find(|token| token.is_op(Op::Eq))
            .cloned()
            .unwrap_or_else(|| Token::operator(Op::Eq, 0..0));

        let mut product = other;
        for den in denominators {
            let den = wrap_group(seq.tokens()[den].to_vec(), seq.fresh_group());
            product.push(Token::operator(Op::Mul, span_of(&den)));
            product.extend(den);
        }

        let rearranged = if side_is_left {
            numerator.into_iter().chain([eq]).chain(product).collect::<Vec<_>>()
        } else {
            product.into_iter().chain([eq]).chain(numerator).collect()
        };
        let len = seq.len();
        seq.splice(0..len, rearranged);
        return true;
    }
    false
}

/// If the side is exactly `\frac{N}{D}` or `N / D_1 / D_2 ...`, returns the ranges of the tokens of
/// `N` and of every `D`, without any parentheses around them.
fn fraction_parts(seq: &TokenSeq, side: Range<usize>) -> Option<(Range<usize>, Vec<Range<usize>>)> {
    if side.is_empty() {
        return None;
    }
    let tokens = seq.tokens();
    let first = &tokens[side.start];

    if first.is_op(Op::Frac) {
        let (num_open, num_close) = seq.first_group(side.start)?;
        let (den_open, den_close) = seq.second_group(side.start)?;
        if den_close + 1 != side.end {
            return None;
        }
        return Some((num_open + 1..num_close, vec![den_open + 1..den_close]));
    }

    // `N / D_1 / D_2 ...`, where each of `N` and `D_i` is a single value or group
    let end_of = |i: usize| if tokens[i].is_open() { seq.partner(i) } else { Some(i) };
    let numerator_end = end_of(side.start)?;
    let mut denominators = Vec::new();
    let mut div = numerator_end + 1;
    while div < side.end {
        if !tokens[div].is_op(Op::Div) || div + 1 >= side.end {
            return None;
        }
        let denominator_end = end_of(div + 1)?;
        if denominator_end >= side.end {
            return None;
        }
        denominators.push(strip_group(tokens, div + 1..denominator_end + 1));
        div = denominator_end + 1;
    }
    if denominators.is_empty() {
        return None;
    }

    Some((strip_group(tokens, side.start..numerator_end + 1), denominators))
}

/// Returns the range inside the parentheses if the range is exactly one group.
fn strip_group(tokens: &[Token], range: Range<usize>) -> Range<usize> {
    if range.len() >= 2 && tokens[range.start].is_open() && tokens[range.end - 1].is_close() {
        range.start + 1..range.end - 1
    } else {
        range
    }
}

fn contains_variable(tokens: &[Token], variable: &str) -> bool {
    tokens.iter().any(|token| matches!(&token.kind, TokenKind::Variable(var) if var.name == variable))
}
