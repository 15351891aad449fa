//! Turns a LaTeX-flavored expression into a [`TokenSeq`].
//!
//! Tokenizing happens in two stages. The [`lexeme`] module splits the input into raw lexemes
//! (commands, names, numbers, symbols, brackets). The [`Tokenizer`] then resolves each lexeme
//! against the operator registry, and post-processes the resulting tokens:
//!
//! 1. parentheses are assigned matching group ids,
//! 2. adjacent occurrences of the same variable are fused (`x x` is `x^{2}`),
//! 3. unary signs are absorbed into the literal that follows them,
//! 4. implicit multiplication is inserted between adjacent values.
//!
//! Syntax errors are collected, so that every problem in the input is reported at once.

pub mod lexeme;

use crate::{
    error::{
        EmptyBrackets,
        EmptyInput,
        InvalidNumber,
        InvalidRootDegree,
        MisplacedSubscript,
        UnknownCharacter,
        UnknownCommand,
    },
    paren,
    registry::{self, Layout, Op, Symbol},
    sequence::TokenSeq,
    token::{join_spans, Operator, ParenRole, Token, TokenKind, Variable},
};
use lexeme::{lex_complete, Lexeme, LexemeKind};
use std::ops::Range;
use texcas_error::Error;

/// The maximum edit distance for a command to be suggested in place of an unknown one.
const SUGGESTION_DISTANCE: usize = 2;

/// Tokenizes the given expression.
///
/// Returns every syntax error found in the input if tokenizing fails.
pub fn tokenize(input: &str) -> Result<TokenSeq, Vec<Error>> {
    let mut tokenizer = Tokenizer::new(input);
    tokenizer.scan();
    let Tokenizer { mut tokens, mut errors, .. } = tokenizer;

    if tokens.is_empty() && errors.is_empty() {
        errors.push(Error::new(vec![0..input.len()], EmptyInput));
    }

    let next_group = match paren::assign_groups(&mut tokens, 0) {
        Ok(next_group) => next_group,
        Err(paren_errors) => {
            errors.extend(paren_errors);
            0
        },
    };

    if !errors.is_empty() {
        errors.sort_by_key(|err| err.spans.first().map_or(0, |span| span.start));
        return Err(errors);
    }

    fuse_variables(&mut tokens);
    absorb_signs(&mut tokens);
    insert_implicit_mul(&mut tokens);
    tracing::trace!(tokens = tokens.len(), "tokenized expression");

    Ok(TokenSeq::from_parts(tokens, next_group))
}

/// Resolves lexemes into tokens.
struct Tokenizer<'source> {
    /// The lexemes of the input.
    lexemes: Box<[Lexeme<'source>]>,

    /// The index of the **next** lexeme to be processed.
    cursor: usize,

    /// The tokens produced so far.
    tokens: Vec<Token>,

    /// The errors found so far.
    errors: Vec<Error>,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer over the given input.
    fn new(input: &'source str) -> Self {
        Self {
            lexemes: lex_complete(input),
            cursor: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Returns the index of the next lexeme that is not whitespace, without moving the cursor.
    fn peek_significant(&self) -> Option<usize> {
        (self.cursor..self.lexemes.len()).find(|&i| !self.lexemes[i].is_whitespace())
    }

    /// Returns the next lexeme that is not whitespace if it has the given kind, and advances the
    /// cursor past it.
    fn next_if(&mut self, kind: LexemeKind) -> Option<Lexeme<'source>> {
        let index = self.peek_significant()?;
        if self.lexemes[index].kind == kind {
            self.cursor = index + 1;
            Some(self.lexemes[index].clone())
        } else {
            None
        }
    }

    /// Records an error.
    fn error(&mut self, span: Range<usize>, kind: impl texcas_error::ErrorKind + 'static) {
        self.errors.push(Error::new(vec![span], kind));
    }

    /// Resolves every lexeme of the input.
    fn scan(&mut self) {
        while let Some(lexeme) = self.lexemes.get(self.cursor).cloned() {
            self.cursor += 1;
            match lexeme.kind {
                LexemeKind::Whitespace | LexemeKind::Spacing => (),
                LexemeKind::Number => self.number(lexeme),
                LexemeKind::Command => self.command(lexeme),
                LexemeKind::Name => self.name(lexeme),
                LexemeKind::Symbol => match registry::lookup_symbol(lexeme.text) {
                    Some(op) => self.tokens.push(Token::operator(op, lexeme.span)),
                    None => self.unknown(&lexeme),
                },
                LexemeKind::Underscore => self.error(lexeme.span, MisplacedSubscript),
                LexemeKind::Open => {
                    if let Some(close) = self.next_if(LexemeKind::Close) {
                        self.error(join_spans(&lexeme.span, &close.span), EmptyBrackets);
                    } else {
                        self.tokens.push(Token::paren(ParenRole::Open, 0, lexeme.span));
                    }
                },
                LexemeKind::Close => self.tokens.push(Token::paren(ParenRole::Close, 0, lexeme.span)),
                LexemeKind::Unknown => self.unknown(&lexeme),
            }
        }
    }

    /// Reports an unknown character.
    fn unknown(&mut self, lexeme: &Lexeme) {
        let character = lexeme.text.chars().next().unwrap_or_default();
        self.error(lexeme.span.clone(), UnknownCharacter { character, position: lexeme.span.start });
    }

    /// Numeric literal. Digits separated only by whitespace belong to the same literal, as they
    /// do in rendered LaTeX.
    fn number(&mut self, lexeme: Lexeme) {
        let mut text = lexeme.text.to_string();
        let mut span = lexeme.span;
        while let Some(next) = self.next_if(LexemeKind::Number) {
            text.push_str(next.text);
            span.end = next.span.end;
        }

        match text.parse::<f64>() {
            Ok(n) => self.tokens.push(Token::number(n, span)),
            Err(_) => self.error(span, InvalidNumber { lexeme: text }),
        }
    }

    /// Backslash command, such as `\frac` or `\cdot`.
    fn command(&mut self, lexeme: Lexeme) {
        let name = &lexeme.text[1..];
        match registry::lookup_command(name) {
            Some(symbol) => self.symbol(symbol, lexeme.span),
            None => {
                let mut suggestions = registry::command_names()
                    .filter(|candidate| levenshtein::levenshtein(candidate, name) <= SUGGESTION_DISTANCE)
                    .map(str::to_string)
                    .collect::<Vec<_>>();
                suggestions.dedup();
                self.error(lexeme.span, UnknownCommand { name: name.to_string(), suggestions });
            },
        }
    }

    /// Pushes the token(s) for a registry symbol.
    fn symbol(&mut self, symbol: Symbol, span: Range<usize>) {
        match symbol {
            Symbol::Layout => (),
            Symbol::Constant(value) => self.tokens.push(Token::number(value, span)),
            Symbol::Op(Op::Sqrt) => self.root(span),
            Symbol::Op(op) => self.tokens.push(Token::operator(op, span)),
        }
    }

    /// Root operator, with an optional degree in square brackets: `\sqrt[3]{x}`.
    fn root(&mut self, span: Range<usize>) {
        let mut operator = Operator::new(Op::Sqrt);
        let mut span = span;

        let degree_follows = self.peek_significant()
            .map_or(false, |i| self.lexemes[i].kind == LexemeKind::Open && self.lexemes[i].text == "[");
        if degree_follows {
            self.next_if(LexemeKind::Open);
            let degree = self.next_if(LexemeKind::Number);
            let close = self.next_if(LexemeKind::Close).filter(|close| close.text == "]");
            match (degree.and_then(|d| d.text.parse::<f64>().ok()), close) {
                (Some(degree), Some(close)) => {
                    operator.modifier = Some(degree);
                    span.end = close.span.end;
                },
                _ => {
                    self.error(span.clone(), InvalidRootDegree);
                    // skip to the closing bracket so its contents are not reported again
                    while let Some(lexeme) = self.lexemes.get(self.cursor) {
                        self.cursor += 1;
                        if lexeme.text == "]" {
                            break;
                        }
                    }
                },
            }
        }

        self.tokens.push(Token::new(TokenKind::Operator(operator), span));
    }

    /// A run of letters. Operator and constant spellings are split off first (`sinx` is `\sin x`);
    /// the remaining letters form variable names.
    fn name(&mut self, lexeme: Lexeme) {
        let word = lexeme.text;
        let start = lexeme.span.start;
        let mut offset = 0;

        while offset < word.len() {
            if let Some((symbol, len)) = registry::longest_word_prefix(&word[offset..]) {
                self.symbol(symbol, start + offset..start + offset + len);
                offset += len;
                continue;
            }

            let end = (offset + 1..word.len())
                .find(|&end| registry::longest_word_prefix(&word[end..]).is_some())
                .unwrap_or(word.len());
            let mut name = word[offset..end].to_string();
            let mut span = start + offset..start + end;

            if end == word.len() {
                if let Some((subscript, sub_span)) = self.subscript() {
                    name = format!("{}_{}", name, subscript);
                    span.end = sub_span.end;
                }
            }

            self.tokens.push(Token::new(TokenKind::Variable(Variable::new(name)), span));
            offset = end;
        }
    }

    /// Parses an optional subscript after a variable name: `_1`, `_a`, or `_{12}`.
    fn subscript(&mut self) -> Option<(String, Range<usize>)> {
        let underscore = self.next_if(LexemeKind::Underscore)?;
        let plain = self.next_if(LexemeKind::Number)
            .or_else(|| self.next_if(LexemeKind::Name));
        if let Some(plain) = plain {
            return Some((plain.text.to_string(), join_spans(&underscore.span, &plain.span)));
        }

        if self.next_if(LexemeKind::Open).is_some() {
            let mut subscript = String::new();
            while let Some(part) = self.next_if(LexemeKind::Number).or_else(|| self.next_if(LexemeKind::Name)) {
                subscript.push_str(part.text);
            }
            if let Some(close) = self.next_if(LexemeKind::Close) {
                if !subscript.is_empty() {
                    return Some((subscript, join_spans(&underscore.span, &close.span)));
                }
            }
        }

        self.error(underscore.span, MisplacedSubscript);
        None
    }
}

/// Fuses adjacent occurrences of the same variable, with no operator in between, into a single
/// variable (`x x` becomes `x^{2}`).
///
/// A variable that is the base or the exponent of a power is left alone, so `x x^{3}` stays
/// `x \cdot x^{3}`.
fn fuse_variables(tokens: &mut Vec<Token>) {
    let mut i = 0;
    while i + 1 < tokens.len() {
        let after_pow = i > 0 && tokens[i - 1].is_op(Op::Pow);
        let before_pow = tokens.get(i + 2).map_or(false, |token| token.is_op(Op::Pow));
        match (&tokens[i].kind, &tokens[i + 1].kind) {
            (TokenKind::Variable(a), TokenKind::Variable(b))
                if a.name == b.name && !after_pow && !before_pow =>
            {
                let fused = Variable {
                    name: a.name.clone(),
                    coefficient: a.coefficient * b.coefficient,
                    exponent: a.exponent + b.exponent,
                };
                let span = join_spans(&tokens[i].span, &tokens[i + 1].span);
                tokens.splice(i..i + 2, [Token::new(TokenKind::Variable(fused), span)]);
            },
            _ => i += 1,
        }
    }
}

/// Negates the number or variable held by the token.
fn negate(token: &mut Token) {
    match token.kind {
        TokenKind::Number(ref mut n) => *n = -*n,
        TokenKind::Variable(ref mut var) => var.coefficient = -var.coefficient,
        _ => (),
    }
}

/// Absorbs unary `+` and `-` signs.
///
/// A sign is unary when it does not follow a value. A unary sign directly before a literal is
/// folded into the literal, unless the literal is the base of a power (`-3^2` is `-(3^2)`) or a
/// fused power of a variable (`-x x` is `-1 \cdot x^{2}`, which is how `-x^{2}` reads back); a
/// unary minus before anything else becomes a multiplication by `-1`.
fn absorb_signs(tokens: &mut Vec<Token>) {
    let mut i = 0;
    while i < tokens.len() {
        let Some(op) = tokens[i].op().filter(|op| op.is_additive()) else {
            i += 1;
            continue;
        };

        let unary = i == 0 || !tokens[i - 1].ends_value();
        if !unary {
            i += 1;
            continue;
        }

        let literal_follows = tokens.get(i + 1).map_or(false, Token::is_value);
        let power_follows = tokens.get(i + 2).map_or(false, |token| token.is_op(Op::Pow))
            || tokens.get(i + 1).map_or(false, |token| {
                matches!(&token.kind, TokenKind::Variable(var) if var.exponent != 1)
            });
        let value_follows = tokens.get(i + 1).map_or(false, Token::starts_value);

        if literal_follows && !power_follows {
            let sign = tokens.remove(i);
            if op == Op::Sub {
                negate(&mut tokens[i]);
            }
            tokens[i].span = join_spans(&sign.span, &tokens[i].span);
            i += 1;
        } else if !value_follows {
            // nothing to apply the sign to; the resolver reports the missing operand
            i += 1;
        } else if op == Op::Add {
            tokens.remove(i);
        } else {
            let span = tokens[i].span.clone();
            let mul = Operator { implicit: true, ..Operator::new(Op::Mul) };
            tokens.splice(i..i + 1, [
                Token::number(-1.0, span.clone()),
                Token::new(TokenKind::Operator(mul), span),
            ]);
            i += 2;
        }
    }
}

/// Returns true if the tokens at `i` and `i + 1` are the closing parenthesis of the first group
/// of a two-group operator, such as `\frac`, and the opening parenthesis of its second group.
fn between_macro_groups(tokens: &[Token], i: usize) -> bool {
    if !tokens[i].is_close() || !tokens.get(i + 1).map_or(false, Token::is_open) {
        return false;
    }

    paren::partner(tokens, i)
        .and_then(|open| open.checked_sub(1))
        .and_then(|owner| tokens[owner].op())
        .map_or(false, |op| op.layout() == Layout::PrefixTwoGroups)
}

/// Inserts a multiplication operator between every value-ending token and the value-starting
/// token that follows it (`2x` is `2 \cdot x`).
fn insert_implicit_mul(tokens: &mut Vec<Token>) {
    let mut i = 0;
    while i + 1 < tokens.len() {
        if tokens[i].ends_value() && tokens[i + 1].starts_value() && !between_macro_groups(tokens, i) {
            let at = tokens[i + 1].span.start;
            let mul = Operator { implicit: true, ..Operator::new(Op::Mul) };
            tokens.insert(i + 1, Token::new(TokenKind::Operator(mul), at..at));
            i += 2;
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::token::Term;

    /// Describes each token in a compact, comparable form.
    fn describe(input: &str) -> Vec<String> {
        tokenize(input)
            .unwrap()
            .tokens()
            .iter()
            .map(|token| match &token.kind {
                TokenKind::Number(n) => n.to_string(),
                TokenKind::Variable(var) => format!("{}{}^{}", var.coefficient, var.name, var.exponent),
                TokenKind::Operator(op) if op.implicit => format!("{}'", op.op.name()),
                TokenKind::Operator(op) => op.op.name().to_string(),
                TokenKind::Paren(paren) if paren.role == ParenRole::Open => "(".to_string(),
                TokenKind::Paren(_) => ")".to_string(),
            })
            .collect()
    }

    fn messages(input: &str) -> Vec<String> {
        tokenize(input)
            .unwrap_err()
            .iter()
            .map(Error::message)
            .collect()
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(describe("2x"), ["2", "*'", "1x^1"]);
        assert_eq!(describe("(1)(2)"), ["(", "1", ")", "*'", "(", "2", ")"]);
        assert_eq!(describe("3\\sqrt{4}"), ["3", "*'", "sqrt", "(", "4", ")"]);
    }

    #[test]
    fn fraction_groups_are_not_multiplied() {
        assert_eq!(
            describe("\\frac{1}{2}x"),
            ["frac", "(", "1", ")", "(", "2", ")", "*'", "1x^1"],
        );
    }

    #[test]
    fn unary_signs() {
        assert_eq!(describe("-3+2"), ["-3", "+", "2"]);
        assert_eq!(describe("2\\cdot -x"), ["2", "*", "-1x^1"]);
        assert_eq!(describe("-3^2"), ["-1", "*'", "3", "^", "2"]);
        assert_eq!(describe("-(1)"), ["-1", "*'", "(", "1", ")"]);
        assert_eq!(describe("+4"), ["4"]);
    }

    #[test]
    fn fused_literals() {
        assert_eq!(describe("1 2.5"), ["12.5"]);
        assert_eq!(describe("x x"), ["1x^2"]);
        assert_eq!(describe("y y y"), ["1y^3"]);
    }

    #[test]
    fn powers_bind_before_fusion() {
        assert_eq!(describe("x x^{3}"), ["1x^1", "*'", "1x^1", "^", "(", "3", ")"]);
        assert_eq!(describe("x x x^{2}"), ["1x^2", "*'", "1x^1", "^", "(", "2", ")"]);
        assert_eq!(describe("2^x x"), ["2", "^", "1x^1", "*'", "1x^1"]);
    }

    #[test]
    fn negated_fused_power() {
        assert_eq!(describe("-x x"), ["-1", "*'", "1x^2"]);
        assert_eq!(describe("-x x^{2}"), ["-1x^1", "*'", "1x^1", "^", "(", "2", ")"]);

        let once = tokenize("-x x").unwrap().reconstruct();
        assert_eq!(once, "-1\\cdot x^{2}");
        assert_eq!(tokenize(&once).unwrap().reconstruct(), once);
    }

    #[test]
    fn words_and_commands() {
        assert_eq!(describe("sinx"), ["sin", "1x^1"]);
        assert_eq!(describe("\\left(a\\right)\\times b"), ["(", "1a^1", ")", "*", "1b^1"]);
        assert_eq!(describe("x_{12}+y_1"), ["1x_12^1", "+", "1y_1^1"]);
    }

    #[test]
    fn root_degree() {
        let seq = tokenize("\\sqrt[3]{8}").unwrap();
        assert_eq!(seq.tokens()[0].as_operator().and_then(|op| op.modifier), Some(3.0));
        assert_eq!(seq.tokens()[2].as_term(), Some(Term::Number(8.0)));
    }

    #[test]
    fn constants() {
        let seq = tokenize("\\pi").unwrap();
        assert_eq!(seq.tokens()[0].as_term(), Some(Term::Number(std::f64::consts::PI)));
    }

    #[test]
    fn unmatched_opening() {
        assert_eq!(messages("(2+3"), ["Unmatched opening bracket"]);
    }

    #[test]
    fn errors_are_collected() {
        assert_eq!(
            messages("2$+3)"),
            ["Unknown character `$` at position 1", "Unmatched closing bracket"],
        );
    }

    #[test]
    fn unknown_command_suggestions() {
        let errors = tokenize("\\fracc{1}{2}").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "unknown command `\\fracc`");
    }

    #[test]
    fn empty_input_and_brackets() {
        assert_eq!(messages("  "), ["nothing to evaluate"]);
        assert_eq!(messages("2+{}"), ["missing expression inside brackets"]);
        assert_eq!(messages("1.2.3"), ["invalid number `1.2.3`"]);
    }
}
