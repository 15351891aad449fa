use logos::Logos;
use std::ops::Range;

/// The different kinds of raw lexemes produced by the lexer, before any registry lookup.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum LexemeKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    /// LaTeX spacing commands: `\ `, `\,`, `\;`, `\:`, `\!`.
    #[regex(r"\\[ ,;:!]")]
    Spacing,

    #[regex(r"\\[a-zA-Z]+")]
    Command,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r"[-+*/^=,]")]
    Symbol,

    #[token("_")]
    Underscore,

    #[regex(r"[({\[]")]
    Open,

    #[regex(r"[)}\]]")]
    Close,

    #[regex(r".", priority = 0)]
    Unknown,
}

impl LexemeKind {
    /// Returns true if the lexeme represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, LexemeKind::Whitespace | LexemeKind::Spacing)
    }
}

/// A lexeme produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'source> {
    /// The region of the source code that this lexeme originated from.
    pub span: Range<usize>,

    /// The kind of lexeme.
    pub kind: LexemeKind,

    /// The raw text of the lexeme.
    pub text: &'source str,
}

impl Lexeme<'_> {
    /// Returns true if the lexeme represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}

/// Returns an owned array containing all of the lexemes in the input, so that the tokenizer can
/// look ahead.
pub fn lex_complete(input: &str) -> Box<[Lexeme]> {
    let mut lexer = LexemeKind::lexer(input);
    let mut lexemes = Vec::new();

    while let Some(kind) = lexer.next() {
        lexemes.push(Lexeme {
            span: lexer.span(),
            kind: kind.unwrap_or(LexemeKind::Unknown),
            text: lexer.slice(),
        });
    }

    lexemes.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the lexemes produced by the lexer to the raw expected lexemes.
    fn compare_lexemes<const N: usize>(input: &str, expected: [(LexemeKind, &str); N]) {
        let lexemes = lex_complete(input);
        let actual = lexemes.iter().map(|l| (l.kind, l.text)).collect::<Vec<_>>();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn latex_fraction() {
        compare_lexemes(
            "\\frac{1}{x_2}",
            [
                (LexemeKind::Command, "\\frac"),
                (LexemeKind::Open, "{"),
                (LexemeKind::Number, "1"),
                (LexemeKind::Close, "}"),
                (LexemeKind::Open, "{"),
                (LexemeKind::Name, "x"),
                (LexemeKind::Underscore, "_"),
                (LexemeKind::Number, "2"),
                (LexemeKind::Close, "}"),
            ],
        );
    }

    #[test]
    fn symbols_and_spacing() {
        compare_lexemes(
            "2.5 \\, -x^3 $",
            [
                (LexemeKind::Number, "2.5"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Spacing, "\\,"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Symbol, "-"),
                (LexemeKind::Name, "x"),
                (LexemeKind::Symbol, "^"),
                (LexemeKind::Number, "3"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Unknown, "$"),
            ],
        );
    }
}
