//! The static table of operators understood by the tokenizer and the evaluator.
//!
//! Every operator has exactly one [`OpInfo`] entry, which describes how it is spelled in the
//! input, how it is rendered back to LaTeX, how tightly it binds, and where its operands are.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence tier of an operator, in order from lowest precedence (reduced last) to highest
/// precedence (reduced first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Argument separators. Operators in this tier are never reduced.
    Separator,

    /// `=`
    Equality,

    /// `+`, `-`
    Additive,

    /// `\cdot`, `\div`
    Multiplicative,

    /// Named functions and multi-argument macros, such as `\sin` or `\frac`.
    Function,

    /// `^`, `\sqrt`
    Power,
}

impl Tier {
    /// The tiers that can be reduced, scanned in order from highest to lowest precedence.
    pub const REDUCIBLE: [Tier; 5] = [
        Tier::Power,
        Tier::Function,
        Tier::Multiplicative,
        Tier::Additive,
        Tier::Equality,
    ];
}

/// Where the operands of an operator are placed relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One operand on each side, e.g. `a + b`.
    Infix,

    /// A single operand to the right, e.g. `\sin 30` or `\sqrt{4}`.
    Prefix,

    /// Two bracketed groups to the right, e.g. `\frac{a}{b}`.
    PrefixTwoGroups,
}

/// How a bracketed operand of an operator is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketStyle {
    /// `{...}`
    Brace,

    /// `\left(...\right)`
    Paren,
}

/// An operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Sqrt,
    Frac,
    Binom,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Eq,
    Comma,
}

impl Op {
    /// Returns the registry entry of this operator.
    pub fn info(self) -> &'static OpInfo {
        &REGISTRY[self as usize]
    }

    /// Returns the precedence tier of this operator.
    pub fn tier(self) -> Tier {
        self.info().tier
    }

    /// Returns the operand layout of this operator.
    pub fn layout(self) -> Layout {
        self.info().layout
    }

    /// Returns the canonical name of this operator.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns true if this is one of the trigonometric functions.
    pub fn is_trig(self) -> bool {
        matches!(self, Op::Sin | Op::Cos | Op::Tan | Op::Asin | Op::Acos | Op::Atan)
    }

    /// Returns true if this is `+` or `-`.
    pub fn is_additive(self) -> bool {
        matches!(self, Op::Add | Op::Sub)
    }
}

/// The registry entry of an operator.
#[derive(Debug)]
pub struct OpInfo {
    /// The operator this entry describes.
    pub op: Op,

    /// The canonical name of the operator, used in messages.
    pub name: &'static str,

    /// Spellings that are recognized without a backslash. Symbol spellings (like `+`) and bare
    /// words (like `sin`) both live here.
    pub spellings: &'static [&'static str],

    /// Backslash command names (without the backslash) that produce this operator.
    pub commands: &'static [&'static str],

    /// The LaTeX used when reconstructing the operator.
    pub latex: &'static str,

    /// The precedence tier of the operator.
    pub tier: Tier,

    /// Where the operands of the operator are placed.
    pub layout: Layout,

    /// How bracketed operands of this operator are rendered.
    pub brackets: BracketStyle,

    /// Whether a value directly followed by this operator is implicitly multiplied with it, e.g.
    /// `2\sqrt{3}` means `2 \cdot \sqrt{3}`.
    pub implicit_mul: bool,
}

/// The operator table. Entries are stored in the same order as the variants of [`Op`].
pub static REGISTRY: [OpInfo; 16] = [
    OpInfo {
        op: Op::Add,
        name: "+",
        spellings: &["+"],
        commands: &[],
        latex: "+",
        tier: Tier::Additive,
        layout: Layout::Infix,
        brackets: BracketStyle::Paren,
        implicit_mul: false,
    },
    OpInfo {
        op: Op::Sub,
        name: "-",
        spellings: &["-"],
        commands: &[],
        latex: "-",
        tier: Tier::Additive,
        layout: Layout::Infix,
        brackets: BracketStyle::Paren,
        implicit_mul: false,
    },
    OpInfo {
        op: Op::Mul,
        name: "*",
        spellings: &["*"],
        commands: &["cdot", "times"],
        latex: "\\cdot",
        tier: Tier::Multiplicative,
        layout: Layout::Infix,
        brackets: BracketStyle::Paren,
        implicit_mul: false,
    },
    OpInfo {
        op: Op::Div,
        name: "/",
        spellings: &["/"],
        commands: &["div"],
        latex: "\\div",
        tier: Tier::Multiplicative,
        layout: Layout::Infix,
        brackets: BracketStyle::Paren,
        implicit_mul: false,
    },
    OpInfo {
        op: Op::Pow,
        name: "^",
        spellings: &["^"],
        commands: &[],
        latex: "^",
        tier: Tier::Power,
        layout: Layout::Infix,
        brackets: BracketStyle::Brace,
        implicit_mul: false,
    },
    OpInfo {
        op: Op::Sqrt,
        name: "sqrt",
        spellings: &["sqrt"],
        commands: &["sqrt"],
        latex: "\\sqrt",
        tier: Tier::Power,
        layout: Layout::Prefix,
        brackets: BracketStyle::Brace,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Frac,
        name: "frac",
        spellings: &["frac"],
        commands: &["frac", "dfrac", "tfrac"],
        latex: "\\frac",
        tier: Tier::Function,
        layout: Layout::PrefixTwoGroups,
        brackets: BracketStyle::Brace,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Binom,
        name: "binom",
        spellings: &["binom"],
        commands: &["binom"],
        latex: "\\binom",
        tier: Tier::Function,
        layout: Layout::PrefixTwoGroups,
        brackets: BracketStyle::Brace,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Sin,
        name: "sin",
        spellings: &["sin"],
        commands: &["sin"],
        latex: "\\sin",
        tier: Tier::Function,
        layout: Layout::Prefix,
        brackets: BracketStyle::Paren,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Cos,
        name: "cos",
        spellings: &["cos"],
        commands: &["cos"],
        latex: "\\cos",
        tier: Tier::Function,
        layout: Layout::Prefix,
        brackets: BracketStyle::Paren,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Tan,
        name: "tan",
        spellings: &["tan"],
        commands: &["tan"],
        latex: "\\tan",
        tier: Tier::Function,
        layout: Layout::Prefix,
        brackets: BracketStyle::Paren,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Asin,
        name: "arcsin",
        spellings: &["arcsin"],
        commands: &["arcsin"],
        latex: "\\arcsin",
        tier: Tier::Function,
        layout: Layout::Prefix,
        brackets: BracketStyle::Paren,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Acos,
        name: "arccos",
        spellings: &["arccos"],
        commands: &["arccos"],
        latex: "\\arccos",
        tier: Tier::Function,
        layout: Layout::Prefix,
        brackets: BracketStyle::Paren,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Atan,
        name: "arctan",
        spellings: &["arctan"],
        commands: &["arctan"],
        latex: "\\arctan",
        tier: Tier::Function,
        layout: Layout::Prefix,
        brackets: BracketStyle::Paren,
        implicit_mul: true,
    },
    OpInfo {
        op: Op::Eq,
        name: "=",
        spellings: &["="],
        commands: &[],
        latex: "=",
        tier: Tier::Equality,
        layout: Layout::Infix,
        brackets: BracketStyle::Paren,
        implicit_mul: false,
    },
    OpInfo {
        op: Op::Comma,
        name: ",",
        spellings: &[","],
        commands: &[],
        latex: ",",
        tier: Tier::Separator,
        layout: Layout::Infix,
        brackets: BracketStyle::Paren,
        implicit_mul: false,
    },
];

/// Named constants, recognized both as bare words and as backslash commands.
pub static CONSTANTS: [(&str, f64); 2] = [
    ("pi", std::f64::consts::PI),
    ("infty", f64::INFINITY),
];

/// Commands that only affect layout and produce no token.
pub static LAYOUT_COMMANDS: [&str; 5] = ["left", "right", "big", "Big", "displaystyle"];

/// What a spelling in the input stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    /// An operator.
    Op(Op),

    /// A named constant with the given value.
    Constant(f64),

    /// A layout command, such as `\left`, which is skipped.
    Layout,
}

/// Looks up a symbol spelling, such as `+` or `^`.
pub fn lookup_symbol(spelling: &str) -> Option<Op> {
    REGISTRY.iter()
        .find(|info| info.spellings.contains(&spelling))
        .map(|info| info.op)
}

/// Looks up a backslash command by its name (without the backslash).
pub fn lookup_command(name: &str) -> Option<Symbol> {
    if LAYOUT_COMMANDS.contains(&name) {
        return Some(Symbol::Layout);
    }

    if let Some((_, value)) = CONSTANTS.iter().find(|(constant, _)| *constant == name) {
        return Some(Symbol::Constant(*value));
    }

    REGISTRY.iter()
        .find(|info| info.commands.contains(&name))
        .map(|info| Symbol::Op(info.op))
}

/// Finds the longest operator or constant spelling that `word` starts with, returning the symbol
/// and the length of the spelling.
pub fn longest_word_prefix(word: &str) -> Option<(Symbol, usize)> {
    let ops = REGISTRY.iter()
        .flat_map(|info| info.spellings.iter().map(move |spelling| (Symbol::Op(info.op), *spelling)));
    let constants = CONSTANTS.iter()
        .map(|(name, value)| (Symbol::Constant(*value), *name));

    ops.chain(constants)
        .filter(|(_, spelling)| spelling.starts_with(|c: char| c.is_ascii_alphabetic()))
        .filter(|(_, spelling)| word.starts_with(spelling))
        .max_by_key(|(_, spelling)| spelling.len())
        .map(|(symbol, spelling)| (symbol, spelling.len()))
}

/// Returns every backslash command name that is understood, for use in suggestions.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter()
        .flat_map(|info| info.commands.iter().copied())
        .chain(CONSTANTS.iter().map(|(name, _)| *name))
        .chain(LAYOUT_COMMANDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_op() {
        for (i, info) in REGISTRY.iter().enumerate() {
            assert_eq!(info.op as usize, i, "entry for {:?} is out of order", info.op);
        }
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Op::Pow.tier() > Op::Sin.tier());
        assert!(Op::Frac.tier() > Op::Mul.tier());
        assert!(Op::Mul.tier() > Op::Add.tier());
        assert!(Op::Add.tier() > Op::Eq.tier());
        assert!(Op::Eq.tier() > Op::Comma.tier());
    }

    #[test]
    fn word_prefix() {
        assert_eq!(longest_word_prefix("sinx"), Some((Symbol::Op(Op::Sin), 3)));
        assert_eq!(longest_word_prefix("arcsin"), Some((Symbol::Op(Op::Asin), 6)));
        assert_eq!(longest_word_prefix("pi"), Some((Symbol::Constant(std::f64::consts::PI), 2)));
        assert_eq!(longest_word_prefix("x"), None);
    }

    #[test]
    fn commands() {
        assert_eq!(lookup_command("cdot"), Some(Symbol::Op(Op::Mul)));
        assert_eq!(lookup_command("left"), Some(Symbol::Layout));
        assert_eq!(lookup_command("frac"), Some(Symbol::Op(Op::Frac)));
        assert_eq!(lookup_command("foo"), None);
        assert_eq!(lookup_symbol("^"), Some(Op::Pow));
    }
}
