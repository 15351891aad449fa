use std::fmt::{Display, Formatter, Result};
use crate::token::{Term, Variable};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Accumulates pieces of LaTeX, inserting a space only where a command name would otherwise run
/// into the letters that follow it (`\cdot x`, not `\cdotx`).
#[derive(Debug, Default, Clone)]
pub struct LatexWriter {
    out: String,
}

impl LatexWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a piece of LaTeX.
    pub fn push(&mut self, piece: &str) {
        if piece.starts_with(|c: char| c.is_ascii_alphabetic()) && self.ends_with_command() {
            self.out.push(' ');
        }
        self.out.push_str(piece);
    }

    /// Returns true if the output ends with a command name, such as `\cdot`.
    fn ends_with_command(&self) -> bool {
        let trimmed = self.out.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        trimmed.len() < self.out.len() && trimmed.ends_with('\\')
    }

    /// Returns the accumulated LaTeX.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Formats a number for display. Integral values are printed without a decimal point, and
/// negative zero is printed as `0`.
pub fn fmt_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "\\infty" } else { "-\\infty" }.to_string()
    } else {
        n.to_string()
    }
}

/// Formats the name of a variable, wrapping any subscript in braces (`x_1` becomes `x_{1}`).
pub fn fmt_name(name: &str) -> String {
    match name.split_once('_') {
        Some((base, subscript)) => format!("{}_{{{}}}", base, subscript),
        None => name.to_string(),
    }
}

impl Latex for Variable {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        if self.coefficient == -1.0 {
            write!(f, "-")?;
        } else if self.coefficient != 1.0 {
            write!(f, "{}", fmt_number(self.coefficient))?;
        }

        write!(f, "{}", fmt_name(&self.name))?;
        if self.exponent != 1 {
            write!(f, "^{{{}}}", self.exponent)?;
        }
        Ok(())
    }
}

impl Latex for Term {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Term::Number(n) => write!(f, "{}", fmt_number(*n)),
            Term::Variable(var) => var.fmt_latex(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(fmt_number(34.0), "34");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(0.05), "0.05");
        assert_eq!(fmt_number(f64::NAN), "NaN");
        assert_eq!(fmt_number(f64::NEG_INFINITY), "-\\infty");
    }

    #[test]
    fn variables() {
        let var = Variable::new("x_1").with_coefficient(-0.05).with_exponent(2);
        assert_eq!(var.as_display().to_string(), "-0.05x_{1}^{2}");
        assert_eq!(Variable::new("y").with_coefficient(-1.0).as_display().to_string(), "-y");
        assert_eq!(Term::Number(2.5).as_display().to_string(), "2.5");
    }

    #[test]
    fn writer_spacing() {
        let mut writer = LatexWriter::new();
        for piece in ["2", "\\cdot", "x", "+", "\\sin", "30", "\\cdot", "\\left("] {
            writer.push(piece);
        }
        assert_eq!(writer.finish(), "2\\cdot x+\\sin30\\cdot\\left(");
    }
}
