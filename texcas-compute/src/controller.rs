//! The evaluation loop.
//!
//! An expression is tokenized once, then repeatedly simplified: the sequence is fused, a snapshot
//! of it is recorded, and the resolver picks the next step to take. When the resolver finds
//! nothing left to reduce, the loop tries to solve the equation that remains, then to rearrange
//! it, before settling on whatever expression is left.

use crate::{
    error::{EvalError, MultipleEqualities, MultipleVariables, ReductionLimit},
    eval::{apply, Outcome},
    expand::{expand, regroup},
    options::EvalOptions,
    quadratic::solve,
    rearrange::rearrange,
    resolve::{resolve, Action, Expansion, Position},
    solution::Solution,
    step::{Step, StepCollector},
};
use texcas_error::Error;
use texcas_parser::{
    latex::Latex,
    registry::Op,
    token::{span_of, Term, Token, TokenKind},
    tokenizer::tokenize,
    TokenSeq,
};

/// Evaluates the expression, pushing every step taken to the step collector.
#[tracing::instrument(level = "debug", skip(options, steps))]
pub fn run(
    input: &str,
    options: &EvalOptions,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Solution, EvalError> {
    let mut seq = tokenize(input)?;
    let mut reductions = 0;

    loop {
        if seq.fuse() {
            tracing::trace!(expr = %seq.reconstruct(), "fused");
        }
        let expr = seq.reconstruct();
        steps.push(Step::Expression(expr.clone()));

        if let [token] = seq.tokens() {
            match token.as_term() {
                Some(Term::Number(n)) => return Ok(Solution::Number(n)),
                Some(term) => return Ok(Solution::Expression(term.as_display().to_string())),
                // a lone operator; the resolver reports its missing operand
                None => (),
            }
        }

        if reductions >= options.max_reductions {
            return Err(Error::new(
                vec![0..input.len()],
                ReductionLimit { limit: options.max_reductions },
            ).into());
        }
        reductions += 1;

        match resolve(&seq)? {
            Some(Action::Reduce(position)) => {
                if let Some(solution) = reduce(&mut seq, &position, options, steps)? {
                    return Ok(solution);
                }
            },
            Some(Action::Expand(expansion)) => {
                let message = match &expansion {
                    Expansion::Distribute { range, op, .. } => {
                        format!("distribute `{}` in {}", op.name(), seq.render(range.clone()))
                    },
                    Expansion::Repeat { range, count, .. } => {
                        format!("expand {} into {} factors", seq.render(range.clone()), count)
                    },
                };
                expand(&mut seq, &expansion);
                note(steps, message);
            },
            Some(Action::Regroup { range, terms }) => {
                let message = format!("group like terms in {}", seq.render(range.clone()));
                regroup(&mut seq, range, &terms);
                note(steps, message);
            },
            None => {
                if let Some(solution) = solve(&seq, options)? {
                    steps.push(Step::Solved { before: expr, after: solution.to_string() });
                    return Ok(solution);
                }

                let Some(variable) = isolation_target(&seq)? else {
                    tracing::debug!(%expr, "nothing left to reduce");
                    return Ok(match expr.parse::<f64>() {
                        Ok(n) => Solution::Number(n),
                        Err(_) => Solution::Expression(expr),
                    });
                };
                rearrange(&mut seq, &variable)?;
                note(steps, format!("rearrange {} to isolate {}", expr, variable));
            },
        }
    }
}

/// Applies the operator at the position and splices its result into the sequence. Returns the
/// solution if the result ends the evaluation.
fn reduce(
    seq: &mut TokenSeq,
    position: &Position,
    options: &EvalOptions,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Option<Solution>, Error> {
    let range = position.range.clone();
    let before = seq.render(range.clone());
    let span = span_of(&seq.tokens()[range.clone()]);

    match apply(position, options)? {
        Outcome::Boolean(b) => {
            steps.push(Step::Solved { before, after: b.to_string() });
            Ok(Some(Solution::Boolean(b)))
        },
        Outcome::Term(term) => {
            let after = term.as_display().to_string();
            let result = Token::term(term, span.clone());
            if position.negate_left {
                seq.splice(range, [Token::operator(Op::Add, span), result]);
            } else {
                seq.splice(range, [result]);
            }
            steps.push(Step::Solved { before, after });
            Ok(None)
        },
    }
}

/// Returns the variable to isolate, if the sequence is an equation in a single variable.
///
/// Returns an error if the sequence is an equation that cannot be solved for a single variable.
fn isolation_target(seq: &TokenSeq) -> Result<Option<String>, Error> {
    let mut names = Vec::<String>::new();
    for token in seq.tokens() {
        if let TokenKind::Variable(var) = &token.kind {
            if !names.contains(&var.name) {
                names.push(var.name.clone());
            }
        }
    }
    let equalities = seq.tokens().iter().filter(|token| token.is_op(Op::Eq)).count();
    let span = span_of(seq.tokens());

    match (names.len(), equalities) {
        (1, 1) => Ok(names.pop()),
        (variables, equalities) if variables > 1 && equalities > 0 => {
            Err(Error::new(vec![span], MultipleVariables { names }))
        },
        (variables, equalities) if variables > 0 && equalities > 1 => {
            Err(Error::new(vec![span], MultipleEqualities))
        },
        _ => Ok(None),
    }
}

/// Records a description of a step that is not the application of an operator.
fn note(steps: &mut dyn StepCollector<Step>, message: String) {
    tracing::debug!("{}", message);
    steps.push(Step::Debug(message));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::step::Trace;

    fn solution(input: &str) -> Solution {
        run(input, &EvalOptions::default(), &mut ()).unwrap()
    }

    fn message(input: &str) -> String {
        run(input, &EvalOptions::default(), &mut ()).unwrap_err().to_string()
    }

    #[test]
    fn arithmetic() {
        assert_eq!(solution("2+3\\cdot4"), Solution::Number(14.0));
        assert_eq!(solution("(1+2)\\cdot(3+4)"), Solution::Number(21.0));
        assert_eq!(solution("10-4-3"), Solution::Number(3.0));
        assert_eq!(solution("8\\div4\\div2"), Solution::Number(1.0));
        assert_eq!(solution("-3^{2}"), Solution::Number(-9.0));
        assert_eq!(solution("(-3)^{2}"), Solution::Number(9.0));
    }

    #[test]
    fn linear_equations() {
        assert_eq!(solution("2x=4"), Solution::Equation { variable: "x".to_string(), value: 2.0 });
        assert_eq!(solution("3x+1=10"), Solution::Equation { variable: "x".to_string(), value: 3.0 });
        assert_eq!(solution("5=x-2"), Solution::Equation { variable: "x".to_string(), value: 7.0 });
        assert_eq!(solution("4=\\frac{8}{x}"), Solution::Equation { variable: "x".to_string(), value: 2.0 });
    }

    #[test]
    fn terminal_forms() {
        assert_eq!(solution("x"), Solution::Expression("x".to_string()));
        assert_eq!(solution("x+1"), Solution::Expression("x+1".to_string()));
        assert_eq!(solution("2+2=4"), Solution::Boolean(true));
    }

    #[test]
    fn unsolvable_equations() {
        assert_eq!(message("x+y=2"), "expressions with multiple variables (x, y) are not supported yet");
        assert_eq!(message("x=1=x"), "equations with more than one `=` are not supported");
        assert_eq!(message("\\sqrt{x}=2"), "cannot apply `sqrt` to a variable");
    }

    #[test]
    fn reduction_limit() {
        let options = EvalOptions::default().into_builder().max_reductions(2).build();
        let err = run("1+2+3+4", &options, &mut ()).unwrap_err();
        assert_eq!(err.to_string(), "reduction limit reached after 2 steps");
    }

    #[test]
    fn records_every_step() {
        let mut trace = Trace::new();
        run("(x+1)^{2}=4", &EvalOptions::default(), &mut trace).unwrap();

        let expressions = trace.expressions().collect::<Vec<_>>();
        assert_eq!(expressions.first(), Some(&"\\left(x+1\\right)^{2}=4"));
        assert!(trace.debug().any(|message| message.starts_with("expand")));
        assert!(trace.debug().any(|message| message.starts_with("rearrange")));
    }
}
