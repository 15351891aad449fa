use assert_float_eq::assert_float_absolute_eq;
use pretty_assertions::assert_eq;
use texcas_compute::{evaluate, evaluate_value, evaluate_with, EvalError, EvalOptions, Solution, Step, TrigMode};

fn roots(input: &str) -> [f64; 2] {
    match evaluate(input).unwrap().solution {
        Solution::Roots { roots, .. } => roots,
        other => panic!("expected roots, got {:?}", other),
    }
}

fn messages(input: &str) -> Vec<String> {
    evaluate(input).unwrap_err().messages()
}

#[test]
fn nested_macros() {
    let evaluation = evaluate("2\\frac{(5-3)34}{\\sqrt{2^{2}}}0.5").unwrap();
    assert_eq!(evaluation.solution, Solution::Number(34.0));
    assert_eq!(evaluation.solution.to_string(), "34");
}

#[test]
fn quadratic_from_product() {
    let evaluation = evaluate("(x+1)(x+3)=2").unwrap();
    assert_eq!(evaluation.solution.to_string(), "x1 = -0.26795, x2 = -3.73205");
    assert_eq!(roots("(x+1)(x+3)=2"), [-0.26795, -3.73205]);
}

#[test]
fn quadratic_from_fraction() {
    let [x1, x2] = roots("\\frac{132}{1260+x^{2}}=0.05");
    assert_float_absolute_eq!(x1, -37.14835, 1e-9);
    assert_float_absolute_eq!(x2, 37.14835, 1e-9);

    let evaluation = evaluate("\\frac{132}{1260+x^{2}}=0.05").unwrap();
    assert!(evaluation.trace.debug().any(|message| message.starts_with("rearrange")));
}

#[test]
fn binomial_probability() {
    let solution = evaluate("binom(5,2,0.5)").unwrap().solution;
    let p = solution.as_number().unwrap();
    assert!((0.0..=1.0).contains(&p));
    assert_float_absolute_eq!(p, 0.3125, 1e-12);
}

#[test]
fn tangent_of_right_angle() {
    let err = evaluate("tan(90)").unwrap_err();
    assert!(matches!(err, EvalError::Semantic(_)));
    assert!(err.messages()[0].contains("must be smaller than 90"));
}

#[test]
fn unmatched_opening_bracket() {
    let err = evaluate("(2+3").unwrap_err();
    assert!(matches!(err, EvalError::Syntax(_)));
    assert_eq!(err.messages(), ["Unmatched opening bracket"]);
}

#[test]
fn syntax_errors_are_collected() {
    assert_eq!(
        messages("2$+3)"),
        ["Unknown character `$` at position 1", "Unmatched closing bracket"],
    );
}

#[test]
fn precedence_ordering() {
    let evaluation = evaluate("2+3*4").unwrap();
    let solved = evaluation.trace.solved().cloned().collect::<Vec<_>>();
    assert_eq!(solved, [
        Step::Solved { before: "3\\cdot4".to_string(), after: "12".to_string() },
        Step::Solved { before: "2+12".to_string(), after: "14".to_string() },
    ]);
}

#[test]
fn determinism() {
    for input in ["(x+1)(x+3)=2", "\\frac{132}{1260+x^{2}}=0.05", "2\\sin30+\\sqrt[3]{27}"] {
        let first = evaluate(input).unwrap();
        let second = evaluate(input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.trace.steps.len(), second.trace.steps.len());
    }
}

#[test]
fn trace_starts_with_input() {
    let evaluation = evaluate("1+2").unwrap();
    assert_eq!(evaluation.trace.expressions().collect::<Vec<_>>(), ["1+2", "3"]);
}

#[test]
fn numeric_edge_cases_are_values() {
    assert_eq!(evaluate("1\\div0").unwrap().solution, Solution::Number(f64::INFINITY));
    let [x1, x2] = roots("x^{2}=-4");
    assert!(x1.is_nan() && x2.is_nan());

    let huge = evaluate("\\binom{10000000000}{5000000000}").unwrap();
    assert_eq!(huge.solution, Solution::Number(f64::INFINITY));
}

#[test]
fn juxtaposed_variables_respect_powers() {
    assert_eq!(evaluate("x x^{3}").unwrap().solution, Solution::Expression("x^{4}".to_string()));
    assert_eq!(evaluate("x x^{0}=3").unwrap().solution.to_string(), "x = 3");
    assert_eq!(messages("x x^{2}=8"), ["equations of degree 3 are not supported"]);

    let evaluation = evaluate("x x^{3}").unwrap();
    assert_eq!(evaluation.trace.expressions().next(), Some("x\\cdot x^{3}"));
}

#[test]
fn chained_division_by_variable() {
    assert_eq!(evaluate("12\\div x\\div 2=1").unwrap().solution.to_string(), "x = 6");
}

#[test]
fn options() {
    let radians = EvalOptions::default().into_builder().trig_mode(TrigMode::Radians).build();
    assert_eq!(evaluate_value("\\cos\\pi", radians).unwrap(), Solution::Number(-1.0));
    assert_eq!(evaluate_value("tan(90)", radians).unwrap(), Solution::Number(-1.9952));

    let coarse = EvalOptions::default().into_builder().precision(2).build();
    assert_eq!(evaluate_with("\\frac{2}{3}", coarse).unwrap().solution, Solution::Number(0.67));
}

#[test]
fn isolated_variables() {
    assert_eq!(evaluate("3x+1=10").unwrap().solution.to_string(), "x = 3");
    assert_eq!(evaluate("2(y_1-1)=6").unwrap().solution.to_string(), "y_{1} = 4");
}

#[test]
fn reports_point_into_source() {
    let err = evaluate("1+\\tan 95").unwrap_err();
    let report = err.report_to_string("input", "1+\\tan 95").unwrap();
    let report = String::from_utf8(strip_ansi_escapes::strip(report.as_bytes())).unwrap();
    assert!(report.contains("the argument to `tan` must be smaller than 90, got 95"));
    assert!(report.contains("this argument"));
}
