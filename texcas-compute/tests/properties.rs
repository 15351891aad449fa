use proptest::prelude::*;
use texcas_compute::{evaluate, EvalError, Evaluation, Solution};

/// Generates expressions in at most one variable.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..100).prop_map(|n| n.to_string()),
        (0u32..10, 1u32..10).prop_map(|(a, b)| format!("{}.{}", a, b)),
        Just("x".to_string()),
        (1usize..4, any::<bool>()).prop_map(|(copies, negated)| {
            let sign = if negated { "-" } else { "" };
            format!("{}{}", sign, vec!["x"; copies].join(" "))
        }),
        (0u32..4).prop_map(|n| format!("x x^{{{}}}", n)),
    ];

    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "\\cdot", "\\div"]), inner.clone())
                .prop_map(|(a, op, b)| format!("{} {} {}", a, op, b)),
            inner.clone().prop_map(|a| format!("({})", a)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("\\frac{{{}}}{{{}}}", a, b)),
            (inner.clone(), 1u32..3).prop_map(|(a, n)| format!("({})^{{{}}}", a, n)),
            inner.prop_map(|a| format!("\\sqrt{{{}}}", a)),
        ]
    })
}

/// Reduces an evaluation result to something comparable.
fn outcome(result: Result<Evaluation, EvalError>) -> Result<(String, usize), Vec<String>> {
    result
        .map(|evaluation| (evaluation.solution.to_string(), evaluation.trace.steps.len()))
        .map_err(|err| err.messages())
}

proptest! {
    /// Every splice checks that parentheses stay balanced, so any evaluation that runs to the end
    /// kept them balanced throughout.
    #[test]
    fn evaluation_is_deterministic(input in expression()) {
        let first = outcome(evaluate(&input));
        let second = outcome(evaluate(&input));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn juxtaposition_multiplies_powers(n in 1u32..10) {
        let solution = evaluate(&format!("x x^{{{}}}", n)).unwrap().solution;
        prop_assert_eq!(solution, Solution::Expression(format!("x^{{{}}}", n + 1)));
    }

    #[test]
    fn equations_terminate(left in expression(), right in expression()) {
        let input = format!("{} = {}", left, right);
        let _ = evaluate(&input);
    }
}
