use mathplot::expr::{CompiledExpression, MIN_SAMPLE_COUNT, sample_expression};
use proptest::prelude::*;

const EXPRESSIONS: &[&str] = &[
    "x",
    "x^2 - 3*x + 1",
    "1/x",
    "sqrt(x)",
    "log(x)",
    "tan(x)",
    "sin(x) * exp(-x/4)",
    "abs(x) ** 0.5",
    "pow(x, 3) / (x - 1)",
];

proptest! {
    #[test]
    fn samples_are_finite_ordered_and_bounded(
        index in 0usize..EXPRESSIONS.len(),
        x_min in -100.0f64..100.0,
        span in 0.001f64..200.0,
        count in 0usize..512
    ) {
        let x_max = x_min + span;
        let samples = sample_expression(EXPRESSIONS[index], x_min, x_max, count);

        prop_assert!(samples.len() <= count.max(MIN_SAMPLE_COUNT));
        prop_assert!(samples.iter().all(|s| s.x.is_finite() && s.y.is_finite()));
        prop_assert!(samples.windows(2).all(|pair| pair[0].x < pair[1].x));
        prop_assert!(samples.iter().all(|s| s.x >= x_min && s.x < x_max));
    }

    #[test]
    fn sampling_is_a_pure_function_of_its_inputs(
        index in 0usize..EXPRESSIONS.len(),
        x_min in -50.0f64..50.0,
        span in 0.5f64..100.0,
        count in 2usize..256
    ) {
        let expression = EXPRESSIONS[index];
        let first = sample_expression(expression, x_min, x_min + span, count);
        let second = sample_expression(expression, x_min, x_min + span, count);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_kept_sample_matches_direct_evaluation(
        index in 0usize..EXPRESSIONS.len(),
        x_min in -20.0f64..20.0,
        count in 2usize..128
    ) {
        let expression = EXPRESSIONS[index];
        let compiled = CompiledExpression::compile(expression).expect("fixture compiles");

        for sample in sample_expression(expression, x_min, x_min + 10.0, count) {
            prop_assert_eq!(compiled.eval(sample.x), sample.y);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(source in "[ -~]{0,40}") {
        let _ = sample_expression(&source, -1.0, 1.0, 16);
    }
}
