use approx::assert_relative_eq;
use mathplot::PlotError;
use mathplot::expr::{
    CompiledExpression, ExpressionError, Sample, parse_expression, sample_expression,
    try_sample_expression,
};

fn xs(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.x).collect()
}

fn ys(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.y).collect()
}

#[test]
fn square_over_symmetric_domain_starts_at_lower_bound() {
    let samples = sample_expression("x^2", -2.0, 2.0, 4);

    assert_eq!(xs(&samples), vec![-2.0, -1.0, 0.0, 1.0]);
    assert_eq!(ys(&samples), vec![4.0, 1.0, 0.0, 1.0]);
}

#[test]
fn large_sample_counts_grow_past_the_initial_reservation() {
    let samples = sample_expression("x", 0.0, 1.0, 10_000);

    assert_eq!(samples.len(), 10_000);
    assert_relative_eq!(samples[9_999].x, 0.9999, epsilon = 1e-12);
}

#[test]
fn reciprocal_drops_the_pole_and_keeps_the_rest() {
    let samples = sample_expression("1/x", -2.0, 2.0, 4);

    assert_eq!(xs(&samples), vec![-2.0, -1.0, 1.0]);
    assert_eq!(ys(&samples), vec![-0.5, -1.0, 1.0]);
}

#[test]
fn out_of_domain_samples_are_dropped_independently() {
    let samples = sample_expression("sqrt(x)", -1.0, 1.0, 4);

    assert_eq!(xs(&samples), vec![0.0, 0.5]);
    assert_relative_eq!(samples[1].y, 0.5f64.sqrt());
}

#[test]
fn unparsable_expression_yields_empty_sequence() {
    assert!(sample_expression("x +* ", -1.0, 1.0, 50).is_empty());
    assert!(sample_expression("", -1.0, 1.0, 50).is_empty());
    assert!(sample_expression("2x", -1.0, 1.0, 50).is_empty());
}

#[test]
fn fallible_twin_reports_the_reason() {
    let err = try_sample_expression("x +* ", -1.0, 1.0, 50).expect_err("must fail");

    assert!(matches!(
        err,
        PlotError::Expression(ExpressionError::UnexpectedToken { offset: 3, .. })
    ));
}

#[test]
fn names_outside_the_allow_list_are_rejected() {
    assert!(matches!(
        parse_expression("system(x)"),
        Err(ExpressionError::UnknownFunction { .. })
    ));
    assert!(matches!(
        parse_expression("x + y"),
        Err(ExpressionError::UnknownIdentifier { offset: 4, .. })
    ));
    assert!(matches!(
        parse_expression("x; 1"),
        Err(ExpressionError::UnexpectedChar { ch: ';', offset: 1 })
    ));
}

#[test]
fn double_star_is_an_alias_for_caret() {
    assert_eq!(
        sample_expression("x**3", -1.0, 1.0, 10),
        sample_expression("x^3", -1.0, 1.0, 10)
    );
}

#[test]
fn functions_and_constants_evaluate() {
    let cases = [
        ("sin(PI/2)", 1.0),
        ("cos(0)", 1.0),
        ("log(E)", 1.0),
        ("log10(1000)", 3.0),
        ("exp(0)", 1.0),
        ("pow(2, 10)", 1024.0),
        ("abs(-3)", 3.0),
        ("atan(1) * 4", std::f64::consts::PI),
        ("2^3^2", 512.0),
        ("10 - 4 - 3", 3.0),
        ("-2^2", -4.0),
    ];
    for (source, expected) in cases {
        let compiled = CompiledExpression::compile(source).expect(source);
        assert_relative_eq!(compiled.eval(0.0), expected, epsilon = 1e-12);
    }
}

#[test]
fn variable_binds_per_sample() {
    let compiled = CompiledExpression::compile("-x^2 + 3*x").expect("compile");

    assert_relative_eq!(compiled.eval(2.0), 2.0);
    assert_relative_eq!(compiled.eval(-1.0), -4.0);
    assert_eq!(compiled.source(), "-x^2 + 3*x");
}

#[test]
fn sample_count_below_two_is_clamped() {
    assert_eq!(sample_expression("x", 0.0, 1.0, 0).len(), 2);
    assert_eq!(sample_expression("x", 0.0, 1.0, 1).len(), 2);
}

#[test]
fn non_finite_domain_yields_nothing() {
    assert!(sample_expression("x", f64::NEG_INFINITY, 1.0, 10).is_empty());
    assert!(sample_expression("x", 0.0, f64::NAN, 10).is_empty());
}

#[test]
fn sampling_is_deterministic_and_ordered() {
    let first = sample_expression("sin(x) * exp(-x/4)", -10.0, 10.0, 200);
    let second = sample_expression("sin(x) * exp(-x/4)", -10.0, 10.0, 200);

    assert_eq!(first.len(), 200);
    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0].x < pair[1].x));
}
