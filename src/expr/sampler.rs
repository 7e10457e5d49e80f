use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ExpressionError;
use super::ast::Expr;
use super::parser::parse_expression;
use crate::error::PlotResult;

/// Resolution used for ad hoc graphs.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;
/// Smaller requests are raised to this count.
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Upper bound on the up-front reservation of a sample buffer.
const MAX_RESERVED_SAMPLES: usize = 4_096;

/// One `(x, f(x))` pair with a finite `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An expression parsed once and evaluated many times.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    source: String,
    expr: Expr,
}

impl CompiledExpression {
    pub fn compile(source: &str) -> Result<Self, ExpressionError> {
        let expr = parse_expression(source)?;
        Ok(Self {
            source: source.to_owned(),
            expr,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn ast(&self) -> &Expr {
        &self.expr
    }

    /// Evaluates at one `x`. Non-finite results are returned as-is.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }

    /// Samples `sample_count` points starting at `x_min` with step
    /// `(x_max - x_min) / sample_count`, keeping only finite evaluations.
    ///
    /// Each sample is evaluated independently; a NaN or infinite value at
    /// one `x` drops that sample and the rest of the curve is unaffected.
    #[must_use]
    pub fn sample(&self, x_min: f64, x_max: f64, sample_count: usize) -> Vec<Sample> {
        if !x_min.is_finite() || !x_max.is_finite() {
            return Vec::new();
        }

        let count = sample_count.max(MIN_SAMPLE_COUNT);
        let step = (x_max - x_min) / count as f64;
        let mut samples = Vec::with_capacity(count.min(MAX_RESERVED_SAMPLES));
        for index in 0..count {
            let x = x_min + index as f64 * step;
            let y = self.eval(x);
            if x.is_finite() && y.is_finite() {
                samples.push(Sample { x, y });
            }
        }
        samples
    }
}

/// Samples `expression` over `[x_min, x_max)`.
///
/// An expression that does not compile yields an empty sequence; use
/// `try_sample_expression` to observe the reason.
#[must_use]
pub fn sample_expression(
    expression: &str,
    x_min: f64,
    x_max: f64,
    sample_count: usize,
) -> Vec<Sample> {
    match CompiledExpression::compile(expression) {
        Ok(compiled) => compiled.sample(x_min, x_max, sample_count),
        Err(err) => {
            debug!(expression, error = %err, "expression did not compile; no curve drawn");
            Vec::new()
        }
    }
}

/// Fallible twin of `sample_expression` that surfaces compile errors.
pub fn try_sample_expression(
    expression: &str,
    x_min: f64,
    x_max: f64,
    sample_count: usize,
) -> PlotResult<Vec<Sample>> {
    let compiled = CompiledExpression::compile(expression)?;
    Ok(compiled.sample(x_min, x_max, sample_count))
}
