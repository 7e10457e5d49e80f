use thiserror::Error;

use crate::expr::ExpressionError;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("expression error: {0}")]
    Expression(#[from] ExpressionError),

    #[error("render failed: {0}")]
    Render(String),
}
