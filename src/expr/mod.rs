//! Safe evaluation of single-variable algebraic expressions.
//!
//! Expressions are tokenized and parsed into a small AST whose only free
//! variable is `x`, whose only constants are `PI` and `E`, and whose only
//! callables are the elementary functions in [`ast::Function`]. The tree is
//! interpreted directly; nothing outside that allow-list is reachable.

pub mod ast;
mod error;
mod lexer;
pub mod parser;
pub mod sampler;

pub use ast::{Constant, Expr, Function};
pub use error::ExpressionError;
pub use parser::{MAX_NESTING_DEPTH, parse_expression};
pub use sampler::{
    CompiledExpression, DEFAULT_SAMPLE_COUNT, MIN_SAMPLE_COUNT, Sample, sample_expression,
    try_sample_expression,
};
