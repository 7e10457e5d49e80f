//! Precedence-climbing parser for single-variable expressions.
//!
//! Operator precedence (highest to lowest):
//! - Atoms: numbers, `x`, `PI`, `E`, calls, parenthesized groups
//! - Power: `^` / `**` (right associative, exponent may carry a sign)
//! - Unary sign: `-`, `+` (so `-x^2` is `-(x^2)`)
//! - Multiplication/Division: `*`, `/`
//! - Addition/Subtraction: `+`, `-`

use super::ExpressionError;
use super::ast::{BinaryOp, Constant, Expr, Function, UnaryOp};
use super::lexer::{Token, TokenKind, tokenize};

/// Bound on nested groups, signs and exponents.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parses `input` into an expression tree.
pub fn parse_expression(input: &str) -> Result<Expr, ExpressionError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    if matches!(parser.peek().kind, TokenKind::End) {
        return Err(ExpressionError::Empty { offset: 0 });
    }
    let expr = parser.parse_binary(0)?;
    let trailing = parser.peek();
    if !matches!(trailing.kind, TokenKind::End) {
        return Err(unexpected(trailing));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        // The token stream always ends with `End`.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<Token, ExpressionError> {
        if &self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(unexpected(self.peek()))
        }
    }

    fn enter(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                offset: self.peek().offset,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ExpressionError> {
        let mut left = self.parse_unary()?;

        loop {
            let (op, prec) = match self.peek().kind {
                TokenKind::Plus => (BinaryOp::Add, 1),
                TokenKind::Minus => (BinaryOp::Sub, 1),
                TokenKind::Star => (BinaryOp::Mul, 2),
                TokenKind::Slash => (BinaryOp::Div, 2),
                _ => break,
            };
            if prec < min_prec {
                break;
            }
            self.advance();
            let right = self.parse_binary(prec + 1)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExpressionError> {
        self.enter()?;
        let result = match self.peek().kind {
            TokenKind::Minus => {
                self.advance();
                self.parse_unary().map(|operand| Expr::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                })
            }
            TokenKind::Plus => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_power(),
        };
        self.leave();
        result
    }

    fn parse_power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.parse_atom()?;
        if !matches!(self.peek().kind, TokenKind::Caret) {
            return Ok(base);
        }
        self.advance();
        let exponent = self.parse_unary()?;
        Ok(Expr::Binary {
            op: BinaryOp::Pow,
            left: Box::new(base),
            right: Box::new(exponent),
        })
    }

    fn parse_atom(&mut self) -> Result<Expr, ExpressionError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Ident(name) => {
                if matches!(self.peek().kind, TokenKind::LParen) {
                    return self.parse_call(&name, token.offset);
                }
                if name == "x" {
                    return Ok(Expr::Variable);
                }
                Constant::lookup(&name).map(Expr::Constant).ok_or(
                    ExpressionError::UnknownIdentifier {
                        name,
                        offset: token.offset,
                    },
                )
            }
            TokenKind::LParen => {
                let inner = self.parse_binary(0)?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(unexpected(&token)),
        }
    }

    fn parse_call(&mut self, name: &str, offset: usize) -> Result<Expr, ExpressionError> {
        let function = Function::lookup(name).ok_or_else(|| ExpressionError::UnknownFunction {
            name: name.to_owned(),
            offset,
        })?;
        self.expect(&TokenKind::LParen)?;

        let mut args = Vec::new();
        if !matches!(self.peek().kind, TokenKind::RParen) {
            loop {
                args.push(self.parse_binary(0)?);
                if matches!(self.peek().kind, TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;

        if args.len() != function.arity() {
            return Err(ExpressionError::WrongArity {
                name: function.name(),
                expected: function.arity(),
                found: args.len(),
                offset,
            });
        }
        Ok(Expr::Call { function, args })
    }
}

fn unexpected(token: &Token) -> ExpressionError {
    match token.kind {
        TokenKind::End => ExpressionError::UnexpectedEnd {
            offset: token.offset,
        },
        ref kind => ExpressionError::UnexpectedToken {
            found: kind.to_string(),
            offset: token.offset,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_NESTING_DEPTH, parse_expression};
    use crate::expr::ExpressionError;
    use crate::expr::ast::{BinaryOp, Expr, UnaryOp};

    #[test]
    fn unary_minus_binds_looser_than_power() {
        let expr = parse_expression("-x^2").expect("parse");
        match expr {
            Expr::Unary {
                op: UnaryOp::Neg,
                operand,
            } => assert!(matches!(
                *operand,
                Expr::Binary {
                    op: BinaryOp::Pow,
                    ..
                }
            )),
            other => panic!("expected negation at the root, got {other:?}"),
        }
        assert_eq!(parse_expression("-x^2").expect("parse").eval(3.0), -9.0);
    }

    #[test]
    fn power_is_right_associative() {
        let expr = parse_expression("2^3^2").expect("parse");
        assert_eq!(expr.eval(0.0), 512.0);
    }

    #[test]
    fn subtraction_and_division_are_left_associative() {
        assert_eq!(parse_expression("10-4-3").expect("parse").eval(0.0), 3.0);
        assert_eq!(parse_expression("64/4/2").expect("parse").eval(0.0), 8.0);
    }

    #[test]
    fn exponent_may_be_signed() {
        assert_eq!(parse_expression("2^-1").expect("parse").eval(0.0), 0.5);
    }

    #[test]
    fn trailing_operator_reports_end_of_input() {
        let err = parse_expression("x +").expect_err("incomplete");
        assert_eq!(err, ExpressionError::UnexpectedEnd { offset: 3 });
    }

    #[test]
    fn stacked_operators_report_the_offending_token() {
        let err = parse_expression("x +* ").expect_err("malformed");
        assert_eq!(
            err,
            ExpressionError::UnexpectedToken {
                found: "*".to_owned(),
                offset: 3,
            }
        );
    }

    #[test]
    fn juxtaposition_is_not_multiplication() {
        let err = parse_expression("2x").expect_err("implicit product");
        assert!(matches!(err, ExpressionError::UnexpectedToken { offset: 1, .. }));
    }

    #[test]
    fn arity_is_checked_per_function() {
        let err = parse_expression("pow(x)").expect_err("pow needs two args");
        assert_eq!(
            err,
            ExpressionError::WrongArity {
                name: "pow",
                expected: 2,
                found: 1,
                offset: 0,
            }
        );
        assert!(parse_expression("sin(x, 1)").is_err());
        assert!(parse_expression("pow(x, 2)").is_ok());
    }

    #[test]
    fn names_outside_the_allow_list_are_rejected() {
        assert!(matches!(
            parse_expression("y + 1"),
            Err(ExpressionError::UnknownIdentifier { .. })
        ));
        assert!(matches!(
            parse_expression("alert(1)"),
            Err(ExpressionError::UnknownFunction { .. })
        ));
        assert!(matches!(
            parse_expression("Math"),
            Err(ExpressionError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn empty_input_is_reported() {
        assert_eq!(
            parse_expression("   "),
            Err(ExpressionError::Empty { offset: 0 })
        );
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!(
            "{}x{}",
            "(".repeat(MAX_NESTING_DEPTH + 1),
            ")".repeat(MAX_NESTING_DEPTH + 1)
        );
        assert!(matches!(
            parse_expression(&deep),
            Err(ExpressionError::TooDeep { .. })
        ));

        let shallow = format!("{}x{}", "(".repeat(8), ")".repeat(8));
        assert!(parse_expression(&shallow).is_ok());

        let signs = "-".repeat(MAX_NESTING_DEPTH + 1) + "x";
        assert!(matches!(
            parse_expression(&signs),
            Err(ExpressionError::TooDeep { .. })
        ));
    }
}
