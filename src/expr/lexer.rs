//! Tokenizer for single-variable infix expressions.
//!
//! `^` and `**` both lex to the power token, so conventional exponent
//! notation and the host-language spelling are interchangeable.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use super::ExpressionError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Ident(name) => f.write_str(name),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
            Self::End => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) offset: usize,
}

/// Splits `input` into tokens, always terminated by `TokenKind::End`.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        let kind = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => lex_number(input, &mut chars)?,
            'a'..='z' | 'A'..='Z' | '_' => {
                let mut end = offset;
                while let Some(&(idx, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        end = idx + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                TokenKind::Ident(input[offset..end].to_owned())
            }
            '*' => {
                chars.next();
                if matches!(chars.peek(), Some((_, '*'))) {
                    chars.next();
                    TokenKind::Caret
                } else {
                    TokenKind::Star
                }
            }
            _ => {
                chars.next();
                match ch {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '/' => TokenKind::Slash,
                    '^' => TokenKind::Caret,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ',' => TokenKind::Comma,
                    other => return Err(ExpressionError::UnexpectedChar { ch: other, offset }),
                }
            }
        };
        tokens.push(Token { kind, offset });
    }

    tokens.push(Token {
        kind: TokenKind::End,
        offset: input.len(),
    });
    Ok(tokens)
}

/// Lexes `123`, `1.5`, `.5`, `2e-3`. An exponent marker is only consumed
/// when digits follow it.
fn lex_number(
    input: &str,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<TokenKind, ExpressionError> {
    let start = chars.peek().map_or(input.len(), |&(idx, _)| idx);
    let mut end = start;
    let mut seen_dot = false;

    while let Some(&(idx, c)) = chars.peek() {
        if c.is_ascii_digit() || (c == '.' && !seen_dot) {
            seen_dot |= c == '.';
            end = idx + 1;
            chars.next();
        } else {
            break;
        }
    }

    if let Some(&(_, 'e' | 'E')) = chars.peek() {
        let rest = &input[end + 1..];
        let sign_len = usize::from(rest.starts_with(['+', '-']));
        let digit_len = rest[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digit_len > 0 {
            let consumed = 1 + sign_len + digit_len;
            for _ in 0..consumed {
                chars.next();
            }
            end += consumed;
        }
    }

    let literal = &input[start..end];
    literal
        .parse::<f64>()
        .map(TokenKind::Number)
        .map_err(|_| ExpressionError::InvalidNumber {
            literal: literal.to_owned(),
            offset: start,
        })
}
