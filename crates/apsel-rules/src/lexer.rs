//! Tokenizer for condition expressions.
//!
//! Connectives are recognized only as whole whitespace-delimited words, so
//! the short AND keyword never matches inside the OR keyword (`И` inside
//! `ИЛИ`) or inside a name. Consecutive words that are neither connectives
//! nor parentheses form one condition, which lets `input1 = Small` span
//! three words.

use std::fmt;

use crate::dialect::Dialect;

/// A lexical token of a condition expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    LParen,
    RParen,
    And,
    Or,
    /// Raw `name=value` text, not yet validated.
    Condition(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::And => write!(f, "AND"),
            Token::Or => write!(f, "OR"),
            Token::Condition(text) => write!(f, "condition '{text}'"),
        }
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

/// Split `input` into tokens using the connectives of `dialect`.
pub fn tokenize<'a>(input: &'a str, dialect: &Dialect) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    // Byte span of the condition being accumulated.
    let mut pending: Option<(usize, usize)> = None;
    let mut chars = input.char_indices().peekable();

    let flush = |tokens: &mut Vec<Token<'a>>, pending: &mut Option<(usize, usize)>| {
        if let Some((start, end)) = pending.take() {
            tokens.push(Token::Condition(&input[start..end]));
        }
    };

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '(' || c == ')' {
            flush(&mut tokens, &mut pending);
            tokens.push(if c == '(' { Token::LParen } else { Token::RParen });
            chars.next();
            continue;
        }

        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if is_delimiter(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        let word = &input[start..end];
        if word == dialect.and {
            flush(&mut tokens, &mut pending);
            tokens.push(Token::And);
        } else if word == dialect.or {
            flush(&mut tokens, &mut pending);
            tokens.push(Token::Or);
        } else {
            pending = Some(match pending {
                Some((first, _)) => (first, end),
                None => (start, end),
            });
        }
    }
    flush(&mut tokens, &mut pending);

    tokens
}
