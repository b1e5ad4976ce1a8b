//! Recursive-descent parser for rule lines.
//!
//! Grammar over the condition part of a line:
//!
//! ```text
//! expression := group (OR group)*
//! group      := term (AND term)*
//! term       := condition | "(" expression ")"
//! condition  := name "=" value
//! ```
//!
//! A parenthesized expression does not form a nested disjunction: all the
//! conditions of its groups are merged into the enclosing AND-group. So
//! `(a OR b) AND c` parses to the single group `[a, b, c]`.

use apsel_core::{Category, Condition, Rule, Variable};
use tracing::warn;

use crate::dialect::Dialect;
use crate::error::{ParseError, Result};
use crate::lexer::{tokenize, Token};

/// Deepest parenthesis nesting accepted in one rule.
pub const MAX_NESTING: usize = 64;

/// Parses rule lines written in one [`Dialect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleParser {
    dialect: &'static Dialect,
}

impl Default for RuleParser {
    fn default() -> Self {
        Self::new(&Dialect::ENGLISH)
    }
}

impl RuleParser {
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// Parse one line of the form `IF <expression> THEN <label>`.
    ///
    /// The `IF` prefix is optional. Any error aborts the whole line.
    pub fn parse(&self, line: &str) -> Result<Rule> {
        let line = line.trim();
        let (condition_part, label) =
            split_at_word(line, self.dialect.separator).ok_or_else(|| {
                ParseError::MalformedRule {
                    detail: format!("missing '{}' separator", self.dialect.separator),
                }
            })?;

        let label = label.trim();
        if label.is_empty() {
            return Err(ParseError::MalformedRule {
                detail: "missing output label".into(),
            });
        }

        let condition_part = strip_prefix_word(condition_part.trim(), self.dialect.prefix);
        let tokens = tokenize(condition_part, self.dialect);
        if tokens.is_empty() {
            return Err(ParseError::MalformedRule {
                detail: "empty condition expression".into(),
            });
        }

        let mut cursor = Cursor {
            tokens: &tokens,
            pos: 0,
            depth: 0,
            dialect: self.dialect,
        };
        let groups = cursor.expression()?;
        if let Some(token) = cursor.peek() {
            return Err(ParseError::MalformedRule {
                detail: match token {
                    Token::RParen => "unbalanced ')'".to_string(),
                    other => format!(
                        "expected {} or {}, found {other}",
                        self.dialect.and, self.dialect.or
                    ),
                },
            });
        }

        let rule = Rule::new(label, groups).map_err(|e| ParseError::MalformedRule {
            detail: e.to_string(),
        })?;

        if rule
            .conditions()
            .any(|c| c.variable == Variable::Input2 && c.category == Category::SlightlySmall)
        {
            warn!(
                rule = %rule,
                "input2 has no slightly-small degree; the condition always evaluates to 0"
            );
        }

        Ok(rule)
    }
}

struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    depth: usize,
    dialect: &'static Dialect,
}

impl<'a> Cursor<'_, 'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: Token<'_>) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expression(&mut self) -> Result<Vec<Vec<Condition>>> {
        let mut groups = vec![self.group()?];
        while self.eat(Token::Or) {
            groups.push(self.group()?);
        }
        Ok(groups)
    }

    fn group(&mut self) -> Result<Vec<Condition>> {
        let mut conditions = Vec::new();
        self.term(&mut conditions)?;
        while self.eat(Token::And) {
            self.term(&mut conditions)?;
        }
        Ok(conditions)
    }

    fn term(&mut self, group: &mut Vec<Condition>) -> Result<()> {
        match self.next() {
            Some(Token::Condition(text)) => {
                group.push(parse_condition(text, self.dialect)?);
                Ok(())
            }
            Some(Token::LParen) => {
                if self.depth == MAX_NESTING {
                    return Err(ParseError::MalformedRule {
                        detail: "nesting too deep".into(),
                    });
                }
                self.depth += 1;
                let inner = self.expression()?;
                self.depth -= 1;
                if !self.eat(Token::RParen) {
                    return Err(ParseError::MalformedRule {
                        detail: "unclosed '('".into(),
                    });
                }
                group.extend(inner.into_iter().flatten());
                Ok(())
            }
            Some(other) => Err(ParseError::MalformedRule {
                detail: format!("expected a condition, found {other}"),
            }),
            None => Err(ParseError::MalformedRule {
                detail: "expected a condition at end of expression".into(),
            }),
        }
    }
}

/// Parse `name=value` against the vocabulary of `dialect`.
fn parse_condition(text: &str, dialect: &Dialect) -> Result<Condition> {
    let mut parts = text.split('=');
    let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::MalformedCondition {
            condition: text.to_string(),
        });
    };

    let (name, value) = (name.trim(), value.trim());
    let variable = dialect
        .variable(name)
        .ok_or_else(|| ParseError::UnknownVariable {
            name: name.to_string(),
        })?;
    let category = dialect
        .category(value)
        .ok_or_else(|| ParseError::UnknownValue {
            value: value.to_string(),
        })?;

    Ok(Condition::new(variable, category))
}

/// Split `line` around the first occurrence of `word` that has whitespace
/// on both sides.
fn split_at_word<'l>(line: &'l str, word: &str) -> Option<(&'l str, &'l str)> {
    line.match_indices(word).find_map(|(at, _)| {
        let before = &line[..at];
        let after = &line[at + word.len()..];
        let spaced_before = before.chars().next_back().is_some_and(char::is_whitespace);
        let spaced_after = after.chars().next().is_some_and(char::is_whitespace);
        (spaced_before && spaced_after).then_some((before, after))
    })
}

/// Remove a leading keyword when it stands as its own word.
fn strip_prefix_word<'l>(text: &'l str, word: &str) -> &'l str {
    match text.strip_prefix(word) {
        Some(rest)
            if rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == '(') =>
        {
            rest.trim_start()
        }
        _ => text,
    }
}
