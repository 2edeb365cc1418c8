//! Range lexer converting specification text into tokens.

use std::num::IntErrorKind;

use crate::errors::{SpecError, SpecErrorKind};

/// Ellipsis as a single character, a synonym for `...` and `:`.
pub(crate) const ELLIPSIS: char = '\u{2026}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Number { text: String, value: u64 },
    Text { value: char, quote: char },
    Name(String),
    Hyphen,
    Colon,
    /// `...` or the single ellipsis character, as written.
    Ellipsis(&'static str),
    Comma,
    End,
}

impl Token {
    /// The token as it would be written in a specification.
    pub(crate) fn fragment(&self) -> String {
        match self {
            Self::Number { text, .. } => text.clone(),
            Self::Text { value, quote } => format!("{quote}{value}{quote}"),
            Self::Name(name) => name.clone(),
            Self::Hyphen => "-".into(),
            Self::Colon => ":".into(),
            Self::Ellipsis(written) => (*written).into(),
            Self::Comma => ",".into(),
            Self::End => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub offset: usize,
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or_default()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let ch = self.peek()?;
        let start = self.pos;
        self.pos += ch.len_utf8();
        Some((start, ch))
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek().filter(|&ch| predicate(ch)) {
            self.pos += ch.len_utf8();
        }
    }

    fn since(&self, start: usize) -> &'a str {
        self.text.get(start..self.pos).unwrap_or_default()
    }
}

/// Split `text` into tokens terminated by [`Token::End`].
pub(crate) fn lex_range(text: &str) -> Result<Vec<Spanned>, SpecError> {
    let mut cursor = Cursor::new(text);
    let mut tokens = Vec::new();

    while let Some((offset, ch)) = cursor.bump() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            ',' => Token::Comma,
            '-' => Token::Hyphen,
            ':' => Token::Colon,
            ELLIPSIS => Token::Ellipsis("\u{2026}"),
            '.' => lex_dots(&mut cursor, offset)?,
            '\'' | '"' => lex_text(&mut cursor, offset, ch)?,
            c if c.is_ascii_digit() => lex_number(&mut cursor, offset)?,
            c if c.is_alphabetic() || c == '_' => {
                cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
                Token::Name(cursor.since(offset).to_string())
            }
            other => {
                return Err(SpecError::at(
                    SpecErrorKind::UnexpectedCharacter {
                        found: other.to_string(),
                        token_type: classify(other),
                    },
                    offset,
                ));
            }
        };
        tokens.push(Spanned { token, offset });
    }

    tokens.push(Spanned {
        token: Token::End,
        offset: text.len(),
    });
    Ok(tokens)
}

fn lex_dots(cursor: &mut Cursor<'_>, offset: usize) -> Result<Token, SpecError> {
    if cursor.eat('.') && cursor.eat('.') {
        return Ok(Token::Ellipsis("..."));
    }
    Err(SpecError::at(
        SpecErrorKind::UnexpectedCharacter {
            found: cursor.since(offset).to_string(),
            token_type: "operator",
        },
        offset,
    ))
}

fn lex_text(cursor: &mut Cursor<'_>, offset: usize, quote: char) -> Result<Token, SpecError> {
    cursor.eat_while(|c| c != quote);
    if !cursor.eat(quote) {
        return Err(SpecError::at(
            SpecErrorKind::UnterminatedText {
                text: cursor.since(offset).to_string(),
            },
            offset,
        ));
    }
    let quoted = cursor.since(offset);
    let mut inner = quoted
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or_default()
        .chars();
    match (inner.next(), inner.next()) {
        (Some(value), None) => Ok(Token::Text { value, quote }),
        _ => Err(SpecError::at(
            SpecErrorKind::TextNotSingleCharacter {
                text: quoted.to_string(),
            },
            offset,
        )),
    }
}

fn lex_number(cursor: &mut Cursor<'_>, offset: usize) -> Result<Token, SpecError> {
    cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
    let text = cursor.since(offset);
    let parsed = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .map_or_else(|| text.parse(), |digits| u64::from_str_radix(digits, 16));
    parsed
        .map(|value| Token::Number {
            text: text.to_string(),
            value,
        })
        .map_err(|err| {
            let text = text.to_string();
            let kind = if *err.kind() == IntErrorKind::PosOverflow {
                SpecErrorKind::NumberOutOfRange { text }
            } else {
                SpecErrorKind::InvalidNumber { text }
            };
            SpecError::at(kind, offset)
        })
}

fn classify(ch: char) -> &'static str {
    if ch.is_control() {
        "control character"
    } else if ch.is_ascii_punctuation() {
        "operator"
    } else {
        "unknown"
    }
}
