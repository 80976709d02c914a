use std::fmt;

use crate::ParseError;

/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Tok {
    Num(f64),
    /// Any word: the variable, a constant, or a function name.
    /// Normalized to lowercase, except for the variable.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Comma,

    LPar,
    RPar,
}

/// A token together with its byte offset in the source text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) tok: Tok,
    pub(crate) pos: usize,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(n) => write!(f, "{n}"),
            Tok::Ident(name) => f.write_str(name),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::Percent => f.write_str("%"),
            Tok::Caret => f.write_str("^"),
            Tok::Comma => f.write_str(","),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Splits source text into tokens.
///
/// Supports:
/// - decimal numbers with optional fraction and exponent (`12`, `.5`, `1e-3`)
/// - operators `+ - * / % ^` and `**` as an alias for `^`
/// - parentheses and commas
/// - identifiers `[a-zA-Z_][a-zA-Z0-9_]*`
pub(crate) fn tokenize(src: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let single = match c {
            b'+' => Some(Tok::Plus),
            b'-' => Some(Tok::Minus),
            b'/' => Some(Tok::Slash),
            b'%' => Some(Tok::Percent),
            b'^' => Some(Tok::Caret),
            b',' => Some(Tok::Comma),
            b'(' => Some(Tok::LPar),
            b')' => Some(Tok::RPar),
            _ => None,
        };
        if let Some(tok) = single {
            out.push(Token { tok, pos: i });
            i += 1;
            continue;
        }

        if c == b'*' {
            if bytes.get(i + 1) == Some(&b'*') {
                out.push(Token {
                    tok: Tok::Caret,
                    pos: i,
                });
                i += 2;
            } else {
                out.push(Token {
                    tok: Tok::Star,
                    pos: i,
                });
                i += 1;
            }
            continue;
        }

        if c.is_ascii_alphabetic() || c == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            let word = &src[start..i];
            let name = if word == "X" {
                "x".to_owned()
            } else {
                word.to_ascii_lowercase()
            };
            out.push(Token {
                tok: Tok::Ident(name),
                pos: start,
            });
            continue;
        }

        if c.is_ascii_digit() || (c == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)) {
            let start = i;
            i = scan_number(bytes, i);
            let text = &src[start..i];
            let value = text
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::InvalidNumber {
                    text: text.to_owned(),
                    pos: start,
                })?;
            out.push(Token {
                tok: Tok::Num(value),
                pos: start,
            });
            continue;
        }

        // Report the full (possibly multi-byte) character.
        let ch = src[i..].chars().next().unwrap_or('\u{fffd}');
        return Err(ParseError::UnexpectedChar { ch, pos: i });
    }

    Ok(out)
}

/// Returns the index one past the end of the number starting at `start`.
///
/// An exponent is only consumed when digits follow it, so `2e` stays a
/// number followed by the identifier `e`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = digits(start);
    if bytes.get(i) == Some(&b'.') {
        i = digits(i + 1);
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(u8::is_ascii_digit) {
            i = digits(j);
        }
    }

    // A second decimal point is swallowed here so the parse reports it.
    if bytes.get(i) == Some(&b'.') {
        i = digits(i + 1);
    }

    i
}
