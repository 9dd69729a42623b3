//! Key-value column text form
//!
//! Parser and formatter for the engine's key-value text representation:
//! `"key"=>"value", ...` with backslash escapes inside quoted strings and
//! an unquoted `NULL` for absent values.

use crate::errors::CodecError;

/// Parse key-value column text into ordered pairs
///
/// Whitespace around `=>` and between pairs is tolerated. Malformed input
/// fails with a positioned syntax error; corruption is not recoverable at
/// this layer.
pub fn parse(input: &str) -> Result<Vec<(String, Option<String>)>, CodecError> {
    let mut scanner = Scanner::new(input);
    let mut pairs = Vec::new();

    scanner.skip_whitespace();
    if scanner.at_end() {
        return Ok(pairs);
    }

    loop {
        let key = scanner.quoted_string()?;
        scanner.skip_whitespace();
        scanner.expect('=')?;
        scanner.expect('>')?;
        scanner.skip_whitespace();

        let value = if scanner.peek() == Some('"') {
            Some(scanner.quoted_string()?)
        } else {
            scanner.keyword("NULL")?;
            None
        };
        pairs.push((key, value));

        scanner.skip_whitespace();
        if scanner.at_end() {
            return Ok(pairs);
        }
        scanner.expect(',')?;
        scanner.skip_whitespace();
    }
}

/// Format ordered pairs as key-value column text
pub fn to_text(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}=>{}", quote(key), quote(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.position += next.len_utf8();
        Some(next)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), CodecError> {
        match self.bump() {
            Some(found) if found == expected => Ok(()),
            _ => Err(self.syntax_error("unexpected character")),
        }
    }

    fn keyword(&mut self, keyword: &'static str) -> Result<(), CodecError> {
        if self.input[self.position..].starts_with(keyword) {
            self.position += keyword.len();
            Ok(())
        } else {
            Err(self.syntax_error("expected quoted string or NULL"))
        }
    }

    fn quoted_string(&mut self) -> Result<String, CodecError> {
        self.expect('"')
            .map_err(|_| self.syntax_error("expected opening quote"))?;

        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(text),
                Some('\\') => match self.bump() {
                    Some(escaped) => text.push(escaped),
                    None => return Err(self.syntax_error("unterminated escape")),
                },
                Some(other) => text.push(other),
                None => return Err(self.syntax_error("unterminated quoted string")),
            }
        }
    }

    fn syntax_error(&self, reason: &'static str) -> CodecError {
        CodecError::KeyValueSyntax {
            position: self.position,
            reason,
        }
    }
}
