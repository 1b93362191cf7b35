//! Lexical analysis: turns the raw expression into a vector of tokens.
//!
//! The tokenizer knows three things: whitespace is skipped, `+` and `-` are
//! single-character operators, and a run of decimal digits is one number.
//! Anything else stops the scan. The vector always ends with exactly one
//! `Eof` token so the cursor has somewhere to rest.

use std::fmt;

use snafu::ResultExt;
use tracing::debug;

use crate::error::{CompileResult, NumericOverflowSnafu, TokenizeSnafu};

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Operator,
  Num(i32),
  Eof,
}

/// One lexical unit, borrowing its text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
  pub kind: TokenKind,
  pub text: &'a str,
  pub loc: usize,
}

impl<'a> Token<'a> {
  pub fn new(kind: TokenKind, text: &'a str, loc: usize) -> Self {
    Self { kind, text, loc }
  }

  pub fn value(&self) -> Option<i32> {
    match self.kind {
      TokenKind::Num(value) => Some(value),
      _ => None,
    }
  }

  /// Human-friendly description used in diagnostics.
  pub fn describe(&self) -> &'a str {
    match self.kind {
      TokenKind::Eof => "EOF",
      _ => self.text,
    }
  }
}

impl fmt::Display for Token<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      TokenKind::Operator => write!(f, "{:>4}  Operator  {}", self.loc, self.text),
      TokenKind::Num(value) => write!(f, "{:>4}  Num       {value}", self.loc),
      TokenKind::Eof => write!(f, "{:>4}  Eof", self.loc),
    }
  }
}

/// Matches C `isspace` in the default locale, vertical tab included.
fn is_space(c: u8) -> bool {
  matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Lex the input into a flat vector of tokens terminated by an `Eof` marker.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token<'_>>> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    if is_space(c) {
      i += 1;
      continue;
    }

    if c == b'+' || c == b'-' {
      tokens.push(Token::new(TokenKind::Operator, &input[i..i + 1], i));
      i += 1;
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      let text = &input[start..i];
      let value = text
        .parse::<i32>()
        .context(NumericOverflowSnafu { input, loc: start })?;
      tokens.push(Token::new(TokenKind::Num(value), text, start));
      continue;
    }

    return TokenizeSnafu { input, loc: i }.fail();
  }

  tokens.push(Token::new(TokenKind::Eof, "", input.len()));
  debug!(count = tokens.len(), "tokenized expression");
  Ok(tokens)
}
