//! Cursor over the token vector with one token of look-ahead.
//!
//! There is no AST: the code emitter drives this cursor directly and every
//! successful match is turned into an instruction on the spot. The cursor
//! only ever moves forward and never past the trailing `Eof` token.

use tracing::trace;

use crate::error::{CompileError, CompileResult};
use crate::tokenizer::{Token, TokenKind};

pub struct TokenStream<'a> {
  tokens: Vec<Token<'a>>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  /// Take ownership of the tokens. An `Eof` sentinel is appended if the
  /// vector does not already end with one.
  pub fn new(mut tokens: Vec<Token<'a>>, source: &'a str) -> Self {
    if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
      tokens.push(Token::new(TokenKind::Eof, "", source.len()));
    }
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  pub fn current(&self) -> &Token<'a> {
    &self.tokens[self.pos]
  }

  fn advance(&mut self) {
    trace!(pos = self.pos, token = self.current().describe(), "consume");
    if self.pos + 1 < self.tokens.len() {
      self.pos += 1;
    }
  }

  fn at_operator(&self, op: char) -> bool {
    let token = self.current();
    token.kind == TokenKind::Operator && token.text.starts_with(op)
  }

  /// Consume the current token if it is the operator `op`.
  pub fn consume(&mut self, op: char) -> bool {
    if !self.at_operator(op) {
      return false;
    }
    self.advance();
    true
  }

  /// Consume the operator `op` or fail with a syntax error.
  pub fn expect(&mut self, op: char) -> CompileResult<()> {
    if self.consume(op) {
      return Ok(());
    }
    let token = self.current();
    Err(CompileError::syntax(
      self.source,
      token.loc,
      format!("expected '{op}', but got \"{}\"", token.describe()),
    ))
  }

  /// Consume a number and return its value.
  pub fn expect_number(&mut self) -> CompileResult<i32> {
    let token = *self.current();
    let Some(value) = token.value() else {
      return Err(CompileError::syntax(
        self.source,
        token.loc,
        format!("expected a number, but got \"{}\"", token.describe()),
      ));
    };
    self.advance();
    Ok(value)
  }

  pub fn is_eof(&self) -> bool {
    self.current().kind == TokenKind::Eof
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::tokenize;

  #[test]
  fn consume_only_advances_on_match() {
    let source = "+1";
    let mut stream = TokenStream::new(tokenize(source).unwrap(), source);
    assert!(!stream.consume('-'));
    assert_eq!(stream.current().text, "+");
    assert!(stream.consume('+'));
    assert_eq!(stream.current().value(), Some(1));
  }

  #[test]
  fn consume_ignores_numbers() {
    let source = "1";
    let mut stream = TokenStream::new(tokenize(source).unwrap(), source);
    assert!(!stream.consume('1'));
    assert_eq!(stream.expect_number().unwrap(), 1);
  }

  #[test]
  fn expect_reports_expected_operator() {
    let source = "1 2";
    let mut stream = TokenStream::new(tokenize(source).unwrap(), source);
    stream.expect_number().unwrap();
    let err = stream.expect('-').unwrap_err();
    assert_eq!(err.loc(), Some(2));
    assert!(err.to_string().ends_with("expected '-', but got \"2\""));
    assert_eq!(stream.current().value(), Some(2));
  }

  #[test]
  fn expect_number_rejects_operator_and_eof() {
    let source = "-";
    let mut stream = TokenStream::new(tokenize(source).unwrap(), source);
    let err = stream.expect_number().unwrap_err();
    assert!(err.to_string().ends_with("expected a number, but got \"-\""));

    stream.expect('-').unwrap();
    let err = stream.expect_number().unwrap_err();
    assert_eq!(err.loc(), Some(1));
    assert!(err.to_string().ends_with("expected a number, but got \"EOF\""));
  }

  #[test]
  fn eof_is_sticky() {
    let source = "";
    let mut stream = TokenStream::new(tokenize(source).unwrap(), source);
    assert!(stream.is_eof());
    assert!(!stream.consume('+'));
    assert!(stream.expect('+').is_err());
    assert!(stream.expect_number().is_err());
    assert!(stream.is_eof());
  }

  #[test]
  fn missing_sentinel_is_appended() {
    let mut stream = TokenStream::new(Vec::new(), "abc");
    assert!(stream.is_eof());
    assert_eq!(stream.current().loc, 3);
    assert!(!stream.consume('+'));
  }
}
