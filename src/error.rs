//! Shared error type for the whole pipeline.
//!
//! Nothing below `main` terminates the process: every stage returns a
//! `CompileResult` and the binary turns the first error into a single
//! message on stderr plus exit status 1. Diagnostics that refer to the
//! expression quote it and point at the offending byte with a caret.

use std::num::ParseIntError;

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CompileError {
  #[snafu(display("Wrong number of arguments"))]
  ArgumentCount { count: usize },

  #[snafu(display("{} Cannot tokenize", locate(input, *loc)))]
  Tokenize { input: String, loc: usize },

  #[snafu(display("{} {message}", locate(input, *loc)))]
  Syntax {
    input: String,
    loc: usize,
    message: String,
  },

  #[snafu(display("{} number out of range", locate(input, *loc)))]
  NumericOverflow {
    input: String,
    loc: usize,
    source: ParseIntError,
  },
}

impl CompileError {
  /// Syntax error anchored at a byte offset in the expression.
  pub fn syntax(input: &str, loc: usize, message: impl Into<String>) -> Self {
    SyntaxSnafu {
      input,
      loc,
      message,
    }
    .build()
  }

  /// Byte offset the diagnostic points at, if it has one.
  pub fn loc(&self) -> Option<usize> {
    match self {
      Self::ArgumentCount { .. } => None,
      Self::Tokenize { loc, .. }
      | Self::Syntax { loc, .. }
      | Self::NumericOverflow { loc, .. } => Some(*loc),
    }
  }
}

/// Render the quoted expression and a caret line under byte `loc`.
fn locate(input: &str, loc: usize) -> String {
  let safe_loc = loc.min(input.len());
  let prefix = input.get(..safe_loc).unwrap_or(input);
  let column = prefix.chars().count() + 1; // opening quote
  format!("'{input}'\n{}^", " ".repeat(column))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn argument_count_has_fixed_message() {
    let err = CompileError::ArgumentCount { count: 3 };
    assert_eq!(err.to_string(), "Wrong number of arguments");
    assert_eq!(err.loc(), None);
  }

  #[test]
  fn tokenize_error_points_at_offending_byte() {
    let err = CompileError::Tokenize {
      input: "1+a".to_string(),
      loc: 2,
    };
    assert_eq!(err.to_string(), "'1+a'\n   ^ Cannot tokenize");
  }

  #[test]
  fn caret_past_end_marks_end_of_input() {
    let err = CompileError::syntax("1+", 2, "expected a number, but got \"EOF\"");
    assert_eq!(
      err.to_string(),
      "'1+'\n   ^ expected a number, but got \"EOF\""
    );
  }

  #[test]
  fn caret_counts_characters_not_bytes() {
    let err = CompileError::Tokenize {
      input: "é1".to_string(),
      loc: 0,
    };
    assert_eq!(err.to_string(), "'é1'\n ^ Cannot tokenize");

    let err = CompileError::syntax("é 1", 3, "x");
    assert_eq!(err.to_string(), "'é 1'\n   ^ x");
  }
}
