//! Crate root: wires together the compilation pipeline.
//!
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `parser` provides the look-ahead cursor over that stream.
//! - `codegen` drives the cursor and emits x86-64 assembly in a single pass.
//! - `error` holds the error type shared by the other modules.

pub mod codegen;
pub mod error;
pub mod parser;
pub mod tokenizer;

pub use codegen::Syntax;
pub use error::{CompileError, CompileResult};

use parser::TokenStream;

/// Compile an expression into an assembly routine.
pub fn generate_assembly(expr: &str, syntax: Syntax) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(expr)?;
  let mut stream = TokenStream::new(tokens, expr);
  codegen::generate(&mut stream, syntax)
}

/// Render the token stream of an expression, one token per line.
pub fn dump_tokens(expr: &str) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(expr)?;
  Ok(
    tokens
      .iter()
      .map(|token| format!("{token}\n"))
      .collect(),
  )
}
