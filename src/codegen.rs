//! Code generation fused with parsing.
//!
//! Grammar:
//!
//! ```text
//! program := number (("+" | "-") number)* EOF
//! ```
//!
//! Each recognised construct is lowered to exactly one x86-64 instruction
//! working on `rax`, so the routine returns the left-to-right result as a
//! System V `main`.

use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::error::CompileResult;
use crate::parser::TokenStream;

/// Assembler dialect of the emitted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Syntax {
  /// GNU as Intel syntax without register prefixes.
  #[default]
  Intel,
  /// GNU as AT&T syntax.
  Att,
}

impl Syntax {
  fn preamble(self) -> &'static str {
    match self {
      Self::Intel => ".intel_syntax noprefix\n.global main\n",
      Self::Att => ".global main\n",
    }
  }

  fn instruction(self, mnemonic: &str, value: i32) -> String {
    match self {
      Self::Intel => format!("  {mnemonic} rax, {value}\n"),
      Self::Att => format!("  {mnemonic} ${value}, %rax\n"),
    }
  }
}

impl fmt::Display for Syntax {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Intel => f.write_str("intel"),
      Self::Att => f.write_str("att"),
    }
  }
}

/// Drive the cursor over the whole program and emit the `main` routine.
pub fn generate(stream: &mut TokenStream, syntax: Syntax) -> CompileResult<String> {
  let mut asm = String::new();
  asm.push_str(syntax.preamble());
  asm.push_str("main:\n");

  let first = stream.expect_number()?;
  asm.push_str(&syntax.instruction("mov", first));

  let mut ops = 0usize;
  while !stream.is_eof() {
    ops += 1;
    if stream.consume('+') {
      let value = stream.expect_number()?;
      asm.push_str(&syntax.instruction("add", value));
      continue;
    }

    stream.expect('-')?;
    let value = stream.expect_number()?;
    asm.push_str(&syntax.instruction("sub", value));
  }

  asm.push_str("  ret\n");
  debug!(%syntax, ops, "generated main");
  Ok(asm)
}
