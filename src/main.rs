use std::env;
use std::ffi::OsString;
use std::process;

use clap::Parser;
use clap::builder::FalseyValueParser;
use tracing_subscriber::EnvFilter;

use r9cc::error::ArgumentCountSnafu;
use r9cc::{CompileError, CompileResult, Syntax};

/// Output options. These come from the environment only: the command line
/// carries nothing but the expression.
#[derive(Parser, Debug)]
#[command(name = "r9cc", disable_help_flag = true, disable_version_flag = true)]
struct Options {
  /// Assembler dialect to emit.
  #[arg(long, env = "R9CC_SYNTAX", value_enum, default_value_t = Syntax::Intel)]
  syntax: Syntax,

  /// Print the token stream instead of assembly.
  #[arg(long, env = "R9CC_EMIT_TOKENS", value_parser = FalseyValueParser::new())]
  emit_tokens: bool,
}

/// The single command-line argument, whatever it looks like.
fn expression(args: &[OsString]) -> CompileResult<String> {
  let [expr] = args else {
    return ArgumentCountSnafu { count: args.len() }.fail();
  };
  Ok(expr.to_string_lossy().into_owned())
}

fn compile(expr: &str, options: &Options) -> CompileResult<String> {
  if options.emit_tokens {
    r9cc::dump_tokens(expr)
  } else {
    r9cc::generate_assembly(expr, options.syntax)
  }
}

fn fail(err: CompileError) -> ! {
  tracing::debug!(loc = ?err.loc(), "compilation failed");
  eprintln!("{err}");
  process::exit(1);
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let args: Vec<OsString> = env::args_os().skip(1).collect();
  let expr = expression(&args).unwrap_or_else(|err| fail(err));

  let options = match Options::try_parse_from(["r9cc"]) {
    Ok(options) => options,
    Err(err) => {
      err.print().ok();
      process::exit(1);
    }
  };

  match compile(&expr, &options) {
    Ok(out) => print!("{out}"),
    Err(err) => fail(err),
  }
}
