//! Command-line front end: read the expression, translate it, report and
//! save the generated program.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use snafu::{ResultExt, Snafu};
use tracing::info;

use crate::codegen::Dialect;
use crate::error::CompileError;

#[derive(Parser, Debug)]
#[command(
  name = "exprasm",
  version,
  about = "Translate a hexadecimal infix expression into 8086 stack-machine assembly"
)]
pub struct Cli {
  /// File holding the expression; only its first line is read.
  #[arg(value_name = "INPUT", default_value = "input.txt", conflicts_with = "expr")]
  pub input: PathBuf,
  /// Expression given inline instead of through INPUT.
  #[arg(short = 'e', long = "expr", value_name = "EXPR")]
  pub expr: Option<String>,
  /// Target flavour. `hosted` omits the print and return-to-OS interrupts for
  /// emulators that do not support them.
  #[arg(short = 'd', long = "dialect", value_enum)]
  pub dialect: Dialect,
  /// Extension of the written file.
  #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Asm)]
  pub format: OutputFormat,
  /// Directory receiving `result.<format>`.
  #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".")]
  pub out_dir: PathBuf,
  /// Do not echo the expression and program to stdout.
  #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
  pub quiet: bool,
  /// Raise the default log level to debug.
  #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
  pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Asm,
  Txt,
}

impl OutputFormat {
  pub fn extension(self) -> &'static str {
    match self {
      Self::Asm => "asm",
      Self::Txt => "txt",
    }
  }
}

#[derive(Debug, Snafu)]
pub enum RunError {
  #[snafu(display("failed to read '{}': {source}", path.display()))]
  ReadInput { path: PathBuf, source: io::Error },
  #[snafu(display("failed to write '{}': {source}", path.display()))]
  WriteOutput { path: PathBuf, source: io::Error },
  #[snafu(display("failed to write to stdout: {source}"))]
  Report { source: io::Error },
  #[snafu(display("{source}"), context(false))]
  Compile { source: CompileError },
}

/// Run one translation as described by `cli`, echoing progress to `out`.
/// Returns the path of the written program.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<PathBuf, RunError> {
  let expr = match &cli.expr {
    Some(expr) => expr.clone(),
    None => read_expression(&cli.input)?,
  };
  let dialect = cli.dialect;

  if !cli.quiet {
    writeln!(out, "\nInput Infix Expression: {expr}").context(ReportSnafu)?;
  }

  let compiled = crate::compile(&expr, dialect)?;

  if !cli.quiet {
    writeln!(out, "\nConverted Postfix Expression: {}", compiled.postfix).context(ReportSnafu)?;
    writeln!(out, "\nGenerating 8086 Assembly Instructions:\n").context(ReportSnafu)?;
    write!(out, "{}", compiled.instructions).context(ReportSnafu)?;
  }

  let path = cli
    .out_dir
    .join(format!("result.{}", cli.format.extension()));
  fs::write(&path, compiled.instructions.finalize()).context(WriteOutputSnafu { path: &path })?;
  info!(path = %path.display(), %dialect, "wrote program");

  if !cli.quiet {
    writeln!(
      out,
      "\nA copy of these instructions was written to {}",
      path.display()
    )
    .context(ReportSnafu)?;
  }

  Ok(path)
}

/// First line of `path`, without its terminator.
fn read_expression(path: &Path) -> Result<String, RunError> {
  let text = fs::read_to_string(path).context(ReadInputSnafu { path })?;
  Ok(text.lines().next().unwrap_or_default().to_string())
}
