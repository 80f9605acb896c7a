//! Crate root: wires together the translation pipeline.
//!
//! Infix text goes through two stages, each usable on its own:
//! - `parser` rewrites infix into postfix with the shunting-yard algorithm,
//!   backed by the bounded `stack`.
//! - `codegen` walks the postfix and emits 8086 stack-machine code into an
//!   append-only `buffer`, using the fragment builders in `instructions`.
//!
//! `tokenizer` is shared by both stages and `error` holds the diagnostics.
//! `cli` is the command-line front end used by the binary.

pub mod buffer;
pub mod cli;
pub mod codegen;
pub mod error;
pub mod instructions;
pub mod parser;
pub mod stack;
pub mod tokenizer;

use snafu::ResultExt;

pub use buffer::InstructionBuffer;
pub use codegen::{Dialect, generate};
pub use error::{AllocationFailure, CodeGenError, CompileError, CompileResult, ParseError};
pub use parser::convert;

/// Output of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
  pub postfix: String,
  pub instructions: InstructionBuffer,
}

/// Translate an infix expression into assembly for `dialect`.
pub fn compile(expr: &str, dialect: Dialect) -> CompileResult<Compiled> {
  let postfix = convert(expr).context(error::ParseSnafu { expr })?;
  let instructions = generate(&postfix, dialect).context(error::CodeGenSnafu {
    postfix: postfix.as_str(),
  })?;
  Ok(Compiled {
    postfix,
    instructions,
  })
}
