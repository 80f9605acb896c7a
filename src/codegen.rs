//! Code generation: lower postfix text into 8086 stack-machine assembly.
//!
//! The generator mirrors evaluation of the postfix expression on the
//! hardware stack. Every operand is staged in `BX` and pushed; every operator
//! pops its right operand into `CX` and its left operand into `AX`, computes
//! into `AX` and pushes the result. Register roles are fixed, nothing is
//! allocated.
//!
//! The input is assumed to be well formed postfix as produced by
//! [`crate::parser::convert`]: each operator must find two values already on
//! the runtime stack. Stack depth is not re-validated here, so malformed
//! input yields a program that underflows at run time. A zero divisor is
//! likewise a run-time fault of the generated program.

use std::fmt;

use clap::ValueEnum;
use tracing::{debug, trace, warn};

use crate::buffer::InstructionBuffer;
use crate::error::{CodeGenError, UnknownOperatorSnafu};
use crate::instructions::{self, ACC, EXIT_INTERRUPT, HIGH, PRINT_INTERRUPT, RHS, STAGING};
use crate::tokenizer::{Operator, TokenKind, tokenize};

/// Flavour of the emitted program.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
  /// Real DOS: print the result and return to the OS.
  Native,
  /// Emulators without OS interrupts: no epilogue.
  Hosted,
}

impl fmt::Display for Dialect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Native => "native",
      Self::Hosted => "hosted",
    })
  }
}

/// Widest literal a 16-bit `MOV` immediate can hold.
const MAX_IMMEDIATE_DIGITS: usize = 4;

/// Emit the instruction stream for `postfix`.
///
/// Operands are copied into `MOV` verbatim. One with more than four
/// significant hex digits does not fit a 16-bit register; it is logged as a warning and left for the
/// assembler to reject.
pub fn generate(postfix: &str, dialect: Dialect) -> Result<InstructionBuffer, CodeGenError> {
  let mut asm = InstructionBuffer::new();

  for token in tokenize(postfix) {
    trace!(?token, "postfix token");
    match token.kind {
      TokenKind::Operand => {
        if token.text(postfix).trim_start_matches('0').len() > MAX_IMMEDIATE_DIGITS {
          warn!(
            operand = token.text(postfix),
            loc = token.loc,
            "operand does not fit a 16-bit immediate"
          );
        }
        asm.append_line(&instructions::mov_imm(STAGING, token.text(postfix)));
        asm.append_line(&instructions::push(STAGING));
      }
      TokenKind::Operator(Operator::Add) => {
        emit_pop_operands(&mut asm);
        asm.append_line(&instructions::add(ACC, RHS));
        asm.append_line(&instructions::push(ACC));
      }
      TokenKind::Operator(Operator::Mul) => {
        emit_pop_operands(&mut asm);
        asm.append_line(&instructions::mul(RHS));
        asm.append_line(&instructions::push(ACC));
      }
      TokenKind::Operator(Operator::Div) => {
        // Zero the high word so the dividend is just AX.
        asm.append_line(&instructions::mov_imm(HIGH, "0"));
        emit_pop_operands(&mut asm);
        asm.append_line(&instructions::div(RHS));
        asm.append_line(&instructions::push(ACC));
      }
      TokenKind::Operator(op @ Operator::Sub) => {
        return unknown(op.symbol(), token.loc);
      }
      TokenKind::OpenParen => return unknown('(', token.loc),
      TokenKind::CloseParen => return unknown(')', token.loc),
      TokenKind::Unknown(ch) => return unknown(ch, token.loc),
    }
  }

  if dialect == Dialect::Native {
    asm.append_line(&instructions::pop(HIGH));
    asm.append_line(&instructions::int(PRINT_INTERRUPT));
    asm.append_line(&instructions::int(EXIT_INTERRUPT));
  }

  debug!(%dialect, instructions = asm.len(), "generated assembly");
  Ok(asm)
}

fn emit_pop_operands(asm: &mut InstructionBuffer) {
  asm.append_line(&instructions::pop(RHS));
  asm.append_line(&instructions::pop(ACC));
}

fn unknown<T>(op: char, loc: usize) -> Result<T, CodeGenError> {
  UnknownOperatorSnafu { op, loc }.fail()
}
