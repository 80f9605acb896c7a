//! 8086 instruction vocabulary emitted by the code generator.
//!
//! Every builder is a pure function from operands to one instruction line
//! (terminator included); appending the line is left to the caller.

use std::fmt;

/// 16-bit registers the generator touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
  Ax,
  Bx,
  Cx,
  Dx,
}

impl Register {
  pub fn name(self) -> &'static str {
    match self {
      Self::Ax => "AX",
      Self::Bx => "BX",
      Self::Cx => "CX",
      Self::Dx => "DX",
    }
  }
}

impl fmt::Display for Register {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Operand literals are staged here before being pushed.
pub const STAGING: Register = Register::Bx;
/// Right-hand operand of a binary operator.
pub const RHS: Register = Register::Cx;
/// Left-hand operand and result of a binary operator.
pub const ACC: Register = Register::Ax;
/// High word of the dividend, cleared before `DIV`; also receives the printed value.
pub const HIGH: Register = Register::Dx;

/// DOS interrupt that prints the value in `DX`.
pub const PRINT_INTERRUPT: &str = "21h";
/// DOS interrupt that returns control to the OS.
pub const EXIT_INTERRUPT: &str = "20h";

/// `MOV dst,0x<hex>`
pub fn mov_imm(dst: Register, hex: &str) -> String {
  format!("MOV {dst},0x{hex}\n")
}

pub fn push(reg: Register) -> String {
  format!("PUSH {reg}\n")
}

pub fn pop(reg: Register) -> String {
  format!("POP {reg}\n")
}

/// `ADD dst,src`
pub fn add(dst: Register, src: Register) -> String {
  format!("ADD {dst},{src}\n")
}

/// Unsigned `DX:AX = AX * src`.
pub fn mul(src: Register) -> String {
  format!("MUL {src}\n")
}

/// Unsigned `AX = DX:AX / src`, remainder in `DX`.
pub fn div(src: Register) -> String {
  format!("DIV {src}\n")
}

pub fn int(vector: &str) -> String {
  format!("INT {vector}\n")
}
