//! Error taxonomy shared across the translation pipeline.
//!
//! Each stage has its own error type carrying the byte offset of the
//! offending character. `CompileError` wraps them together with the text the
//! stage was reading, so its `Display` can point at the culprit with a caret
//! in the same style as chibicc diagnostics.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

/// The operator stack could not reserve its backing storage.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("operator stack could not reserve {capacity} slots"))]
pub struct AllocationFailure {
  pub capacity: usize,
}

/// Failures of the infix to postfix stage.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
  #[snafu(display("unbalanced parentheses"))]
  UnbalancedParens { loc: usize },
  #[snafu(display("unsupported character '{ch}'"))]
  UnsupportedCharacter { ch: char, loc: usize },
  #[snafu(display("{source}"))]
  Allocation { source: AllocationFailure },
}

impl ParseError {
  /// Byte offset in the infix text, when the error has one.
  pub fn loc(&self) -> Option<usize> {
    match self {
      Self::UnbalancedParens { loc } | Self::UnsupportedCharacter { loc, .. } => Some(*loc),
      Self::Allocation { .. } => None,
    }
  }
}

/// Failures of the postfix to assembly stage.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CodeGenError {
  #[snafu(display("unknown operator '{op}'"))]
  UnknownOperator { op: char, loc: usize },
}

impl CodeGenError {
  pub fn loc(&self) -> usize {
    match self {
      Self::UnknownOperator { loc, .. } => *loc,
    }
  }
}

/// Error returned by [`crate::compile`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CompileError {
  #[snafu(display("{}", render(expr, source.loc(), source)))]
  Parse { expr: String, source: ParseError },
  #[snafu(display("{}", render(postfix, Some(source.loc()), source)))]
  CodeGen {
    postfix: String,
    source: CodeGenError,
  },
}

/// Format `message` under a quoted copy of `text`, with a caret below byte
/// `loc`. Without a location only the quoted text and message are shown.
pub fn render(text: &str, loc: Option<usize>, message: impl std::fmt::Display) -> String {
  let expr_line = format!("'{text}'");
  match loc {
    Some(loc) => {
      let safe_loc = loc.min(text.len());
      let char_offset = text[..safe_loc].chars().count() + 1; // account for opening quote
      let marker = format!("{}^", " ".repeat(char_offset));
      format!("{expr_line}\n{marker} {message}")
    }
    None => format!("{expr_line}\n{message}"),
  }
}
