//! Infix to postfix conversion using the shunting-yard algorithm.
//!
//! Operands are copied to the output untouched; operators and open parens
//! wait on an [`OperatorStack`] until something of lower or equal binding
//! strength (or a closing paren) flushes them. The output carries no
//! parentheses. A single space is written before an operator or operand
//! whenever the output ends in an operand digit, so `1+2` becomes `1 2+` and
//! no two operands fuse into one when the postfix is lexed again.

use snafu::{OptionExt, ResultExt};
use tracing::{debug, trace};

use crate::error::{AllocationSnafu, ParseError, UnbalancedParensSnafu, UnsupportedCharacterSnafu};
use crate::stack::OperatorStack;
use crate::tokenizer::{Operator, TokenKind, tokenize};

/// Convert an infix expression into space-separated postfix.
///
/// Nothing partial is returned on failure.
pub fn convert(infix: &str) -> Result<String, ParseError> {
  // Every push consumes a distinct input byte, so the input length bounds
  // the stack depth.
  let mut stack = OperatorStack::new(infix.len()).context(AllocationSnafu)?;
  let mut open_locs = Vec::new();
  let mut out = String::with_capacity(infix.len() * 2);

  for token in tokenize(infix) {
    trace!(?token, "infix token");
    match token.kind {
      TokenKind::Operand => {
        separate_operand(&mut out);
        out.push_str(token.text(infix));
      }
      TokenKind::OpenParen => {
        stack.push('(');
        open_locs.push(token.loc);
      }
      TokenKind::CloseParen => {
        loop {
          let top = stack
            .pop()
            .context(UnbalancedParensSnafu { loc: token.loc })?;
          if top == '(' {
            break;
          }
          out.push(top);
        }
        open_locs.pop();
      }
      TokenKind::Operator(op) => {
        separate_operand(&mut out);
        flush_while_binding(&mut stack, &mut out, op);
        stack.push(op.symbol());
      }
      TokenKind::Unknown(ch) => {
        return UnsupportedCharacterSnafu { ch, loc: token.loc }.fail();
      }
    }
  }

  while let Some(top) = stack.pop() {
    if top == '(' {
      let loc = open_locs.last().copied().unwrap_or(infix.len());
      return UnbalancedParensSnafu { loc }.fail();
    }
    out.push(top);
  }

  debug!(%infix, postfix = %out, "converted to postfix");
  Ok(out)
}

/// Keep the operand just written apart from whatever comes next.
fn separate_operand(out: &mut String) {
  if out.ends_with(|c: char| c.is_ascii_hexdigit()) {
    out.push(' ');
  }
}

/// Pop every stacked operator that binds at least as tightly as `incoming`,
/// stopping at an open paren or the bottom of the stack.
fn flush_while_binding(stack: &mut OperatorStack, out: &mut String, incoming: Operator) {
  while let Some(top) = stack.peek()
    && let Some(top_op) = Operator::from_char(top)
    && top_op.precedence() >= incoming.precedence()
  {
    stack.pop();
    out.push(top);
  }
}
