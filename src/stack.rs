//! Bounded LIFO of operator and open-paren characters used by the
//! infix to postfix conversion.

use crate::error::AllocationFailure;

#[derive(Debug)]
pub struct OperatorStack {
  items: Vec<char>,
  capacity: usize,
}

impl OperatorStack {
  /// Reserve room for exactly `capacity` characters up front. The stack never
  /// grows past that.
  pub fn new(capacity: usize) -> Result<Self, AllocationFailure> {
    let mut items = Vec::new();
    items
      .try_reserve_exact(capacity)
      .map_err(|_| AllocationFailure { capacity })?;
    Ok(Self { items, capacity })
  }

  /// Push `c` as the new top.
  ///
  /// The caller sizes the stack from the input length, so a push beyond
  /// capacity is a logic error and panics rather than reallocating.
  pub fn push(&mut self, c: char) {
    assert!(
      self.items.len() < self.capacity,
      "operator stack overflow (capacity {})",
      self.capacity
    );
    self.items.push(c);
  }

  pub fn pop(&mut self) -> Option<char> {
    self.items.pop()
  }

  pub fn peek(&self) -> Option<char> {
    self.items.last().copied()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }
}
