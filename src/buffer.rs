//! Append-only log of emitted instruction lines.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionBuffer {
  text: String,
  lines: usize,
}

impl InstructionBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append one instruction, which must already carry its line terminator.
  pub fn append_line(&mut self, line: &str) {
    debug_assert!(line.ends_with('\n'), "instruction without terminator: {line:?}");
    self.text.push_str(line);
    self.lines += 1;
  }

  /// The concatenation of everything appended so far.
  pub fn finalize(&self) -> &str {
    &self.text
  }

  /// Number of appended instructions.
  pub fn len(&self) -> usize {
    self.lines
  }

  pub fn is_empty(&self) -> bool {
    self.lines == 0
  }

  pub fn lines(&self) -> impl Iterator<Item = &str> {
    self.text.lines()
  }
}

impl fmt::Display for InstructionBuffer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}
