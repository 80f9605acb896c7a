//! Lexical analysis shared by both translation stages.
//!
//! The tokenizer knows nothing about precedence or stack depth: it splits the
//! text into hexadecimal operand runs, the four arithmetic operators and
//! parentheses, skipping whitespace. Characters outside that alphabet come
//! back as `TokenKind::Unknown` so that each stage can report them with its
//! own error.

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Add,
  Sub,
  Mul,
  Div,
}

impl Operator {
  pub fn from_char(c: char) -> Option<Self> {
    match c {
      '+' => Some(Self::Add),
      '-' => Some(Self::Sub),
      '*' => Some(Self::Mul),
      '/' => Some(Self::Div),
      _ => None,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      Self::Add => '+',
      Self::Sub => '-',
      Self::Mul => '*',
      Self::Div => '/',
    }
  }

  /// Binding strength; all operators are left-associative.
  pub fn precedence(self) -> u8 {
    match self {
      Self::Add | Self::Sub => 1,
      Self::Mul | Self::Div => 2,
    }
  }
}

/// Kinds of tokens recognised in infix and postfix text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Operand,
  Operator(Operator),
  OpenParen,
  CloseParen,
  Unknown(char),
}

/// A token and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  pub fn new(kind: TokenKind, loc: usize, len: usize) -> Self {
    Self { kind, loc, len }
  }

  /// Return the slice from the source that produced this token.
  pub fn text<'a>(&self, source: &'a str) -> &'a str {
    &source[self.loc..self.loc + self.len]
  }
}

/// Lazily lex `input`. Operands are maximal runs of `[0-9a-fA-F]`.
pub fn tokenize(input: &str) -> Tokens<'_> {
  Tokens { input, pos: 0 }
}

pub struct Tokens<'a> {
  input: &'a str,
  pos: usize,
}

impl Iterator for Tokens<'_> {
  type Item = Token;

  fn next(&mut self) -> Option<Token> {
    let bytes = self.input.as_bytes();

    while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
      self.pos += 1;
    }

    let start = self.pos;
    let c = *bytes.get(start)?;

    if c.is_ascii_hexdigit() {
      let mut end = start + 1;
      while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
        end += 1;
      }
      self.pos = end;
      return Some(Token::new(TokenKind::Operand, start, end - start));
    }

    // Not necessarily ASCII: take the whole char so slicing stays on a boundary.
    let ch = self.input[start..].chars().next()?;
    self.pos += ch.len_utf8();

    let kind = match ch {
      '(' => TokenKind::OpenParen,
      ')' => TokenKind::CloseParen,
      _ => match Operator::from_char(ch) {
        Some(op) => TokenKind::Operator(op),
        None => TokenKind::Unknown(ch),
      },
    };
    Some(Token::new(kind, start, ch.len_utf8()))
  }
}
