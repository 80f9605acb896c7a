//! Reference machine and evaluator shared by the integration tests.

#![allow(dead_code)]

/// Just enough of an 8086 to run what the generator emits.
#[derive(Debug, Default)]
pub struct Machine {
  pub ax: u16,
  pub bx: u16,
  pub cx: u16,
  pub dx: u16,
  pub stack: Vec<u16>,
  pub printed: Vec<u16>,
  pub exited: bool,
}

impl Machine {
  fn reg(&mut self, name: &str) -> Result<&mut u16, String> {
    match name {
      "AX" => Ok(&mut self.ax),
      "BX" => Ok(&mut self.bx),
      "CX" => Ok(&mut self.cx),
      "DX" => Ok(&mut self.dx),
      other => Err(format!("unknown register {other}")),
    }
  }

  fn step(&mut self, line: &str) -> Result<(), String> {
    let (mnemonic, operands) = line.split_once(' ').unwrap_or((line, ""));
    match mnemonic {
      "MOV" => {
        let (dst, src) = operands
          .split_once(',')
          .ok_or_else(|| format!("bad MOV: {line}"))?;
        let hex = src
          .strip_prefix("0x")
          .ok_or_else(|| format!("MOV source is not an immediate: {line}"))?;
        let value = u16::from_str_radix(hex, 16).map_err(|e| format!("{line}: {e}"))?;
        *self.reg(dst)? = value;
      }
      "PUSH" => {
        let value = *self.reg(operands)?;
        self.stack.push(value);
      }
      "POP" => {
        let value = self
          .stack
          .pop()
          .ok_or_else(|| format!("stack underflow at {line}"))?;
        *self.reg(operands)? = value;
      }
      "ADD" => {
        let (dst, src) = operands
          .split_once(',')
          .ok_or_else(|| format!("bad ADD: {line}"))?;
        let rhs = *self.reg(src)?;
        let lhs = self.reg(dst)?;
        *lhs = lhs.wrapping_add(rhs);
      }
      "MUL" => {
        let product = u32::from(self.ax) * u32::from(*self.reg(operands)?);
        self.ax = product as u16;
        self.dx = (product >> 16) as u16;
      }
      "DIV" => {
        let divisor = u32::from(*self.reg(operands)?);
        if divisor == 0 {
          return Err("division by zero".to_string());
        }
        let dividend = (u32::from(self.dx) << 16) | u32::from(self.ax);
        let quotient = dividend / divisor;
        if quotient > u32::from(u16::MAX) {
          return Err("divide overflow".to_string());
        }
        self.ax = quotient as u16;
        self.dx = (dividend % divisor) as u16;
      }
      "INT" => match operands {
        "21h" => self.printed.push(self.dx),
        "20h" => self.exited = true,
        other => return Err(format!("unsupported interrupt {other}")),
      },
      other => return Err(format!("unknown mnemonic {other}")),
    }
    Ok(())
  }
}

/// Execute `program` until it ends or returns to the OS.
pub fn execute(program: &str) -> Result<Machine, String> {
  let mut machine = Machine::default();
  for line in program.lines() {
    if machine.exited {
      return Err(format!("instruction after return to OS: {line}"));
    }
    machine.step(line)?;
  }
  Ok(machine)
}

/// Evaluate infix text directly with unsigned 16-bit wrapping arithmetic.
/// `None` when a divisor evaluates to zero.
pub fn evaluate(infix: &str) -> Option<u16> {
  let chars: Vec<char> = infix.chars().filter(|c| !c.is_whitespace()).collect();
  let mut pos = 0;
  let value = expr(&chars, &mut pos)?;
  assert_eq!(pos, chars.len(), "trailing input in {infix:?}");
  Some(value)
}

fn expr(chars: &[char], pos: &mut usize) -> Option<u16> {
  let mut value = term(chars, pos)?;
  while let Some(&op) = chars.get(*pos) {
    match op {
      '+' | '-' => {
        *pos += 1;
        let rhs = term(chars, pos)?;
        value = if op == '+' {
          value.wrapping_add(rhs)
        } else {
          value.wrapping_sub(rhs)
        };
      }
      _ => break,
    }
  }
  Some(value)
}

fn term(chars: &[char], pos: &mut usize) -> Option<u16> {
  let mut value = factor(chars, pos)?;
  while let Some(&op) = chars.get(*pos) {
    match op {
      '*' => {
        *pos += 1;
        value = value.wrapping_mul(factor(chars, pos)?);
      }
      '/' => {
        *pos += 1;
        value = value.checked_div(factor(chars, pos)?)?;
      }
      _ => break,
    }
  }
  Some(value)
}

fn factor(chars: &[char], pos: &mut usize) -> Option<u16> {
  if chars.get(*pos) == Some(&'(') {
    *pos += 1;
    let value = expr(chars, pos)?;
    assert_eq!(chars.get(*pos), Some(&')'), "unbalanced test input");
    *pos += 1;
    return Some(value);
  }
  let start = *pos;
  while chars.get(*pos).is_some_and(|c| c.is_ascii_hexdigit()) {
    *pos += 1;
  }
  let digits: String = chars[start..*pos].iter().collect();
  Some(u16::from_str_radix(&digits, 16).expect("operand fits in 16 bits"))
}

/// The value the program leaves behind: what it printed, or the top of the
/// stack when it has no epilogue.
pub fn result_of(machine: &Machine) -> Option<u16> {
  machine
    .printed
    .last()
    .copied()
    .or_else(|| machine.stack.last().copied())
}
