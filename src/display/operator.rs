
use crate::expr::operator::Operator;

/// How an operator renders in infix notation: its precedence and
/// associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
  assoc: Associativity,
  prec: Precedence,
}

/// The precedence of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

/// The associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Associativity {
  left_assoc: bool,
  right_assoc: bool,
}

impl OperatorSpec {
  pub const fn new(assoc: Associativity, prec: Precedence) -> OperatorSpec {
    OperatorSpec { assoc, prec }
  }

  /// The infix rendering of a binary application of `op`, if `op` is
  /// one of the arithmetic operators.
  pub fn binary(op: &Operator) -> Option<OperatorSpec> {
    match op {
      Operator::Add | Operator::Subtract => Some(OperatorSpec::new(Associativity::LEFT, Precedence::new(1))),
      Operator::Multiply | Operator::Divide => Some(OperatorSpec::new(Associativity::LEFT, Precedence::new(2))),
      Operator::Power => Some(OperatorSpec::new(Associativity::RIGHT, Precedence::new(4))),
      Operator::Other(_) => None,
    }
  }

  /// The rendering of a prefix application of `op`, if `op` has a
  /// prefix form.
  pub fn prefix(op: &Operator) -> Option<OperatorSpec> {
    match op {
      Operator::Add | Operator::Subtract => Some(OperatorSpec::new(Associativity::RIGHT, Precedence::new(3))),
      _ => None,
    }
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  pub fn left_precedence(&self) -> Precedence {
    if self.assoc.is_left_assoc() {
      self.prec
    } else {
      self.prec.incremented()
    }
  }

  pub fn right_precedence(&self) -> Precedence {
    if self.assoc.is_right_assoc() {
      self.prec
    } else {
      self.prec.incremented()
    }
  }
}

impl Associativity {
  /// Indicates an operator which associates to the left.
  pub const LEFT: Associativity = Associativity {
    left_assoc: true,
    right_assoc: false,
  };
  /// Indicates an operator which associate to the right.
  pub const RIGHT: Associativity = Associativity {
    left_assoc: false,
    right_assoc: true,
  };
  pub const fn is_left_assoc(self) -> bool {
    self.left_assoc
  }
  pub const fn is_right_assoc(self) -> bool {
    self.right_assoc
  }
}

impl Precedence {
  /// The precedence of a context that never needs parentheses, such
  /// as the top level or a function argument.
  pub const MIN: Precedence = Precedence(0);
  /// The precedence of a context where anything compound needs
  /// parentheses.
  pub const MAX: Precedence = Precedence(u64::MAX);

  /// Internally, we store an operator's precedence as ten times the
  /// input value, so that we can increment to represent
  /// associativity.
  ///
  /// For example, if `#` is a left-associative operator with
  /// (internal) precedence value `p`, then its left-hand side is also
  /// at precedence value `p`, while its right-hand side is at
  /// precedence value `p + 1`, indicating parentheses will be
  /// required if `#` is encountered again.
  pub const fn new(n: u64) -> Precedence {
    Precedence(n * 10)
  }

  pub const fn from_raw(n: u64) -> Precedence {
    Precedence(n)
  }

  pub fn incremented(self) -> Precedence {
    Precedence(self.0.saturating_add(1))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_left_assoc_precedence() {
    let spec = OperatorSpec::binary(&Operator::Subtract).unwrap();
    assert_eq!(spec.left_precedence(), Precedence::from_raw(10));
    assert_eq!(spec.right_precedence(), Precedence::from_raw(11));
  }

  #[test]
  fn test_right_assoc_precedence() {
    let spec = OperatorSpec::binary(&Operator::Power).unwrap();
    assert_eq!(spec.left_precedence(), Precedence::from_raw(41));
    assert_eq!(spec.right_precedence(), Precedence::from_raw(40));
  }

  #[test]
  fn test_prefix_forms() {
    assert!(OperatorSpec::prefix(&Operator::Subtract).is_some());
    assert!(OperatorSpec::prefix(&Operator::Multiply).is_none());
    assert!(OperatorSpec::binary(&Operator::Other(String::from("%"))).is_none());
  }
}
