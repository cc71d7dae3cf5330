
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// An operator symbol. The five arithmetic operators are spelled out
/// as variants; anything else a host hands us is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
  Power,
  /// Any symbol outside the five above. [`Operator::new`] and the node
  /// builders never put a known symbol here.
  Other(String),
}

impl Operator {
  pub fn new(symbol: &str) -> Self {
    match symbol {
      "+" => Operator::Add,
      "-" => Operator::Subtract,
      "*" => Operator::Multiply,
      "/" => Operator::Divide,
      "^" => Operator::Power,
      other => Operator::Other(other.to_owned()),
    }
  }

  /// Resolves an [`Operator::Other`] holding a known symbol to that
  /// symbol's own variant.
  pub fn normalized(self) -> Self {
    match self {
      Operator::Other(symbol) => Operator::new(&symbol),
      known => known,
    }
  }

  pub fn symbol(&self) -> &str {
    match self {
      Operator::Add => "+",
      Operator::Subtract => "-",
      Operator::Multiply => "*",
      Operator::Divide => "/",
      Operator::Power => "^",
      Operator::Other(symbol) => symbol,
    }
  }

  /// The semantic name conventionally paired with this operator when
  /// applied to two arguments.
  pub fn binary_name(&self) -> &str {
    match self {
      Operator::Add => "add",
      Operator::Subtract => "subtract",
      Operator::Multiply => "multiply",
      Operator::Divide => "divide",
      Operator::Power => "pow",
      Operator::Other(symbol) => symbol,
    }
  }

  /// The semantic name conventionally paired with this operator when
  /// applied to one argument. Only `+` and `-` have prefix forms.
  pub fn unary_name(&self) -> Option<&str> {
    match self {
      Operator::Add => Some("unaryPlus"),
      Operator::Subtract => Some("unaryMinus"),
      _ => None,
    }
  }
}

impl From<String> for Operator {
  fn from(symbol: String) -> Self {
    Operator::new(&symbol)
  }
}

impl From<Operator> for String {
  fn from(op: Operator) -> Self {
    match op {
      Operator::Other(symbol) => symbol,
      known => known.symbol().to_owned(),
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_symbols() {
    for sym in ["+", "-", "*", "/", "^"] {
      let op = Operator::new(sym);
      assert!(!matches!(op, Operator::Other(_)));
      assert_eq!(op.symbol(), sym);
    }
    assert_eq!(Operator::new("%"), Operator::Other(String::from("%")));
  }

  #[test]
  fn test_normalized() {
    assert_eq!(Operator::Other(String::from("^")).normalized(), Operator::Power);
    assert_eq!(Operator::Other(String::from("%")).normalized(), Operator::Other(String::from("%")));
    assert_eq!(Operator::Divide.normalized(), Operator::Divide);
  }

  #[test]
  fn test_semantic_names() {
    assert_eq!(Operator::Multiply.binary_name(), "multiply");
    assert_eq!(Operator::Subtract.unary_name(), Some("unaryMinus"));
    assert_eq!(Operator::Divide.unary_name(), None);
  }
}
