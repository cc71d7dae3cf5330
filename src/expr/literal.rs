
//! Literal payloads carried by constant nodes.
//!
//! The derivative engine never does arithmetic on constants. A
//! constant's value is kept as the literal text the host produced
//! (arbitrary-precision integers, decimals, or anything else the host
//! numeric tower prints), along with an opaque tag naming the host's
//! value type.

use num::BigInt;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The literal text of a constant, such as `"0"`, `"2"`, or `"3.5"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstantValue(String);

/// The host's name for the type of a constant, such as `"number"`.
/// Passed through the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueType(String);

impl ConstantValue {
  pub fn new(text: impl Into<String>) -> Self {
    Self(text.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Interprets the literal as an exact integer, if it is written as
  /// one. Decimal and exponent notation are not integers for this
  /// purpose, even when integral in value.
  pub fn as_integer(&self) -> Option<BigInt> {
    BigInt::from_str(self.0.trim()).ok()
  }

  /// Whether the literal is the exact integer `n`.
  pub fn is_integer(&self, n: i64) -> bool {
    self.as_integer() == Some(BigInt::from(n))
  }
}

impl ValueType {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  /// The tag used for literals the engine introduces on its own.
  pub fn number() -> Self {
    Self::new("number")
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<i64> for ConstantValue {
  fn from(n: i64) -> Self {
    Self(n.to_string())
  }
}

impl From<BigInt> for ConstantValue {
  fn from(n: BigInt) -> Self {
    Self(n.to_string())
  }
}

impl From<&str> for ConstantValue {
  fn from(s: &str) -> Self {
    Self::new(s)
  }
}

impl Display for ConstantValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Display for ValueType {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_integer_literals() {
    assert!(ConstantValue::new("0").is_integer(0));
    assert!(ConstantValue::new("1").is_integer(1));
    assert!(ConstantValue::new("-1").is_integer(-1));
    assert!(ConstantValue::new("00").is_integer(0));
    assert!(ConstantValue::new("123456789012345678901234567890").as_integer().is_some());
  }

  #[test]
  fn test_non_integer_literals() {
    assert!(!ConstantValue::new("1.0").is_integer(1));
    assert!(!ConstantValue::new("0.5").is_integer(0));
    assert!(!ConstantValue::new("1e0").is_integer(1));
    assert_eq!(ConstantValue::new("pi").as_integer(), None);
  }

  #[test]
  fn test_from_integer() {
    assert_eq!(ConstantValue::from(2), ConstantValue::new("2"));
    assert_eq!(ConstantValue::from(BigInt::from(-7)).as_str(), "-7");
  }
}
