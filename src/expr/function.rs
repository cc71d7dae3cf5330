
//! Names of the functions that may appear in a call node.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A function name. The elementary functions the engine knows about
/// are spelled out as variants, so that every dispatch site must
/// account for each of them. Any other name is carried verbatim in
/// [`FunctionName::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FunctionName {
  Log,
  Exp,
  Sin,
  Cos,
  Tan,
  Sec,
  Csc,
  Cot,
  Asin,
  Acos,
  Atan,
  Asec,
  Acsc,
  Acot,
  Sinh,
  Cosh,
  Tanh,
  Sech,
  Csch,
  Coth,
  Asinh,
  Acosh,
  Atanh,
  Asech,
  Acsch,
  Acoth,
  /// Any name outside the set above. [`FunctionName::new`] and the
  /// node builders never put a known name here.
  Other(String),
}

static KNOWN_FUNCTIONS: [FunctionName; 26] = [
  FunctionName::Log, FunctionName::Exp,
  FunctionName::Sin, FunctionName::Cos, FunctionName::Tan,
  FunctionName::Sec, FunctionName::Csc, FunctionName::Cot,
  FunctionName::Asin, FunctionName::Acos, FunctionName::Atan,
  FunctionName::Asec, FunctionName::Acsc, FunctionName::Acot,
  FunctionName::Sinh, FunctionName::Cosh, FunctionName::Tanh,
  FunctionName::Sech, FunctionName::Csch, FunctionName::Coth,
  FunctionName::Asinh, FunctionName::Acosh, FunctionName::Atanh,
  FunctionName::Asech, FunctionName::Acsch, FunctionName::Acoth,
];

impl FunctionName {
  pub fn new(name: &str) -> Self {
    KNOWN_FUNCTIONS.iter()
      .find(|f| f.as_str() == name)
      .cloned()
      .unwrap_or_else(|| FunctionName::Other(name.to_owned()))
  }

  pub fn as_str(&self) -> &str {
    match self {
      FunctionName::Log => "log",
      FunctionName::Exp => "exp",
      FunctionName::Sin => "sin",
      FunctionName::Cos => "cos",
      FunctionName::Tan => "tan",
      FunctionName::Sec => "sec",
      FunctionName::Csc => "csc",
      FunctionName::Cot => "cot",
      FunctionName::Asin => "asin",
      FunctionName::Acos => "acos",
      FunctionName::Atan => "atan",
      FunctionName::Asec => "asec",
      FunctionName::Acsc => "acsc",
      FunctionName::Acot => "acot",
      FunctionName::Sinh => "sinh",
      FunctionName::Cosh => "cosh",
      FunctionName::Tanh => "tanh",
      FunctionName::Sech => "sech",
      FunctionName::Csch => "csch",
      FunctionName::Coth => "coth",
      FunctionName::Asinh => "asinh",
      FunctionName::Acosh => "acosh",
      FunctionName::Atanh => "atanh",
      FunctionName::Asech => "asech",
      FunctionName::Acsch => "acsch",
      FunctionName::Acoth => "acoth",
      FunctionName::Other(name) => name,
    }
  }

  /// Resolves an [`FunctionName::Other`] holding a known name to that
  /// name's own variant.
  pub fn normalized(self) -> Self {
    match self {
      FunctionName::Other(name) => FunctionName::new(&name),
      known => known,
    }
  }
}

impl From<&str> for FunctionName {
  fn from(name: &str) -> Self {
    FunctionName::new(name)
  }
}

impl From<String> for FunctionName {
  fn from(name: String) -> Self {
    FunctionName::new(&name)
  }
}

impl From<FunctionName> for String {
  fn from(name: FunctionName) -> Self {
    match name {
      FunctionName::Other(name) => name,
      known => known.as_str().to_owned(),
    }
  }
}

impl Display for FunctionName {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
