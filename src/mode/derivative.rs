
use bitflags::bitflags;
use serde::{Serialize, Deserialize};

/// Default limit on the nesting depth of an expression handed to the
/// derivative engine.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings which control how the derivative engine treats
/// questionable input.
///
/// This structure is designed to be cheap to clone, but its exact
/// implementation is private. It can be loaded from the JSON
/// configuration a host supplies, in the form
/// `{ "strict": true, "max_depth": 256 }`, where every key is
/// optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DerivativeModeConfig", into = "DerivativeModeConfig")]
pub struct DerivativeMode {
  inner: DerivativeModeBits,
  max_depth: usize,
}

bitflags! {
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
  struct DerivativeModeBits: u8 {
    const STRICT = 0b0001;
  }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct DerivativeModeConfig {
  strict: bool,
  max_depth: usize,
}

impl DerivativeMode {
  pub fn new() -> Self {
    Self::default()
  }

  /// Parses a mode from its JSON representation.
  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  /// The strict flag is off by default. If the strict flag is off,
  /// then calls which are recognized but malformed (such as `log`
  /// with three arguments, or a call with no arguments at all) are
  /// left in the derivative unchanged. If the strict flag is on,
  /// those calls produce an error instead.
  pub fn has_strict_flag(&self) -> bool {
    self.inner.contains(DerivativeModeBits::STRICT)
  }

  /// Sets the strict flag. See [`DerivativeMode::has_strict_flag`].
  pub fn set_strict_flag(&mut self, mode: bool) {
    self.inner.set(DerivativeModeBits::STRICT, mode);
  }

  /// The deepest expression the engine will accept. Deeper
  /// expressions are rejected up front rather than risking stack
  /// exhaustion.
  pub fn max_depth(&self) -> usize {
    self.max_depth
  }

  pub fn set_max_depth(&mut self, max_depth: usize) {
    self.max_depth = max_depth;
  }
}

impl Default for DerivativeMode {
  fn default() -> Self {
    Self {
      inner: DerivativeModeBits::default(),
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

impl Default for DerivativeModeConfig {
  fn default() -> Self {
    DerivativeMode::default().into()
  }
}

impl From<DerivativeModeConfig> for DerivativeMode {
  fn from(config: DerivativeModeConfig) -> Self {
    let mut mode = DerivativeMode::new();
    mode.set_strict_flag(config.strict);
    mode.set_max_depth(config.max_depth);
    mode
  }
}

impl From<DerivativeMode> for DerivativeModeConfig {
  fn from(mode: DerivativeMode) -> Self {
    DerivativeModeConfig {
      strict: mode.has_strict_flag(),
      max_depth: mode.max_depth(),
    }
  }
}
