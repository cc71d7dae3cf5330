
// The #[non_exhaustive] attribute applies at the crate-level, and I
// want module-level restrictions, which are far stricter.
#![allow(clippy::manual_non_exhaustive)]

//! Rule-driven symbolic differentiation of arithmetic expression
//! trees.
//!
//! ```ignore
//! use symdiff::expr::Node;
//! use symdiff::expr::var::Var;
//! use symdiff::expr::calculus::derivative_of;
//!
//! let x = Node::symbol(Var::new("x").unwrap());
//! let expr = Node::call("log", vec![x.clone()]);
//! assert_eq!(derivative_of(&expr, &x)?.to_string(), "1 / x");
//! ```

pub mod display;
pub mod expr;
pub mod mode;
pub mod util;

use crate::expr::calculus::DifferentiationFailure;
use crate::expr::var::TryFromStringError;

use thiserror::Error;

use std::error::{Error as StdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  CustomError(Box<dyn StdError + Send + Sync + 'static>),
  #[error("{0}")]
  DifferentiationFailure(#[from] DifferentiationFailure),
  #[error("{0}")]
  ConfigError(#[from] serde_json::Error),
}

impl Error {
  pub fn custom_error(err: impl StdError + Send + Sync + 'static) -> Self {
    Self::CustomError(Box::new(err))
  }
}

impl From<TryFromStringError> for Error {
  fn from(err: TryFromStringError) -> Self {
    Self::custom_error(err)
  }
}
