
//! Symbolic differentiation of expression trees.
//!
//! Differentiation happens in two passes. [`annotate`] walks the tree
//! bottom-up and records which subtrees are constant with respect to
//! the variable. [`differentiate`] then walks the annotated tree
//! top-down, choosing a rewrite rule at each node based on the node's
//! shape and the constancy of its arguments. [`derivative_of`] runs
//! both.
//!
//! Both passes recurse once per level of nesting in the expression.
//! [`DerivativeEngine`] guards against overly deep input; the
//! individual passes do not.

mod constancy;
mod derivative;
mod engine;
mod error;


pub use constancy::{Annotated, annotate, annotate_constancy};
pub use derivative::{differentiate, differentiate_with_mode};
pub use engine::{DerivativeEngine, DERIVATIVE_FUNCTION_NAME, derivative_of, derivative_of_with_mode, derivative_transform};
pub use error::{DifferentiationError, DifferentiationFailure, RuleKind};
