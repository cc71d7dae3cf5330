
use crate::expr::Node;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A differentiation rule whose preconditions were not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
  /// A power whose exponent depends on the variable.
  FunctionalPower,
  /// A product where both factors depend on the variable.
  Product,
  /// A quotient where both operands depend on the variable.
  Quotient,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DifferentiationError {
  #[error("Node type \"{0}\" not captured")]
  UnclassifiableNode(String),
  #[error("Derivative of {0} not supported")]
  UnsupportedFunction(String),
  #[error("Operator {0} not supported")]
  UnsupportedOperator(String),
  #[error("{0} not supported")]
  UnsupportedRule(RuleKind),
  #[error("{name} does not accept {arity} argument(s)")]
  UnsupportedArity { name: String, arity: usize },
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
  #[error("Expression nesting depth {depth} exceeds the limit of {limit}")]
  ExpressionTooDeep { depth: usize, limit: usize },
}

/// A failed request to differentiate an expression, together with
/// the expression that was being differentiated.
///
/// `original_expr` is `None` only when the expression was rejected
/// for being too deeply nested, since copying (or even printing) such
/// a tree would itself exhaust the stack.
#[derive(Debug, Clone, Error)]
#[error("{error}{}", WhileDifferentiating(.original_expr.as_ref()))]
pub struct DifferentiationFailure {
  pub original_expr: Option<Node>,
  #[source]
  pub error: DifferentiationError,
  _priv: (), // Prevent construction outside of this module
}

struct WhileDifferentiating<'a>(Option<&'a Node>);

impl DifferentiationFailure {
  pub(super) fn new(original_expr: Node, error: DifferentiationError) -> Self {
    Self { original_expr: Some(original_expr), error, _priv: () }
  }

  pub(super) fn too_deep(depth: usize, limit: usize) -> Self {
    Self {
      original_expr: None,
      error: DifferentiationError::ExpressionTooDeep { depth, limit },
      _priv: (),
    }
  }
}

impl Display for WhileDifferentiating<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.0 {
      Some(expr) => write!(f, " (while differentiating {expr})"),
      None => Ok(()),
    }
  }
}

impl Display for RuleKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      RuleKind::FunctionalPower => write!(f, "Functional power rule"),
      RuleKind::Product => write!(f, "Product rule"),
      RuleKind::Quotient => write!(f, "Quotient rule"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::var::Var;

  #[test]
  fn test_error_messages() {
    assert_eq!(
      DifferentiationError::UnsupportedFunction(String::from("tan")).to_string(),
      "Derivative of tan not supported",
    );
    assert_eq!(
      DifferentiationError::UnsupportedRule(RuleKind::Product).to_string(),
      "Product rule not supported",
    );
    assert_eq!(
      DifferentiationError::UnclassifiableNode(String::from("FunctionNode")).to_string(),
      "Node type \"FunctionNode\" not captured",
    );
  }

  #[test]
  fn test_failure_names_expression() {
    let expr = Node::call("tan", vec![Node::symbol(Var::new("x").unwrap())]);
    let failure = DifferentiationFailure::new(expr, DifferentiationError::UnsupportedFunction(String::from("tan")));
    assert_eq!(failure.to_string(), "Derivative of tan not supported (while differentiating tan(x))");
  }

  #[test]
  fn test_too_deep_failure_omits_expression() {
    let failure = DifferentiationFailure::too_deep(600, 512);
    assert_eq!(failure.original_expr, None);
    assert_eq!(failure.to_string(), "Expression nesting depth 600 exceeds the limit of 512");
  }
}
