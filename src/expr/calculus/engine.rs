
//! The composed differentiation entry points: annotate, then rewrite.

use super::constancy::annotate;
use super::derivative::differentiate_with_mode;
use super::error::{DifferentiationError, DifferentiationFailure};
use crate::expr::Node;
use crate::expr::prisms::NodeToVar;
use crate::expr::var::Var;
use crate::expr::walker;
use crate::mode::derivative::DerivativeMode;
use crate::util::prism::{Prism, VecToArray};

use log::debug;

/// The name under which a host exposes differentiation as a function
/// of its expression language.
pub const DERIVATIVE_FUNCTION_NAME: &str = "derivative";

#[derive(Debug)]
pub struct DerivativeEngine<'a> {
  target_variable: Var,
  original_expr: &'a Node,
  mode: DerivativeMode,
}

impl<'a> DerivativeEngine<'a> {
  pub fn new(original_expr: &'a Node, target_variable: Var) -> Self {
    Self {
      target_variable,
      original_expr,
      mode: DerivativeMode::default(),
    }
  }

  pub fn with_mode(mut self, mode: DerivativeMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn target_variable(&self) -> &Var {
    &self.target_variable
  }

  pub fn mode(&self) -> &DerivativeMode {
    &self.mode
  }

  /// Differentiates the expression with respect to the target
  /// variable.
  ///
  /// Expressions nested more deeply than the mode's depth limit are
  /// rejected before either pass runs.
  pub fn run(&self) -> Result<Node, DifferentiationFailure> {
    let depth = walker::depth(self.original_expr);
    if depth > self.mode.max_depth() {
      debug!("derivative with respect to {} rejected: nesting depth {} exceeds {}", self.target_variable, depth, self.mode.max_depth());
      return Err(DifferentiationFailure::too_deep(depth, self.mode.max_depth()));
    }
    let annotated = annotate(self.original_expr, &self.target_variable).map_err(|err| self.error(err))?;
    differentiate_with_mode(&annotated, &self.mode).map_err(|err| self.error(err))
  }

  pub fn error(&self, reason: DifferentiationError) -> DifferentiationFailure {
    debug!("derivative of {} with respect to {} failed: {}", self.original_expr, self.target_variable, reason);
    DifferentiationFailure::new(self.original_expr.clone(), reason)
  }
}

/// Differentiates `expression` with respect to `variable`, which must
/// be a bare symbol.
pub fn derivative_of(expression: &Node, variable: &Node) -> Result<Node, DifferentiationFailure> {
  derivative_of_with_mode(expression, variable, &DerivativeMode::default())
}

pub fn derivative_of_with_mode(
  expression: &Node,
  variable: &Node,
  mode: &DerivativeMode,
) -> Result<Node, DifferentiationFailure> {
  let variable = NodeToVar.narrow_type(variable.clone()).map_err(|_| {
    DifferentiationFailure::new(
      expression.clone(),
      DifferentiationError::InvalidArgument(String::from("second argument must be a symbol")),
    )
  })?;
  DerivativeEngine::new(expression, variable)
    .with_mode(mode.clone())
    .run()
}

/// Differentiates from the raw, unevaluated argument list of a
/// `derivative(expr, variable)` call in a host expression language.
///
/// The arguments are taken by value, as a host hands them over; on an
/// arity mismatch they become the arguments of the reported
/// `derivative(...)` expression.
pub fn derivative_transform(args: Vec<Node>) -> Result<Node, DifferentiationFailure> {
  let [expression, variable] = VecToArray::<2>.narrow_type(args).map_err(|args| {
    let arity = args.len();
    DifferentiationFailure::new(
      Node::call(DERIVATIVE_FUNCTION_NAME, args),
      DifferentiationError::InvalidArgument(format!("expects 2 arguments, got {arity}")),
    )
  })?;
  derivative_of(&expression, &variable)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::calculus::error::RuleKind;
  use crate::expr::function::FunctionName;

  fn var(name: &str) -> Node {
    Node::symbol(Var::new(name).unwrap())
  }

  fn x() -> Node {
    var("x")
  }

  #[test]
  fn test_negation() {
    let result = derivative_of(&Node::negate(x()), &x()).unwrap();
    assert_eq!(result, Node::negate(Node::one(None)));
    assert_eq!(result.to_string(), "-1");
  }

  #[test]
  fn test_polynomial() {
    let expr = Node::add(Node::power(x(), Node::number(2)), Node::number(2));
    let result = derivative_of(&expr, &x()).unwrap();
    let expected = Node::add(
      Node::multiply(Node::number(2), Node::power(x(), Node::subtract(Node::number(2), Node::number(1)))),
      Node::number(0),
    );
    assert_eq!(result, expected);
    assert_eq!(result.to_string(), "2 * x ^ (2 - 1) + 0");
  }

  #[test]
  fn test_log() {
    let result = derivative_of(&Node::call("log", vec![x()]), &x()).unwrap();
    assert_eq!(result.to_string(), "1 / x");
  }

  #[test]
  fn test_known_function_given_as_other_name() {
    let expr = Node::call(FunctionName::Other(String::from("log")), vec![x()]);
    assert_eq!(derivative_of(&expr, &x()).unwrap().to_string(), "1 / x");
  }

  #[test]
  fn test_log_with_base() {
    let result = derivative_of(&Node::call("log", vec![x(), Node::number(2)]), &x()).unwrap();
    assert_eq!(result.to_string(), "1 / (x * log(2))");
  }

  #[test]
  fn test_log_of_polynomial_with_base() {
    // derivative(log(3x^2 + 2, 2), x)
    let inner = Node::add(
      Node::multiply(Node::number(3), Node::power(x(), Node::number(2))),
      Node::number(2),
    );
    let result = derivative_of(&Node::call("log", vec![inner, Node::number(2)]), &x()).unwrap();
    assert_eq!(result.to_string(), "(3 * (2 * x ^ (2 - 1)) + 0) / ((3 * x ^ 2 + 2) * log(2))");
  }

  #[test]
  fn test_chain_factor_for_compound_base() {
    let expr = Node::power(Node::multiply(Node::number(2), x()), Node::number(3));
    let result = derivative_of(&expr, &x()).unwrap();
    assert_eq!(result.to_string(), "3 * (2 * x) ^ (3 - 1) * (2 * 1)");
  }

  #[test]
  fn test_with_respect_to_other_variable() {
    let expr = Node::multiply(x(), var("y"));
    let result = derivative_of(&expr, &var("y")).unwrap();
    assert_eq!(result, Node::multiply(x(), Node::one(None)));
  }

  #[test]
  fn test_non_symbol_variable() {
    let expr = Node::power(x(), Node::number(2));
    let failure = derivative_of(&expr, &Node::multiply(Node::number(2), x())).unwrap_err();
    assert_eq!(failure.error, DifferentiationError::InvalidArgument(String::from("second argument must be a symbol")));
    assert_eq!(failure.original_expr, Some(expr.clone()));
    assert!(derivative_of(&expr, &Node::number(1)).is_err());
  }

  #[test]
  fn test_failure_carries_original_expression() {
    let expr = Node::add(x(), Node::call("tan", vec![x()]));
    let failure = derivative_of(&expr, &x()).unwrap_err();
    assert_eq!(failure.error, DifferentiationError::UnsupportedFunction(String::from("tan")));
    assert_eq!(failure.original_expr, Some(expr));
  }

  #[test]
  fn test_error_scenarios() {
    let failure = derivative_of(&Node::power(x(), Node::add(x(), Node::number(1))), &x()).unwrap_err();
    assert_eq!(failure.error, DifferentiationError::UnsupportedRule(RuleKind::FunctionalPower));
    let failure = derivative_of(&Node::multiply(x(), x()), &x()).unwrap_err();
    assert_eq!(failure.error, DifferentiationError::UnsupportedRule(RuleKind::Product));
  }

  #[test]
  fn test_transform() {
    let result = derivative_transform(vec![Node::call("sin", vec![x()]), x()]).unwrap();
    assert_eq!(result.to_string(), "1 * cos(x)");
  }

  #[test]
  fn test_transform_arity() {
    let failure = derivative_transform(vec![x()]).unwrap_err();
    assert_eq!(failure.error, DifferentiationError::InvalidArgument(String::from("expects 2 arguments, got 1")));
    assert_eq!(failure.original_expr, Some(Node::call("derivative", vec![x()])));
    let failure = derivative_transform(vec![x(), x(), x()]).unwrap_err();
    assert!(matches!(failure.error, DifferentiationError::InvalidArgument(_)));
  }

  #[test]
  fn test_strict_mode() {
    let expr = Node::call("log", vec![x(), Node::number(2), Node::number(3)]);
    assert_eq!(derivative_of(&expr, &x()).unwrap(), expr);
    let mut mode = DerivativeMode::new();
    mode.set_strict_flag(true);
    let failure = derivative_of_with_mode(&expr, &x(), &mode).unwrap_err();
    assert_eq!(failure.error, DifferentiationError::UnsupportedArity { name: String::from("log"), arity: 3 });
  }

  #[test]
  fn test_depth_limit() {
    let mut expr = x();
    for _ in 0..10 {
      expr = Node::negate(expr);
    }
    let mut mode = DerivativeMode::new();
    mode.set_max_depth(5);
    let failure = DerivativeEngine::new(&expr, Var::new("x").unwrap()).with_mode(mode).run().unwrap_err();
    assert_eq!(failure.error, DifferentiationError::ExpressionTooDeep { depth: 11, limit: 5 });
    assert_eq!(failure.original_expr, None);
    assert!(DerivativeEngine::new(&expr, Var::new("x").unwrap()).run().is_ok());
  }

  #[test]
  fn test_very_deep_expression_is_rejected() {
    let mut expr = x();
    for _ in 0..300_000 {
      expr = Node::negate(expr);
    }
    let result = DerivativeEngine::new(&expr, Var::new("x").unwrap()).run();
    match &result {
      Err(failure) => {
        assert_eq!(failure.error, DifferentiationError::ExpressionTooDeep { depth: 300_001, limit: 512 });
        assert_eq!(failure.original_expr, None);
      }
      Ok(_) => panic!("expected the depth guard to reject the expression"),
    }
    // Dropping a tree this deep recursively would overflow the stack.
    std::mem::forget(result);
    std::mem::forget(expr);
  }

  #[test]
  fn test_engine_accessors() {
    let expr = x();
    let engine = DerivativeEngine::new(&expr, Var::new("x").unwrap());
    assert_eq!(engine.target_variable().as_str(), "x");
    assert!(!engine.mode().has_strict_flag());
  }
}
