
//! The derivative rewriter, the second pass of differentiation.

use super::constancy::Annotated;
use super::error::{DifferentiationError, RuleKind};
use crate::expr::Node;
use crate::expr::function::FunctionName;
use crate::expr::operator::Operator;
use crate::mode::derivative::DerivativeMode;

use log::trace;

/// Rewrites an annotated tree into its derivative. The variable is
/// implicit: it is whatever the tree was annotated against.
#[derive(Debug, Clone, Copy)]
struct Rewriter<'m> {
  mode: &'m DerivativeMode,
}

/// Differentiates an annotated tree, with the default
/// [`DerivativeMode`].
///
/// The result is a freshly allocated tree. It may contain copies of
/// subtrees of the input, but the input is never modified.
pub fn differentiate(node: &Annotated) -> Result<Node, DifferentiationError> {
  differentiate_with_mode(node, &DerivativeMode::default())
}

/// Differentiates an annotated tree under the given mode.
pub fn differentiate_with_mode(node: &Annotated, mode: &DerivativeMode) -> Result<Node, DifferentiationError> {
  Rewriter { mode }.rewrite(node)
}

impl<'m> Rewriter<'m> {
  fn rewrite(&self, node: &Annotated) -> Result<Node, DifferentiationError> {
    if node.is_constant() {
      return Ok(Node::zero(node.node().value_type().cloned()));
    }
    match node.node() {
      Node::Constant { value_type, .. } => {
        Ok(Node::zero(value_type.clone()))
      }
      Node::Symbol { .. } => {
        // A non-constant symbol is the variable itself.
        Ok(Node::one(None))
      }
      Node::Call { name, .. } => {
        trace!("differentiating call to {name}");
        self.rewrite_call(node, name)
      }
      Node::Operator { op, fn_name, .. } => {
        trace!("differentiating operator {op}");
        self.rewrite_operator(node, op, fn_name)
      }
    }
  }

  fn rewrite_call(&self, node: &Annotated, name: &FunctionName) -> Result<Node, DifferentiationError> {
    match (name, node.args()) {
      (_, []) => {
        self.malformed(node, DifferentiationError::UnclassifiableNode(node.node().node_type().to_owned()))
      }
      (FunctionName::Log, [x]) => {
        // d/dx(log(x)) = 1 / x
        Ok(Node::divide(self.rewrite(x)?, x.node().clone()))
      }
      (FunctionName::Log, [x, base]) => {
        // d/dx(log(x, c)) = 1 / (x * log(c))
        let denominator = Node::multiply(
          x.node().clone(),
          Node::call(FunctionName::Log, vec![base.node().clone()]),
        );
        Ok(Node::divide(self.rewrite(x)?, denominator))
      }
      (FunctionName::Exp, [x]) => {
        // d/dx(e^x) = e^x
        Ok(Node::multiply(self.rewrite(x)?, x.node().clone()))
      }
      (FunctionName::Sin, [x]) => {
        // d/dx(sin(x)) = cos(x)
        Ok(Node::multiply(
          self.rewrite(x)?,
          Node::call(FunctionName::Cos, vec![x.node().clone()]),
        ))
      }
      (FunctionName::Log | FunctionName::Exp | FunctionName::Sin, args) => {
        self.malformed(node, DifferentiationError::UnsupportedArity {
          name: name.to_string(),
          arity: args.len(),
        })
      }
      (FunctionName::Cos | FunctionName::Tan | FunctionName::Sec | FunctionName::Csc | FunctionName::Cot |
       FunctionName::Asin | FunctionName::Acos | FunctionName::Atan |
       FunctionName::Asec | FunctionName::Acsc | FunctionName::Acot |
       FunctionName::Sinh | FunctionName::Cosh | FunctionName::Tanh |
       FunctionName::Sech | FunctionName::Csch | FunctionName::Coth |
       FunctionName::Asinh | FunctionName::Acosh | FunctionName::Atanh |
       FunctionName::Asech | FunctionName::Acsch | FunctionName::Acoth |
       FunctionName::Other(_), _) => {
        Err(DifferentiationError::UnsupportedFunction(name.to_string()))
      }
    }
  }

  fn rewrite_operator(&self, node: &Annotated, op: &Operator, fn_name: &str) -> Result<Node, DifferentiationError> {
    match (op, node.args()) {
      (Operator::Power, [base, exponent]) => {
        self.power_rule(base, exponent)
      }
      (Operator::Multiply, [left, right]) => {
        // d/dx(c * f(x)) = c * f'(x)
        if left.is_constant() {
          Ok(Node::multiply(left.node().clone(), self.rewrite(right)?))
        } else if right.is_constant() {
          Ok(Node::multiply(right.node().clone(), self.rewrite(left)?))
        } else {
          Err(DifferentiationError::UnsupportedRule(RuleKind::Product))
        }
      }
      (Operator::Divide, [numerator, denominator]) => {
        if numerator.is_constant() {
          // d/dx(c / f(x)) = -c * (f'(x) / f(x)^2)
          Ok(Node::multiply(
            Node::negate(numerator.node().clone()),
            Node::divide(
              self.rewrite(denominator)?,
              Node::power(denominator.node().clone(), Node::number(2)),
            ),
          ))
        } else if denominator.is_constant() {
          // d/dx(f(x) / c) = f'(x) / c
          Ok(Node::divide(self.rewrite(numerator)?, denominator.node().clone()))
        } else {
          Err(DifferentiationError::UnsupportedRule(RuleKind::Quotient))
        }
      }
      (Operator::Add | Operator::Subtract, [arg]) => {
        Ok(Node::operator(op.clone(), fn_name, vec![self.rewrite(arg)?]))
      }
      (Operator::Add | Operator::Subtract, [left, right]) => {
        // Linearity
        Ok(Node::operator(op.clone(), fn_name, vec![self.rewrite(left)?, self.rewrite(right)?]))
      }
      (Operator::Power | Operator::Multiply | Operator::Divide | Operator::Add | Operator::Subtract, args) => {
        Err(DifferentiationError::UnsupportedArity {
          name: op.to_string(),
          arity: args.len(),
        })
      }
      (Operator::Other(symbol), _) => {
        Err(DifferentiationError::UnsupportedOperator(symbol.clone()))
      }
    }
  }

  /// d/dx(f(x)^c) = c * f(x)^(c - 1) * f'(x), for constant `c`.
  ///
  /// When the base is the variable itself, the trailing `f'(x)` is the
  /// literal one and is left out.
  fn power_rule(&self, base: &Annotated, exponent: &Annotated) -> Result<Node, DifferentiationError> {
    if !exponent.is_constant() {
      return Err(DifferentiationError::UnsupportedRule(RuleKind::FunctionalPower));
    }
    let exponent_node = exponent.node();
    let value_type = exponent_node.value_type();
    if let Some(value) = exponent_node.as_constant() {
      if value.is_integer(0) {
        return Ok(Node::zero(value_type.cloned()));
      }
      if value.is_integer(1) {
        return self.rewrite(base);
      }
    }
    let decremented = Node::subtract(exponent_node.clone(), Node::one(value_type.cloned()));
    let result = Node::multiply(
      exponent_node.clone(),
      Node::power(base.node().clone(), decremented),
    );
    if let Node::Symbol { .. } = base.node() {
      Ok(result)
    } else {
      Ok(Node::multiply(result, self.rewrite(base)?))
    }
  }

  /// A recognized but malformed call. Lenient mode leaves it in the
  /// result unchanged; strict mode reports `err`.
  fn malformed(&self, node: &Annotated, err: DifferentiationError) -> Result<Node, DifferentiationError> {
    if self.mode.has_strict_flag() {
      Err(err)
    } else {
      trace!("leaving malformed {} unchanged", node.node());
      Ok(node.node().clone())
    }
  }
}
