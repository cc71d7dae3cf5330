
//! Infix rendering of expression trees.
//!
//! Operators are printed with the usual arithmetic precedence, and
//! parentheses are inserted only where the tree shape requires them,
//! so `Node::multiply(x, Node::add(y, z))` renders as `x * (y + z)`.

pub mod operator;

use operator::{OperatorSpec, Precedence};
use crate::expr::Node;
use crate::expr::operator::Operator;

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// A node, rendered in a context which binds with the given
/// precedence. The node is parenthesized if it binds more loosely
/// than its context.
#[derive(Debug, Clone, Copy)]
struct InContext<'a> {
  node: &'a Node,
  prec: Precedence,
}

/// Precedence of a negative literal, which renders like a prefix
/// minus.
fn negative_literal_precedence() -> Precedence {
  Precedence::new(3)
}

impl<'a> InContext<'a> {
  fn new(node: &'a Node, prec: Precedence) -> Self {
    Self { node, prec }
  }

  fn fmt_with_parens(&self, f: &mut Formatter<'_>, own_prec: Precedence, body: impl Display) -> fmt::Result {
    if own_prec < self.prec {
      write!(f, "({body})")
    } else {
      write!(f, "{body}")
    }
  }

  fn fmt_operator(&self, f: &mut Formatter<'_>, op: &Operator, fn_name: &str, args: &[Node]) -> fmt::Result {
    match args {
      [arg] => {
        if let Some(spec) = OperatorSpec::prefix(op) {
          let arg = InContext::new(arg, spec.precedence().incremented());
          return self.fmt_with_parens(f, spec.precedence(), format_args!("{op}{arg}"));
        }
      }
      [left, right] => {
        if let Some(spec) = OperatorSpec::binary(op) {
          let left = InContext::new(left, spec.left_precedence());
          let right = InContext::new(right, spec.right_precedence());
          return self.fmt_with_parens(f, spec.precedence(), format_args!("{left} {op} {right}"));
        }
        // Unknown infix operators bind loosest and parenthesize
        // everything compound around them.
        let left = InContext::new(left, Precedence::MAX);
        let right = InContext::new(right, Precedence::MAX);
        return self.fmt_with_parens(f, Precedence::MIN, format_args!("{left} {op} {right}"));
      }
      _ => {}
    }
    write!(f, "{}({})", fn_name, args.iter().map(|a| InContext::new(a, Precedence::MIN)).join(", "))
  }
}

impl Display for InContext<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.node {
      Node::Constant { value, .. } => {
        if value.as_str().starts_with('-') {
          self.fmt_with_parens(f, negative_literal_precedence(), value)
        } else {
          write!(f, "{value}")
        }
      }
      Node::Symbol { name } => {
        write!(f, "{name}")
      }
      Node::Call { name, args } => {
        write!(f, "{}({})", name, args.iter().map(|a| InContext::new(a, Precedence::MIN)).join(", "))
      }
      Node::Operator { op, fn_name, args } => {
        self.fmt_operator(f, op, fn_name, args)
      }
    }
  }
}

impl Display for Node {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(&InContext::new(self, Precedence::MIN), f)
  }
}
