
//! Constancy annotation, the first pass of differentiation.
//!
//! A subtree is *constant* with respect to a variable if its value
//! does not depend on that variable. The annotator records this for
//! every node of a tree in an [`Annotated`] tree that mirrors the
//! input, leaving the input itself untouched.

use super::error::DifferentiationError;
use crate::expr::Node;
use crate::expr::var::Var;

use log::trace;

/// An expression tree, paired node-for-node with constancy flags.
///
/// Values of this type can only be produced by [`annotate`], so every
/// flag in the tree has been computed before anyone can read it.
#[derive(Debug, Clone)]
pub struct Annotated<'a> {
  node: &'a Node,
  constant: bool,
  args: Vec<Annotated<'a>>,
}

impl<'a> Annotated<'a> {
  fn leaf(node: &'a Node, constant: bool) -> Self {
    Annotated { node, constant, args: Vec::new() }
  }

  /// The original node.
  pub fn node(&self) -> &'a Node {
    self.node
  }

  /// Whether this subtree is independent of the variable.
  pub fn is_constant(&self) -> bool {
    self.constant
  }

  /// The annotated arguments of the node, in order. Empty for leaves.
  pub fn args(&self) -> &[Annotated<'a>] {
    &self.args
  }
}

/// Computes constancy flags for `node` and all of its descendants,
/// with respect to the variable `var`.
///
/// Constants are always constant, and a symbol is constant unless it
/// names `var`. Any other node is constant exactly when all of its
/// arguments are; every argument is annotated, even after one of them
/// has been found to depend on `var`. A call or operator node with no
/// arguments cannot be classified and is rejected.
pub fn annotate<'a>(node: &'a Node, var: &Var) -> Result<Annotated<'a>, DifferentiationError> {
  match node {
    Node::Constant { .. } => {
      Ok(Annotated::leaf(node, true))
    }
    Node::Symbol { name } => {
      Ok(Annotated::leaf(node, name != var))
    }
    Node::Call { args, .. } | Node::Operator { args, .. } => {
      if args.is_empty() {
        return Err(DifferentiationError::UnclassifiableNode(node.node_type().to_owned()));
      }
      let args = args.iter()
        .map(|arg| annotate(arg, var))
        .collect::<Result<Vec<_>, _>>()?;
      let constant = args.iter().all(Annotated::is_constant);
      trace!("{} node is {}", node.node_type(), if constant { "constant" } else { "non-constant" });
      Ok(Annotated { node, constant, args })
    }
  }
}

/// Whether `node` as a whole is constant with respect to `var`.
pub fn annotate_constancy(node: &Node, var: &Var) -> Result<bool, DifferentiationError> {
  annotate(node, var).map(|annotated| annotated.is_constant())
}
