
use super::Node;
use super::var::Var;
use crate::util::prism::Prism;

/// Prism which downcasts a [`Node`] to the [`Var`] named by a bare
/// symbol. Any other shape of node, including a compound expression
/// that merely contains a symbol, is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeToVar;

impl Prism<Node, Var> for NodeToVar {
  fn narrow_type(&self, input: Node) -> Result<Var, Node> {
    if let Node::Symbol { name } = input {
      Ok(name)
    } else {
      Err(input)
    }
  }

  fn widen_type(&self, input: Var) -> Node {
    Node::symbol(input)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_narrow_symbol() {
    let x = Var::new("x").unwrap();
    assert_eq!(NodeToVar.narrow_type(Node::symbol(x.clone())), Ok(x));
  }

  #[test]
  fn test_narrow_rejects_compound() {
    let node = Node::negate(Node::symbol(Var::new("x").unwrap()));
    assert_eq!(NodeToVar.narrow_type(node.clone()), Err(node));
    assert_eq!(NodeToVar.narrow_type(Node::number(1)), Err(Node::number(1)));
  }

  #[test]
  fn test_widen() {
    let x = Var::new("x").unwrap();
    assert_eq!(NodeToVar.widen_type(x.clone()), Node::symbol(x));
  }
}
