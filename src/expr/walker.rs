
//! Utility functions for walking an expression tree.

use super::Node;

pub fn postorder_walk_borrowed<F>(node: &Node, mut f: F)
where F: FnMut(&Node) {
  postorder_walk_borrowed_impl(node, &mut f);
}

fn postorder_walk_borrowed_impl<F>(node: &Node, f: &mut F)
where F: FnMut(&Node) {
  if let Some(args) = node.args() {
    for arg in args {
      postorder_walk_borrowed_impl(arg, f);
    }
  }
  f(node);
}

/// Returns true if any of the sub-expressions of `node` (including
/// `node` itself) satisfies the predicate.
pub fn any<F>(node: &Node, f: F) -> bool
where F: Fn(&Node) -> bool {
  let mut result = false;
  postorder_walk_borrowed(node, |e| {
    if f(e) {
      result = true;
    }
  });
  result
}

/// The nesting depth of the tree, where a leaf has depth 1.
///
/// Uses an explicit stack, so it is safe to call on trees too deep
/// to be walked recursively.
pub fn depth(node: &Node) -> usize {
  let mut max_depth = 0;
  let mut stack = vec![(node, 1)];
  while let Some((node, d)) = stack.pop() {
    max_depth = max_depth.max(d);
    if let Some(args) = node.args() {
      stack.extend(args.iter().map(|arg| (arg, d + 1)));
    }
  }
  max_depth
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::var::Var;

  fn var(name: &str) -> Node {
    Node::symbol(Var::new(name).unwrap())
  }

  #[test]
  fn test_postorder_visits_children_first() {
    let node = Node::add(var("a"), Node::negate(var("b")));
    let mut visited = Vec::new();
    postorder_walk_borrowed(&node, |n| visited.push(n.node_type()));
    assert_eq!(visited, vec!["SymbolNode", "SymbolNode", "OperatorNode", "OperatorNode"]);
  }

  #[test]
  fn test_any() {
    let node = Node::call("sin", vec![Node::multiply(Node::number(2), var("x"))]);
    assert!(any(&node, |n| n == &var("x")));
    assert!(!any(&node, |n| n == &var("y")));
  }

  #[test]
  fn test_depth() {
    assert_eq!(depth(&var("x")), 1);
    assert_eq!(depth(&Node::add(var("x"), Node::negate(var("y")))), 3);
    assert_eq!(depth(&Node::call("log", vec![])), 1);
  }

  #[test]
  fn test_depth_of_very_deep_tree() {
    let mut node = var("x");
    for _ in 0..100_000 {
      node = Node::negate(node);
    }
    assert_eq!(depth(&node), 100_001);
    // Dropping a tree this deep recursively would overflow the stack.
    std::mem::forget(node);
  }
}
