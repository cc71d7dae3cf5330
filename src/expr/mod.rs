
pub mod calculus;
pub mod function;
pub mod literal;
pub mod operator;
pub mod prisms;
pub mod var;
pub mod walker;

use function::FunctionName;
use literal::{ConstantValue, ValueType};
use operator::Operator;
use var::Var;

use serde::{Serialize, Deserialize};

/// A node in an arithmetic expression tree.
///
/// The set of variants is closed. Function and operator nodes own
/// their arguments, so a tree never shares subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
  #[serde(rename = "ConstantNode")]
  Constant {
    value: ConstantValue,
    #[serde(rename = "valueType", default, skip_serializing_if = "Option::is_none")]
    value_type: Option<ValueType>,
  },
  #[serde(rename = "SymbolNode")]
  Symbol {
    name: Var,
  },
  #[serde(rename = "FunctionNode")]
  Call {
    name: FunctionName,
    args: Vec<Node>,
  },
  #[serde(rename = "OperatorNode")]
  Operator {
    op: Operator,
    #[serde(rename = "fn")]
    fn_name: String,
    args: Vec<Node>,
  },
}

impl Node {

  pub fn constant(value: impl Into<ConstantValue>, value_type: Option<ValueType>) -> Node {
    Node::Constant { value: value.into(), value_type }
  }

  /// An integer constant tagged with the `number` value type.
  pub fn number(n: i64) -> Node {
    Node::constant(n, Some(ValueType::number()))
  }

  /// The literal `0`, with the given value type tag.
  pub fn zero(value_type: Option<ValueType>) -> Node {
    Node::constant("0", value_type)
  }

  /// The literal `1`, with the given value type tag.
  pub fn one(value_type: Option<ValueType>) -> Node {
    Node::constant("1", value_type)
  }

  pub fn symbol(name: Var) -> Node {
    Node::Symbol { name }
  }

  /// Convenience constructor for [`Node::Call`]. A known name passed
  /// as [`FunctionName::Other`] is resolved to its own variant.
  pub fn call(name: impl Into<FunctionName>, args: Vec<Node>) -> Node {
    Node::Call { name: name.into().normalized(), args }
  }

  /// Convenience constructor for [`Node::Operator`]. A known symbol
  /// passed as [`Operator::Other`] is resolved to its own variant.
  pub fn operator(op: Operator, fn_name: impl Into<String>, args: Vec<Node>) -> Node {
    Node::Operator { op: op.normalized(), fn_name: fn_name.into(), args }
  }

  /// A binary application of `op`, using the operator's conventional
  /// semantic name.
  pub fn binary(op: Operator, left: Node, right: Node) -> Node {
    let fn_name = op.binary_name().to_owned();
    Node::operator(op, fn_name, vec![left, right])
  }

  /// A prefix application of `op`. Operators without a prefix form
  /// fall back to their symbol as the semantic name.
  pub fn unary(op: Operator, arg: Node) -> Node {
    let fn_name = op.unary_name().unwrap_or(op.symbol()).to_owned();
    Node::operator(op, fn_name, vec![arg])
  }

  pub fn add(left: Node, right: Node) -> Node {
    Node::binary(Operator::Add, left, right)
  }

  pub fn subtract(left: Node, right: Node) -> Node {
    Node::binary(Operator::Subtract, left, right)
  }

  pub fn multiply(left: Node, right: Node) -> Node {
    Node::binary(Operator::Multiply, left, right)
  }

  pub fn divide(left: Node, right: Node) -> Node {
    Node::binary(Operator::Divide, left, right)
  }

  pub fn power(base: Node, exponent: Node) -> Node {
    Node::binary(Operator::Power, base, exponent)
  }

  pub fn negate(arg: Node) -> Node {
    Node::unary(Operator::Subtract, arg)
  }

  /// The type name reported for this node in diagnostics.
  pub fn node_type(&self) -> &'static str {
    match self {
      Node::Constant { .. } => "ConstantNode",
      Node::Symbol { .. } => "SymbolNode",
      Node::Call { .. } => "FunctionNode",
      Node::Operator { .. } => "OperatorNode",
    }
  }

  /// The host value type tag. Only constants carry one.
  pub fn value_type(&self) -> Option<&ValueType> {
    match self {
      Node::Constant { value_type, .. } => value_type.as_ref(),
      _ => None,
    }
  }

  /// The argument list of a call or operator node. Leaves have none.
  pub fn args(&self) -> Option<&[Node]> {
    match self {
      Node::Constant { .. } | Node::Symbol { .. } => None,
      Node::Call { args, .. } | Node::Operator { args, .. } => Some(args.as_slice()),
    }
  }

  /// The literal value, if this node is a constant.
  pub fn as_constant(&self) -> Option<&ConstantValue> {
    match self {
      Node::Constant { value, .. } => Some(value),
      _ => None,
    }
  }
}
