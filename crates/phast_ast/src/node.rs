//! Node and child value definitions.
//!
//! Nodes are plain owned data. The parser builds them, callers hand them out
//! by reference, and nothing downstream mutates them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AstError;
use crate::flags::{ArraySyntax, NameQualification, NodeFlags};
use crate::kind::Kind;

/// Named children of a node, in the order the parser produced them.
pub type Children = IndexMap<String, Value>;

// ============================================================================
// Node
// ============================================================================

/// One parsed syntax construct.
///
/// Which child names are present is decided by `kind`, but input from outside
/// is never trusted to follow that: consumers look children up with
/// [`Node::child`] and handle the `None` case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: Kind,
    #[serde(default)]
    pub flags: NodeFlags,
    /// Source line, carried through for callers. Not used for rendering.
    #[serde(default)]
    pub lineno: u32,
    #[serde(default)]
    pub children: Children,
}

impl Node {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            flags: NodeFlags::NONE,
            lineno: 0,
            children: Children::new(),
        }
    }

    pub fn with_flags(mut self, flags: impl Into<NodeFlags>) -> Self {
        self.flags = flags.into();
        self
    }

    pub fn with_lineno(mut self, lineno: u32) -> Self {
        self.lineno = lineno;
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.children.insert(name.into(), value.into());
        self
    }

    /// Decode a node from its JSON form.
    pub fn from_json(json: &str) -> Result<Node, AstError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a child by field name.
    #[inline]
    pub fn child(&self, name: &str) -> Option<&Value> {
        self.children.get(name)
    }

    /// Look up a child that is expected to be a node.
    pub fn child_node(&self, name: &str) -> Option<&Node> {
        self.child(name).and_then(Value::as_node)
    }

    /// Look up a child that is expected to be plain text.
    pub fn child_str(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Value::as_str)
    }

    // -- Builders for the kinds the reverter knows about --

    /// `AST_NAME`: an identifier with its qualification.
    pub fn name(text: impl Into<String>, qualification: NameQualification) -> Self {
        Node::new(Kind::Name)
            .with_flags(qualification.flags())
            .with_child("name", Value::String(text.into()))
    }

    /// `AST_CONST`: a bare constant reference.
    pub fn constant(name: Node) -> Self {
        Node::new(Kind::Const).with_child("name", name)
    }

    /// `AST_CLASS_CONST`: `class::CONST`.
    pub fn class_const(class: Node, constant: impl Into<String>) -> Self {
        Node::new(Kind::ClassConst)
            .with_child("class", class)
            .with_child("const", Value::String(constant.into()))
    }

    /// `AST_ARRAY`: slots are keyed by position. `None` is a skipped slot.
    pub fn array(syntax: ArraySyntax, slots: impl IntoIterator<Item = Option<Node>>) -> Self {
        let mut node = Node::new(Kind::Array).with_flags(syntax.flags());
        for (i, slot) in slots.into_iter().enumerate() {
            let value = match slot {
                Some(elem) => Value::Node(Box::new(elem)),
                None => Value::Null,
            };
            node.children.insert(i.to_string(), value);
        }
        node
    }

    /// `AST_ARRAY_ELEM`: `value` with an optional `key`.
    pub fn array_elem(key: Option<Value>, value: impl Into<Value>) -> Self {
        Node::new(Kind::ArrayElem)
            .with_child("value", value)
            .with_child("key", key.unwrap_or(Value::Null))
    }
}

// ============================================================================
// Value
// ============================================================================

/// Anything that can sit in a child slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Node(Box<Node>),
    /// A sequence of slots where a position may be empty.
    List(Vec<Option<Node>>),
}

impl Value {
    /// Decode a node or scalar from its JSON form.
    pub fn from_json(json: &str) -> Result<Value, AstError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(Box::new(node))
    }
}

impl From<Vec<Option<Node>>> for Value {
    fn from(slots: Vec<Option<Node>>) -> Self {
        Value::List(slots)
    }
}
