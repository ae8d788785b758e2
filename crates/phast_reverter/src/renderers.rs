//! Renderers for the node kinds the reverter understands.
//!
//! Each renderer formats its own syntax and hands every sub-value back to the
//! [`Reverter`]. Missing or oddly shaped children turn into the placeholder
//! for that position only.

use phast_ast::{ArraySyntax, Kind, NameQualification, Node, Value};
use tracing::debug;

use crate::Reverter;

/// `AST_NAME`: `Foo`, `\Foo` or `namespace\Foo`.
pub(crate) fn render_name(reverter: &Reverter<'_>, node: &Node) -> String {
    let name = match node.child_str("name") {
        Some(name) => name,
        None => {
            debug!(kind = %node.kind, "name is not plain text, using placeholder");
            reverter.placeholder()
        }
    };
    match NameQualification::from_flags(node.flags) {
        NameQualification::FullyQualified => format!("\\{name}"),
        NameQualification::Relative => format!("namespace\\{name}"),
        NameQualification::Unqualified => name.to_string(),
    }
}

/// `AST_CONST`: just the name.
pub(crate) fn render_const(reverter: &Reverter<'_>, node: &Node) -> String {
    reverter.render_child_node(node, "name")
}

/// `AST_CLASS_CONST`: `Class::CONST`.
pub(crate) fn render_class_const(reverter: &Reverter<'_>, node: &Node) -> String {
    let class = reverter.render_child_node(node, "class");
    match node.child_str("const") {
        Some(constant) => format!("{class}::{constant}"),
        None => {
            debug!(kind = %node.kind, "const is not plain text, using placeholder");
            format!("{class}::{}", reverter.placeholder())
        }
    }
}

/// One position in an array literal or destructuring list.
enum Slot<'a> {
    /// Skipped position, as in `list(, $x)`.
    Empty,
    Node(&'a Node),
    Scalar(&'a Value),
}

impl<'a> Slot<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Slot::Empty,
            Value::Node(node) => Slot::Node(node),
            other => Slot::Scalar(other),
        }
    }

    fn of_optional(slot: &'a Option<Node>) -> Self {
        match slot {
            Some(node) => Slot::Node(node),
            None => Slot::Empty,
        }
    }
}

/// Flatten an array node's children into slots. A nested slot list
/// contributes each of its positions in order.
fn array_slots(node: &Node) -> Vec<Slot<'_>> {
    let mut slots = Vec::with_capacity(node.children.len());
    for value in node.children.values() {
        match value {
            Value::List(list) => slots.extend(list.iter().map(Slot::of_optional)),
            other => slots.push(Slot::of(other)),
        }
    }
    slots
}

fn render_slot(reverter: &Reverter<'_>, slot: &Slot<'_>) -> String {
    match slot {
        Slot::Empty => String::new(),
        Slot::Node(elem) if elem.kind == Kind::ArrayElem => render_array_elem(reverter, elem),
        Slot::Node(other) => reverter.render_node(other),
        Slot::Scalar(value) => reverter.render(value),
    }
}

/// `value` or `key=>value`. A null key means there is no key.
fn render_array_elem(reverter: &Reverter<'_>, elem: &Node) -> String {
    let value = reverter.render_child(elem, "value");
    match elem.child("key") {
        None | Some(Value::Null) => value,
        Some(key) => format!("{}=>{value}", reverter.render(key)),
    }
}

/// `AST_ARRAY`: `[a,b]` for short and long syntax, `list(a,b)` for destructuring.
pub(crate) fn render_array(reverter: &Reverter<'_>, node: &Node) -> String {
    let parts: Vec<String> = array_slots(node)
        .iter()
        .map(|slot| render_slot(reverter, slot))
        .collect();
    let joined = parts.join(",");
    // Long syntax is shown bracketed too; `array(...)` is never produced.
    match ArraySyntax::from_flags(node.flags) {
        ArraySyntax::Short | ArraySyntax::Long => format!("[{joined}]"),
        ArraySyntax::List => format!("list({joined})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phast_ast::NodeFlags;

    fn reverter() -> Reverter<'static> {
        Reverter::global()
    }

    fn name(text: &str) -> Node {
        Node::name(text, NameQualification::Unqualified)
    }

    #[test]
    fn test_name_qualifiers() {
        let r = reverter();
        assert_eq!(render_name(&r, &Node::name("Foo", NameQualification::FullyQualified)), "\\Foo");
        assert_eq!(render_name(&r, &Node::name("Foo", NameQualification::Relative)), "namespace\\Foo");
        assert_eq!(render_name(&r, &name("Foo")), "Foo");
    }

    #[test]
    fn test_name_with_unknown_flags_is_unqualified() {
        let node = name("Foo").with_flags(NodeFlags::from_raw(0x40));
        assert_eq!(render_name(&reverter(), &node), "Foo");
    }

    #[test]
    fn test_name_without_text_keeps_qualifier() {
        let node = Node::new(Kind::Name).with_flags(NodeFlags::NAME_FQ);
        assert_eq!(render_name(&reverter(), &node), "\\(unknown)");
        let node = Node::new(Kind::Name).with_child("name", 5);
        assert_eq!(render_name(&reverter(), &node), "(unknown)");
    }

    #[test]
    fn test_const_delegates_to_name() {
        let node = Node::constant(Node::name("PHP_EOL", NameQualification::FullyQualified));
        assert_eq!(render_const(&reverter(), &node), "\\PHP_EOL");
        assert_eq!(render_const(&reverter(), &Node::new(Kind::Const)), "(unknown)");
    }

    #[test]
    fn test_const_with_scalar_name() {
        let node = Node::new(Kind::Const).with_child("name", Value::Null);
        assert_eq!(render_const(&reverter(), &node), "(unknown)");
        let node = Node::new(Kind::Const).with_child("name", 5);
        assert_eq!(render_const(&reverter(), &node), "(unknown)");
        let node = Node::new(Kind::Const).with_child("name", "PHP_EOL");
        assert_eq!(render_const(&reverter(), &node), "(unknown)");
    }

    #[test]
    fn test_class_const() {
        let node = Node::class_const(name("Foo"), "BAR");
        assert_eq!(render_class_const(&reverter(), &node), "Foo::BAR");
    }

    #[test]
    fn test_class_const_missing_parts() {
        let node = Node::new(Kind::ClassConst).with_child("const", "BAR");
        assert_eq!(render_class_const(&reverter(), &node), "(unknown)::BAR");
        let node = Node::new(Kind::ClassConst).with_child("class", name("Foo"));
        assert_eq!(render_class_const(&reverter(), &node), "Foo::(unknown)");
    }

    #[test]
    fn test_class_const_with_scalar_class() {
        let node = Node::new(Kind::ClassConst).with_child("class", Value::Null).with_child("const", "X");
        assert_eq!(render_class_const(&reverter(), &node), "(unknown)::X");
        let node = Node::new(Kind::ClassConst).with_child("class", "Foo").with_child("const", "X");
        assert_eq!(render_class_const(&reverter(), &node), "(unknown)::X");
        let node = Node::new(Kind::ClassConst).with_child("class", 5).with_child("const", "X");
        assert_eq!(render_class_const(&reverter(), &node), "(unknown)::X");
    }

    #[test]
    fn test_array_slots_flatten_lists() {
        let node = Node::new(Kind::Array)
            .with_child("0", Value::Null)
            .with_child("1", vec![Some(name("a")), None])
            .with_child("2", 3);
        let slots = array_slots(&node);
        assert_eq!(slots.len(), 4);
        assert!(matches!(slots[0], Slot::Empty));
        assert!(matches!(slots[1], Slot::Node(_)));
        assert!(matches!(slots[2], Slot::Empty));
        assert!(matches!(slots[3], Slot::Scalar(Value::Int(3))));
    }

    #[test]
    fn test_array_elem_key() {
        let elem = Node::array_elem(Some(Value::from("k")), 1);
        assert_eq!(render_array_elem(&reverter(), &elem), "'k'=>1");
        let elem = Node::array_elem(None, 1);
        assert_eq!(render_array_elem(&reverter(), &elem), "1");
        let elem = Node::new(Kind::ArrayElem);
        assert_eq!(render_array_elem(&reverter(), &elem), "(unknown)");
    }

    #[test]
    fn test_array_long_syntax_is_bracketed() {
        let node = Node::array(ArraySyntax::Long, vec![Some(Node::array_elem(None, 1))]);
        assert_eq!(render_array(&reverter(), &node), "[1]");
    }

    #[test]
    fn test_empty_arrays() {
        assert_eq!(render_array(&reverter(), &Node::array(ArraySyntax::Short, vec![])), "[]");
        assert_eq!(render_array(&reverter(), &Node::array(ArraySyntax::List, vec![])), "list()");
        assert_eq!(render_array(&reverter(), &Node::array(ArraySyntax::List, vec![None, None])), "list(,)");
    }
}
