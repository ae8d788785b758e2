//! Node model integration tests.
//!
//! Verifies that parser output in JSON form decodes into the expected nodes.

use phast_ast::{ArraySyntax, Kind, NameQualification, Node, NodeFlags, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_decode_nested_tree() {
    let json = r#"{
        "kind": "AST_ARRAY",
        "flags": 3,
        "lineno": 4,
        "children": {
            "0": {
                "kind": "AST_ARRAY_ELEM",
                "flags": 0,
                "lineno": 4,
                "children": {
                    "value": {"kind": "AST_CLASS_CONST", "lineno": 4, "children": {
                        "class": {"kind": "AST_NAME", "flags": 1, "lineno": 4, "children": {"name": "Foo"}},
                        "const": "BAR"
                    }},
                    "key": null
                }
            },
            "1": null
        }
    }"#;
    let node = Node::from_json(json).unwrap();
    assert_eq!(node.kind, Kind::Array);
    assert_eq!(ArraySyntax::from_flags(node.flags), ArraySyntax::Short);
    assert_eq!(node.lineno, 4);
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.child("1"), Some(&Value::Null));

    let elem = node.child_node("0").unwrap();
    assert_eq!(elem.kind, Kind::ArrayElem);
    let class_const = elem.child_node("value").unwrap();
    assert_eq!(class_const.child_str("const"), Some("BAR"));
    let class = class_const.child_node("class").unwrap();
    assert_eq!(NameQualification::from_flags(class.flags), NameQualification::FullyQualified);
    assert_eq!(class.child_str("name"), Some("Foo"));
}

#[test]
fn test_builders_match_decoded_form() {
    let built = Node::class_const(Node::name("Foo", NameQualification::Relative), "BAR");
    let decoded = Node::from_json(
        r#"{"kind": "AST_CLASS_CONST", "children": {
            "class": {"kind": "AST_NAME", "flags": 2, "children": {"name": "Foo"}},
            "const": "BAR"
        }}"#,
    )
    .unwrap();
    assert_eq!(built, decoded);
}

#[test]
fn test_encode_uses_kind_names_and_raw_flags() {
    let node = Node::name("x", NameQualification::FullyQualified).with_lineno(9);
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "AST_NAME",
            "flags": 1,
            "lineno": 9,
            "children": {"name": "x"}
        })
    );
}

#[test]
fn test_unknown_bits_survive_decoding() {
    let node = Node::from_json(r#"{"kind": "AST_NAME", "flags": 1024}"#).unwrap();
    assert_eq!(node.flags, NodeFlags::from_raw(1024));
    assert_eq!(NameQualification::from_flags(node.flags), NameQualification::Unqualified);
}
