//! Integration tests for output validity
//!
//! Tests cover:
//! - A corpus of well-formed documents whose output must decode as JSON
//! - Idempotence over documents that already are JSON
//! - Trailing comma suppression
//! - Generated documents via property tests

use proptest::prelude::*;
use csonconv::{to_json, to_json_string};
use serde_json::Value;

#[cfg(test)]
mod json_validity_tests {
    use super::*;

    fn decodes(input: &str) -> Value {
        let converted = to_json_string(input);
        serde_json::from_str(&converted)
            .unwrap_or_else(|err| panic!("invalid JSON {converted:?} from {input:?}: {err}"))
    }

    /// Test every well-formed corpus document converts to decodable JSON
    #[test]
    fn test_corpus_decodes() {
        let corpus = [
            "",
            "a: 1",
            "a: 1\nb: 2\n",
            "a:\n  b: 1\n  c: 2\n",
            "a:\n  b:\n    c: 1\nd: 2\n",
            "user:\n  name: bob\n  role: admin\n",
            "flag: true\nother: false\nnothing: null\n",
            "n: 3.14.5\n",
            "t: -40\npi: 3.14\n",
            "s: '''\n  line1\n  line2\n  '''\n",
            "key: 1 # note\n",
            "# header\na: 1\n",
            "### doc ###\na: 1\n",
            "a: [x, y]\n",
            "a:\n  b: [x, y]\n",
            "tags: ['one', 'two']\n",
            "m: 'x # y'\n",
            "'quoted key': 1\n",
            "a: 1\r\nb: 2\r\n",
            "msg: hello world\n",
        ];
        for input in corpus {
            decodes(input);
        }
    }

    /// Test converting valid JSON reproduces the same document
    #[test]
    fn test_idempotence_on_json() {
        let documents = [
            r#"{"a":1}"#,
            r#"{"a":1,"b":[1,2],"c":{"d":"x"}}"#,
            r#"{"a":true}"#,
            "[1,2,3]",
            r#"["x","y"]"#,
            "{\n  \"a\": 1,\n  \"b\": [1, 2]\n}",
            "{\n  \"outer\": {\n    \"inner\": \"v\"\n  }\n}",
        ];
        for doc in documents {
            let converted = to_json_string(doc);
            let original: Value = serde_json::from_str(doc).unwrap();
            let reparsed: Value = serde_json::from_str(&converted)
                .unwrap_or_else(|err| panic!("invalid JSON {converted:?} from {doc:?}: {err}"));
            assert_eq!(reparsed, original, "value drift for {doc:?}");
            assert_eq!(
                serde_json::to_string(&reparsed).unwrap(),
                serde_json::to_string(&original).unwrap(),
                "key order drift for {doc:?}"
            );
            // a second pass is a fixed point
            assert_eq!(to_json_string(&converted), converted);
        }
    }

    /// Test trailing commas are suppressed before closers
    #[test]
    fn test_trailing_commas_suppressed() {
        assert_eq!(to_json_string("[1, 2, ]"), "[1,2]");
        assert_eq!(to_json_string("t: [1, 2, ]\n"), r#"{"t":[1,2]}"#);
        assert_eq!(to_json_string("{\"a\": 1,}"), r#"{"a":1}"#);
    }

    /// Test the comment elision equivalence across comment forms
    #[test]
    fn test_comment_forms_are_equivalent() {
        let bare = "key: 1\nother: 2\n";
        let variants = [
            "key: 1 # note\nother: 2\n",
            "# leading\nkey: 1\nother: 2\n",
            "key: 1\n### block\ncomment ###\nother: 2\n",
        ];
        for variant in variants {
            assert_eq!(to_json_string(variant), to_json_string(bare));
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf(String),
    Branch(Vec<(String, Node)>),
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_filter("keys must not read as keyword literals", |k| {
        !matches!(k.as_str(), "true" | "false" | "null")
    })
}

fn scalar_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i64>().prop_map(|n| n.to_string()),
        "[a-z]{1,8}".prop_map(|w| w.to_string()),
        "[a-zA-Z0-9_ ]{0,12}".prop_map(|s| format!("'{s}'")),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = scalar_strategy().prop_map(Node::Leaf);
    leaf.prop_recursive(3, 24, 3, |inner| {
        prop::collection::vec((key_strategy(), inner), 1..4).prop_map(Node::Branch)
    })
}

fn document_strategy() -> impl Strategy<Value = Vec<(String, Node)>> {
    prop::collection::vec((key_strategy(), node_strategy()), 1..4)
}

fn render(entries: &[(String, Node)], indent: usize, out: &mut String) {
    for (key, node) in entries {
        for _ in 0..indent {
            out.push(' ');
        }
        out.push_str(key);
        match node {
            Node::Leaf(value) => {
                out.push_str(": ");
                out.push_str(value);
                out.push('\n');
            }
            Node::Branch(children) => {
                out.push_str(":\n");
                render(children, indent + 2, out);
            }
        }
    }
}

proptest! {
    /// The conversion is total: arbitrary bytes never panic
    #[test]
    fn prop_conversion_is_total(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = to_json(&bytes);
    }

    /// Generated flat documents always decode
    #[test]
    fn prop_flat_documents_decode(
        entries in prop::collection::vec((key_strategy(), scalar_strategy()), 1..8)
    ) {
        let mut doc = String::new();
        for (key, value) in &entries {
            doc.push_str(key);
            doc.push_str(": ");
            doc.push_str(value);
            doc.push('\n');
        }
        let converted = to_json_string(&doc);
        let parsed: Result<Value, _> = serde_json::from_str(&converted);
        prop_assert!(
            parsed.is_ok(),
            "invalid JSON {:?} from {:?}",
            converted,
            doc
        );
        prop_assert!(parsed.unwrap().is_object());
    }

    /// Generated nested documents always decode
    #[test]
    fn prop_nested_documents_decode(entries in document_strategy()) {
        let mut doc = String::new();
        render(&entries, 0, &mut doc);
        let converted = to_json_string(&doc);
        let parsed: Result<Value, _> = serde_json::from_str(&converted);
        prop_assert!(
            parsed.is_ok(),
            "invalid JSON {:?} from {:?}",
            converted,
            doc
        );
        prop_assert!(parsed.unwrap().is_object());
    }
}
