//! Schema tree model and JSON Schema rendering

use profile_vocab::Enumeration;
use serde_json::{json, Map, Value};

/// A node in the assembled schema tree.
///
/// Nodes are constructed bottom-up and never mutated after a parent has
/// incorporated them.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Optional enumerated leaf; renders as a bare `enum` so the absent
    /// marker (`null`) stays admissible
    Enum(Enumeration),
    /// Closed string enumeration for list-item scalars, no absent marker
    StringEnum(Enumeration),
    /// Free-text leaf
    Text {
        nullable: bool,
        description: Option<String>,
    },
    /// Boolean leaf
    Flag,
    /// Object with ordered children; every declared child is required and
    /// undeclared fields are rejected
    Object(Vec<(String, SchemaNode)>),
    /// Array of one item schema
    Array(Box<SchemaNode>),
}

impl SchemaNode {
    /// Free-text leaf
    #[must_use]
    pub fn text() -> Self {
        SchemaNode::Text {
            nullable: false,
            description: None,
        }
    }

    /// Free-text leaf that also accepts `null`
    #[must_use]
    pub fn nullable_text() -> Self {
        SchemaNode::Text {
            nullable: true,
            description: None,
        }
    }

    /// Free-text leaf with a description
    pub fn described_text(description: impl Into<String>) -> Self {
        SchemaNode::Text {
            nullable: false,
            description: Some(description.into()),
        }
    }

    /// Object node from ordered (name, child) pairs
    pub fn object<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaNode)>,
        S: Into<String>,
    {
        SchemaNode::Object(
            properties
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
        )
    }

    /// Array node wrapping one item schema
    #[must_use]
    pub fn array(items: SchemaNode) -> Self {
        SchemaNode::Array(Box::new(items))
    }

    /// Render this node as a JSON Schema fragment
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::Enum(values) => json!({ "enum": values }),
            SchemaNode::StringEnum(values) => json!({ "type": "string", "enum": values }),
            SchemaNode::Text {
                nullable,
                description,
            } => {
                let mut map = Map::new();
                let type_value = if *nullable {
                    json!(["string", "null"])
                } else {
                    json!("string")
                };
                map.insert("type".to_string(), type_value);
                if let Some(text) = description {
                    map.insert("description".to_string(), json!(text));
                }
                Value::Object(map)
            }
            SchemaNode::Flag => json!({ "type": "boolean" }),
            SchemaNode::Object(properties) => {
                let mut rendered = Map::new();
                for (name, child) in properties {
                    rendered.insert(name.clone(), child.to_value());
                }
                let required: Vec<Value> =
                    properties.iter().map(|(name, _)| json!(name)).collect();
                json!({
                    "type": "object",
                    "properties": rendered,
                    "required": required,
                    "additionalProperties": false,
                })
            }
            SchemaNode::Array(items) => json!({ "type": "array", "items": items.to_value() }),
        }
    }
}

/// A complete schema document: the root node plus the meta-schema header
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    root: SchemaNode,
}

impl SchemaDocument {
    /// Wrap an assembled root node
    #[must_use]
    pub fn new(root: SchemaNode) -> Self {
        Self { root }
    }

    /// The root node
    #[must_use]
    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Render the full document, `$schema` header first
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut document = Map::new();
        document.insert(
            "$schema".to_string(),
            json!("http://json-schema.org/draft-07/schema#"),
        );
        if let Value::Object(body) = self.root.to_value() {
            document.extend(body);
        }
        Value::Object(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_leaf_renders_bare_enum() {
        let node = SchemaNode::Enum(Enumeration::from_texts(["a", "b"]).with_absent());
        assert_eq!(node.to_value(), json!({ "enum": ["a", "b", null] }));
    }

    #[test]
    fn test_string_enum_leaf_is_typed() {
        let node = SchemaNode::StringEnum(Enumeration::from_texts(["x"]));
        assert_eq!(node.to_value(), json!({ "type": "string", "enum": ["x"] }));
    }

    #[test]
    fn test_text_leaves() {
        assert_eq!(SchemaNode::text().to_value(), json!({ "type": "string" }));
        assert_eq!(
            SchemaNode::nullable_text().to_value(),
            json!({ "type": ["string", "null"] })
        );
        assert_eq!(
            SchemaNode::described_text("hint").to_value(),
            json!({ "type": "string", "description": "hint" })
        );
    }

    #[test]
    fn test_object_requires_every_child_and_closes() {
        let node = SchemaNode::object(vec![
            ("name", SchemaNode::nullable_text()),
            ("active", SchemaNode::Flag),
        ]);
        let value = node.to_value();
        assert_eq!(value["required"], json!(["name", "active"]));
        assert_eq!(value["additionalProperties"], json!(false));
        assert_eq!(value["properties"]["active"], json!({ "type": "boolean" }));
    }

    #[test]
    fn test_object_property_order_is_construction_order() {
        let node = SchemaNode::object(vec![
            ("zulu", SchemaNode::text()),
            ("alpha", SchemaNode::text()),
        ]);
        let rendered = serde_json::to_string(&node.to_value()).unwrap();
        let zulu = rendered.find("\"zulu\"").unwrap();
        let alpha = rendered.find("\"alpha\"").unwrap();
        assert!(zulu < alpha);
    }

    #[test]
    fn test_array_wraps_item_schema() {
        let node = SchemaNode::array(SchemaNode::text());
        assert_eq!(
            node.to_value(),
            json!({ "type": "array", "items": { "type": "string" } })
        );
    }

    #[test]
    fn test_document_header() {
        let document = SchemaDocument::new(SchemaNode::object(vec![(
            "extra_notes",
            SchemaNode::nullable_text(),
        )]));
        let value = document.to_value();
        assert_eq!(
            value["$schema"],
            json!("http://json-schema.org/draft-07/schema#")
        );
        assert_eq!(value["type"], json!("object"));
    }
}
