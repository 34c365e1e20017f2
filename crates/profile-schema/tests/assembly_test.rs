use profile_schema::{BindingTable, DocumentVariant, SchemaAssembler};
use profile_vocab::DictionaryLoader;
use serde_json::{json, Value};
use std::path::Path;

fn dictionaries_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/dictionaries")
}

fn assemble(variant: DocumentVariant) -> Value {
    let assembler = SchemaAssembler::new(
        DictionaryLoader::new(dictionaries_dir()),
        BindingTable::standard(),
        variant,
    );
    assembler.assemble().expect("assembly should succeed").to_value()
}

/// Every object node must require exactly its declared properties and
/// reject undeclared fields.
fn assert_objects_closed(value: &Value, path: &str) {
    if let Value::Object(map) = value {
        if map.get("type") == Some(&json!("object")) {
            let properties = map["properties"]
                .as_object()
                .unwrap_or_else(|| panic!("{path}: object node without properties"));
            let declared: Vec<Value> =
                properties.keys().map(|name| json!(name)).collect();
            assert_eq!(
                map["required"],
                Value::Array(declared),
                "{path}: required set must match declared properties"
            );
            assert_eq!(
                map["additionalProperties"],
                json!(false),
                "{path}: object must be closed"
            );
        }
        for (name, child) in map {
            assert_objects_closed(child, &format!("{path}/{name}"));
        }
    } else if let Value::Array(items) = value {
        for (index, item) in items.iter().enumerate() {
            assert_objects_closed(item, &format!("{path}[{index}]"));
        }
    }
}

#[test]
fn standard_variant_top_level_shape() {
    let schema = assemble(DocumentVariant::Standard);

    assert_eq!(schema["$schema"], json!("http://json-schema.org/draft-07/schema#"));
    assert_eq!(
        schema["required"],
        json!([
            "raw_input",
            "personal",
            "skills",
            "industries",
            "hobbies",
            "roles",
            "extra_notes"
        ])
    );
    assert!(schema["properties"].get("event_context").is_none());
}

#[test]
fn event_variant_adds_event_context() {
    let schema = assemble(DocumentVariant::WithEventContext);

    assert_eq!(
        schema["required"],
        json!([
            "raw_input",
            "personal",
            "skills",
            "industries",
            "hobbies",
            "roles",
            "event_context",
            "extra_notes"
        ])
    );
    let event_context = &schema["properties"]["event_context"];
    assert_eq!(event_context["required"], json!(["event_id", "goals"]));
    assert_eq!(
        event_context["properties"]["goals"]["properties"]["looking_for"]["items"],
        json!({
            "type": "string",
            "enum": ["hiring", "funding", "mentorship", "partnerships"]
        })
    );
}

#[test]
fn every_object_node_is_closed() {
    assert_objects_closed(&assemble(DocumentVariant::Standard), "");
    assert_objects_closed(&assemble(DocumentVariant::WithEventContext), "");
}

#[test]
fn optional_leaves_carry_the_absent_marker() {
    let schema = assemble(DocumentVariant::Standard);

    assert_eq!(
        schema["properties"]["personal"]["properties"]["visiting_status"],
        json!({ "enum": ["local", "visiting", "relocating", null] })
    );

    let skill = &schema["properties"]["skills"]["properties"]["hard"]["items"]["properties"];
    assert_eq!(skill["skill"], json!({ "enum": ["rust", "python", "sql", null] }));
    assert_eq!(
        skill["level"],
        json!({ "enum": ["beginner", "intermediate", "advanced", "expert", null] })
    );
}

#[test]
fn list_item_scalars_are_closed_string_enums() {
    let schema = assemble(DocumentVariant::Standard);

    assert_eq!(
        schema["properties"]["industries"]["items"],
        json!({
            "type": "string",
            "enum": ["fintech", "healthtech", "edtech", "gaming"]
        })
    );
    assert_eq!(
        schema["properties"]["hobbies"]["items"]["enum"],
        json!(["climbing", "chess", "photography"])
    );
}

#[test]
fn role_categories_feed_both_axes_from_one_dictionary() {
    let schema = assemble(DocumentVariant::Standard);
    let role = &schema["properties"]["roles"]["items"]["properties"];

    // Category names in file order, sub-category values sorted and
    // deduplicated ("Data" appears under two categories in the fixture).
    assert_eq!(
        role["category"],
        json!({ "enum": ["Engineering", "Design", "Business", null] })
    );
    assert_eq!(
        role["sub_category"],
        json!({
            "enum": [
                "Backend",
                "Data",
                "Frontend",
                "Marketing",
                "Product Design",
                "Sales",
                "UX Research",
                null
            ]
        })
    );
}

#[test]
fn role_structure_matches_document_shape() {
    let schema = assemble(DocumentVariant::Standard);
    let role = &schema["properties"]["roles"]["items"];

    assert_eq!(
        role["required"],
        json!([
            "organization",
            "category",
            "sub_category",
            "title",
            "seniority",
            "engagement",
            "skills",
            "highlights",
            "active"
        ])
    );
    assert_eq!(
        role["properties"]["organization"]["properties"]["org_type"]["enum"],
        json!(["startup", "scaleup", "enterprise", "agency", "nonprofit", null])
    );
    assert_eq!(
        role["properties"]["highlights"],
        json!({ "type": "array", "items": { "type": "string" } })
    );
    assert_eq!(role["properties"]["active"], json!({ "type": "boolean" }));
    assert_eq!(
        role["properties"]["engagement"]["properties"]["work_mode"]["enum"],
        json!(["onsite", "remote", "hybrid", null])
    );
}

#[test]
fn nested_role_skills_share_top_level_vocabularies() {
    let schema = assemble(DocumentVariant::Standard);
    let top = &schema["properties"]["skills"];
    let nested = &schema["properties"]["roles"]["items"]["properties"]["skills"];
    assert_eq!(top, nested);
}

#[test]
fn missing_dictionaries_degrade_to_absent_only_leaves() {
    let assembler = SchemaAssembler::new(
        DictionaryLoader::new(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/partial_dictionaries"),
        ),
        BindingTable::standard(),
        DocumentVariant::Standard,
    );
    let schema = assembler.assemble().expect("partial vocabulary must not abort").to_value();

    // Unresolved optional leaf: absent marker only.
    assert_eq!(
        schema["properties"]["personal"]["properties"]["visiting_status"],
        json!({ "enum": [null] })
    );
    // Unresolved list-item leaf: empty closed set.
    assert_eq!(
        schema["properties"]["industries"]["items"],
        json!({ "type": "string", "enum": [] })
    );
    // Leaves whose dictionaries exist still resolve.
    assert_eq!(
        schema["properties"]["skills"]["properties"]["hard"]["items"]["properties"]["skill"],
        json!({ "enum": ["rust", null] })
    );
}

#[test]
fn assembly_is_deterministic() {
    let first = serde_json::to_string_pretty(&assemble(DocumentVariant::WithEventContext)).unwrap();
    let second = serde_json::to_string_pretty(&assemble(DocumentVariant::WithEventContext)).unwrap();
    assert_eq!(first, second);
}
