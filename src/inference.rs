//! Single-sample structural inference.
//!
//! Walk one parsed JSON sample and synthesize a record type for every object
//! shape encountered. The root object becomes the root record (`Root` by
//! default); an object nested under field `f` of record `P` becomes record
//! `P` + `F`, where `F` is the title-cased key. Arrays are typed by their
//! first element only.
//!
//! Records are collected in an explicit [`Registry`] threaded through the
//! recursion; rendering and ordering happen later (see [`crate::layout`] and
//! [`crate::codegen`]).
pub mod naming;
mod arr;
mod obj;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::codegen::Codegen;
use crate::error::{Error, Result};
use crate::ir::{Field, Record, Schema, TypeRef};
use crate::layout::DefinitionOrder;
use crate::sample::Sample;

pub const DEFAULT_ROOT_NAME: &str = "Root";

// ------------------------------ Options ----------------------------------- //

#[derive(Clone, Debug)]
pub struct InferOptions {
    pub root_name: String,
    pub order: DefinitionOrder,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            order: DefinitionOrder::default(),
        }
    }
}

// ------------------------------ Registry ---------------------------------- //

/// Records discovered so far, in the order their names were claimed.
#[derive(Debug, Default)]
struct Registry {
    records: IndexMap<String, Record>,
}

impl Registry {
    /// Reserve a unique record name, suffixing `2, 3, …` on collision.
    fn claim(&mut self, candidate: &str) -> String {
        let name = naming::disambiguate(candidate, |n| self.records.contains_key(n));
        if name != candidate {
            warn!(candidate, assigned = %name, "record name collision, renamed");
        }
        debug!(record = %name, "discovered record");
        self.records.insert(name.clone(), Record::new(name.clone()));
        name
    }

    fn fill(&mut self, name: &str, fields: Vec<Field>) {
        if let Some(record) = self.records.get_mut(name) {
            record.fields = fields;
        }
    }

    fn into_schema(self) -> Schema {
        Schema { records: self.records }
    }
}

// ------------------------------ Observe ----------------------------------- //

fn infer_type(value: &Sample, parent: &str, export_name: &str, registry: &mut Registry) -> TypeRef {
    match value {
        Sample::Null => TypeRef::Any,
        Sample::Bool(_) => TypeRef::Bool,
        Sample::Integer(_) => TypeRef::Integer,
        Sample::Float(_) => TypeRef::Float,
        Sample::String(_) => TypeRef::String,
        Sample::Sequence(items) => arr::infer_sequence(items, parent, export_name, registry),
        Sample::Mapping(map) => {
            let candidate = naming::nested_name(parent, export_name);
            TypeRef::Record { name: obj::infer_record(&candidate, map, registry) }
        }
    }
}

/// The object a document's root record is inferred from.
fn root_mapping(document: &Sample) -> Result<&IndexMap<String, Sample>> {
    let root = match document {
        Sample::Sequence(items) => match items.first() {
            Some(first) => first,
            None => return Err(Error::Shape { found: "empty array".to_string() }),
        },
        other => other,
    };
    root.as_mapping().ok_or_else(|| {
        let found = match document {
            Sample::Sequence(_) => format!("array of {}", root.kind()),
            _ => root.kind().to_string(),
        };
        Error::Shape { found }
    })
}

// ------------------------------- Front API -------------------------------- //

/// Infer every record needed to represent `document`.
///
/// `document` must be an object or a non-empty array whose first element is
/// an object; only that first element is inspected.
pub fn infer_schema(document: &Sample, root_name: &str) -> Result<Schema> {
    if !naming::is_identifier(root_name) {
        return Err(Error::RootName { name: root_name.to_string() });
    }
    let root = root_mapping(document)?;
    let mut registry = Registry::default();
    obj::infer_record(root_name, root, &mut registry);
    let schema = registry.into_schema();
    debug!(records = schema.len(), "inference complete");
    Ok(schema)
}

/// Infer and render Go type definitions, children before parents.
pub fn infer(document: &Sample, root_name: &str) -> Result<String> {
    infer_with(document, &InferOptions { root_name: root_name.to_string(), ..InferOptions::default() })
}

pub fn infer_with(document: &Sample, options: &InferOptions) -> Result<String> {
    let schema = infer_schema(document, &options.root_name)?;
    let mut cg = Codegen::with_order(options.order);
    cg.emit(&schema);
    Ok(cg.into_string())
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample(v: serde_json::Value) -> Sample {
        Sample::from(v)
    }

    fn root_infer(v: serde_json::Value) -> String {
        infer(&sample(v), DEFAULT_ROOT_NAME).unwrap()
    }

    #[test]
    fn primitive_fields_make_one_record() {
        let schema = infer_schema(
            &sample(json!({"flag": true, "count": 3, "ratio": 0.5, "name": "x", "gone": null})),
            "Root",
        ).unwrap();
        assert_eq!(schema.len(), 1);
        let root = schema.root();
        assert_eq!(root.name, "Root");
        let tys: Vec<(&str, &TypeRef)> = root.fields.iter().map(|f| (f.export_name.as_str(), &f.ty)).collect();
        assert_eq!(tys, vec![
            ("Flag", &TypeRef::Bool),
            ("Count", &TypeRef::Integer),
            ("Ratio", &TypeRef::Float),
            ("Name", &TypeRef::String),
            ("Gone", &TypeRef::Any),
        ]);
    }

    #[test]
    fn nested_object_precedes_root() {
        let out = root_infer(json!({"id": 1, "tags": ["a", "b"], "meta": {"ok": true}}));
        assert_eq!(out, concat!(
            "type RootMeta struct {\n",
            "\tOk bool `json:\"ok\"`\n",
            "}\n",
            "\n",
            "type Root struct {\n",
            "\tId int64 `json:\"id\"`\n",
            "\tTags []string `json:\"tags\"`\n",
            "\tMeta RootMeta `json:\"meta\"`\n",
            "}",
        ));
    }

    #[test]
    fn array_of_objects_becomes_named_sequence() {
        let out = root_infer(json!({"items": [{"x": 1.5}]}));
        assert_eq!(out, concat!(
            "type RootItems struct {\n",
            "\tX float64 `json:\"x\"`\n",
            "}\n",
            "\n",
            "type Root struct {\n",
            "\tItems []RootItems `json:\"items\"`\n",
            "}",
        ));
    }

    #[test]
    fn array_root_uses_first_element() {
        let first = json!({"a": 1, "b": {"c": "d"}});
        let array = json!([first.clone(), {"ignored": true}, 42]);
        assert_eq!(root_infer(array), root_infer(first));
    }

    #[test]
    fn inference_is_idempotent() {
        let doc = sample(json!({"a": {"b": [{"c": null}]}, "d": [[1]]}));
        assert_eq!(infer(&doc, "Root").unwrap(), infer(&doc, "Root").unwrap());
    }

    #[test]
    fn empty_object_has_no_fields() {
        assert_eq!(root_infer(json!({})), "type Root struct {\n}");
    }

    #[test]
    fn bad_root_shapes_are_shape_errors() {
        for (doc, found) in [
            (json!([]), "empty array"),
            (json!([1, 2]), "array of integer"),
            (json!("text"), "string"),
            (json!(null), "null"),
            (json!(2.5), "float"),
        ] {
            match infer(&sample(doc), "Root") {
                Err(Error::Shape { found: got }) => assert_eq!(got, found),
                other => panic!("expected shape error, got {other:?}"),
            }
        }
    }

    #[test]
    fn sequence_element_types() {
        let schema = infer_schema(
            &sample(json!({"empty": [], "nums": [1, "mixed"], "grid": [[1.0]], "nulls": [null]})),
            "Root",
        ).unwrap();
        let tys: Vec<&TypeRef> = schema.root().fields.iter().map(|f| &f.ty).collect();
        assert_eq!(tys, vec![
            &TypeRef::sequence_of(TypeRef::Any),
            &TypeRef::sequence_of(TypeRef::Integer),
            &TypeRef::sequence_of(TypeRef::sequence_of(TypeRef::Float)),
            &TypeRef::sequence_of(TypeRef::Any),
        ]);
    }

    #[test]
    fn objects_inside_nested_sequences_are_emitted() {
        let out = root_infer(json!({"rows": [[{"v": true}]]}));
        assert_eq!(out, concat!(
            "type RootRows struct {\n",
            "\tV bool `json:\"v\"`\n",
            "}\n",
            "\n",
            "type Root struct {\n",
            "\tRows [][]RootRows `json:\"rows\"`\n",
            "}",
        ));
    }

    #[test]
    fn deep_nesting_concatenates_names() {
        let schema = infer_schema(&sample(json!({"a": {"b_c": {"d": {}}}})), "Root").unwrap();
        let names: Vec<&str> = schema.records.keys().map(String::as_str).collect();
        assert_eq!(names, ["Root", "RootA", "RootAB_C", "RootAB_CD"]);
    }

    #[test]
    fn colliding_names_get_numeric_suffix() {
        let schema = infer_schema(&sample(json!({"id": {"a": 1}, "ID": {"b": 2}})), "Root").unwrap();
        let names: Vec<&str> = schema.records.keys().map(String::as_str).collect();
        assert_eq!(names, ["Root", "RootId", "RootId2"]);

        let refs: Vec<Option<&str>> = schema.root().fields.iter().map(|f| f.ty.record_name()).collect();
        assert_eq!(refs, [Some("RootId"), Some("RootId2")]);
        assert_eq!(schema.record("RootId2").unwrap().fields[0].key, "b");
    }

    #[test]
    fn keys_that_title_case_alike_get_distinct_fields() {
        let out = root_infer(json!({"id": 1, "ID": 2, "Id": "x"}));
        assert_eq!(out, concat!(
            "type Root struct {\n",
            "\tId int64 `json:\"id\"`\n",
            "\tId2 int64 `json:\"ID\"`\n",
            "\tId3 string `json:\"Id\"`\n",
            "}",
        ));

        let schema = infer_schema(&sample(json!({"id": {"a": 1}, "ID": {"b": 2}})), "Root").unwrap();
        let exports: Vec<&str> = schema.root().fields.iter().map(|f| f.export_name.as_str()).collect();
        assert_eq!(exports, ["Id", "Id2"]);
    }

    #[test]
    fn empty_key_cannot_shadow_root() {
        let schema = infer_schema(&sample(json!({"": {"x": 1}})), "Root").unwrap();
        assert_eq!(schema.root().name, "Root");
        assert_eq!(schema.root().fields[0].ty, TypeRef::Record { name: "Root2".into() });
    }

    #[test]
    fn custom_root_name_prefixes_children() {
        let out = infer(&sample(json!({"meta": {}})), "Payload").unwrap();
        assert!(out.starts_with("type PayloadMeta struct {\n}\n\ntype Payload struct {\n"));
    }

    #[test]
    fn invalid_root_name_is_rejected() {
        for name in ["", "1Root", "Has Space"] {
            assert!(matches!(
                infer(&sample(json!({})), name),
                Err(Error::RootName { .. })
            ));
        }
    }

    #[test]
    fn discovery_order_layers_later_siblings_first() {
        let doc = sample(json!({"a": {"x": {"y": 1}}, "b": {"z": null}}));
        let options = InferOptions { order: DefinitionOrder::Discovery, ..InferOptions::default() };
        let out = infer_with(&doc, &options).unwrap();
        let headers: Vec<&str> = out.lines().filter(|l| l.starts_with("type ")).collect();
        assert_eq!(headers, [
            "type RootB struct {",
            "type RootAX struct {",
            "type RootA struct {",
            "type Root struct {",
        ]);

        let out = infer(&doc, "Root").unwrap();
        let headers: Vec<&str> = out.lines().filter(|l| l.starts_with("type ")).collect();
        assert_eq!(headers, [
            "type RootAX struct {",
            "type RootA struct {",
            "type RootB struct {",
            "type Root struct {",
        ]);
    }
}
