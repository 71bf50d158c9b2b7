// Strongly-typed IR for codegen. No Sample values here.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    Bool,
    Integer,
    Float,
    String,
    Any,                            // null / unknown element type
    Sequence { item: Box<TypeRef> },
    Record { name: String },        // refers to a Record in the same Schema
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub key: String,                // JSON key, verbatim
    pub export_name: String,        // title-cased key
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,         // document order
}

/// All records synthesized by one inference run, keyed by name in
/// registration order. The root record is always registered first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub records: IndexMap<String, Record>,
}

impl TypeRef {
    pub fn sequence_of(item: TypeRef) -> Self {
        TypeRef::Sequence { item: Box::new(item) }
    }

    /// The record this reference points at, looking through any sequences.
    pub fn record_name(&self) -> Option<&str> {
        match self {
            TypeRef::Record { name } => Some(name),
            TypeRef::Sequence { item } => item.record_name(),
            _ => None,
        }
    }
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    /// Records referenced by this record's fields, in field order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.fields.iter().filter_map(|f| f.ty.record_name())
    }
}

impl Schema {
    pub fn root(&self) -> &Record {
        &self.records[0]
    }

    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
