//! Go source emission.
//!
//! ```text
//! type RootMeta struct {
//! 	Ok bool `json:"ok"`
//! }
//!
//! type Root struct {
//! 	Meta RootMeta `json:"meta"`
//! }
//! ```
use std::fmt::Write as _;

use crate::ir::{Record, Schema, TypeRef};
use crate::layout::{order_records, DefinitionOrder};

pub struct Codegen {
    order: DefinitionOrder,
    blocks: Vec<String>,
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

impl Codegen {
    pub fn new() -> Self {
        Self::with_order(DefinitionOrder::default())
    }

    pub fn with_order(order: DefinitionOrder) -> Self {
        Self { order, blocks: Vec::new() }
    }

    /// Render every record of `schema`, children first.
    pub fn emit(&mut self, schema: &Schema) {
        for record in order_records(schema, self.order) {
            self.blocks.push(render_record(record));
        }
    }

    /// Definitions separated by a blank line, no trailing newline.
    pub fn into_string(self) -> String {
        self.blocks.join("\n\n")
    }
}

pub fn go_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Bool => "bool".to_string(),
        TypeRef::Integer => "int64".to_string(),
        TypeRef::Float => "float64".to_string(),
        TypeRef::String => "string".to_string(),
        TypeRef::Any => "interface{}".to_string(),
        TypeRef::Sequence { item } => format!("[]{}", go_type(item)),
        TypeRef::Record { name } => name.clone(),
    }
}

fn render_record(record: &Record) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "type {} struct {{", record.name);
    for field in &record.fields {
        let _ = writeln!(
            s,
            "\t{} {} `json:\"{}\"`",
            field.export_name,
            go_type(&field.ty),
            escape_tag_value(&field.key),
        );
    }
    s.push('}');
    s
}

/// Struct tag values are Go-quoted strings: `"` and `\` need a backslash.
fn escape_tag_value(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
