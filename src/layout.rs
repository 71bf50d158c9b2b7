//! Emission order for the records of a [`Schema`].
use clap::ValueEnum;
use serde::Serialize;

use crate::ir::{Record, Schema};

/// Both orders place every record above the records that reference it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefinitionOrder {
    /// post-order: a record's children in field order, then the record
    #[default]
    DependencyFirst,
    /// insert-at-front on discovery: later siblings are layered above earlier ones
    Discovery,
}

pub fn order_records(schema: &Schema, order: DefinitionOrder) -> Vec<&Record> {
    let mut out = Vec::with_capacity(schema.len());
    if schema.is_empty() {
        return out;
    }
    match order {
        DefinitionOrder::DependencyFirst => post_order(schema, schema.root(), &mut out),
        DefinitionOrder::Discovery => discovery(schema, schema.root(), &mut out),
    }
    out
}

fn post_order<'a>(schema: &'a Schema, record: &'a Record, out: &mut Vec<&'a Record>) {
    for child in record.children() {
        if let Some(child) = schema.record(child) {
            post_order(schema, child, out);
        }
    }
    out.push(record);
}

fn discovery<'a>(schema: &'a Schema, record: &'a Record, out: &mut Vec<&'a Record>) {
    for child in record.children().rev() {
        if let Some(child) = schema.record(child) {
            discovery(schema, child, out);
        }
    }
    out.push(record);
}
