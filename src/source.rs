//! Reading and selecting the input document.
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Input name that reads standard input.
pub const STDIN: &str = "-";

pub fn read_source(input: &str) -> Result<String> {
    if input == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| Error::Read { origin: "<stdin>".to_string(), source })?;
        return Ok(text);
    }
    let path = Path::new(input);
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read input");
            Ok(text)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            Err(Error::NotFound { path: path.to_path_buf() })
        }
        Err(source) => Err(Error::Read { origin: input.to_string(), source }),
    }
}

pub fn parse_document(text: &str, origin: &str) -> Result<Value> {
    serde_json::from_str::<Value>(text)
        .map_err(|source| Error::Parse { origin: origin.to_string(), source })
}

/// RFC 6901 sub-document selection.
pub fn select_pointer(value: Value, pointer: &str, origin: &str) -> Result<Value> {
    let mut value = value;
    match value.pointer_mut(pointer) {
        Some(selected) => Ok(selected.take()),
        None => Err(Error::Pointer { pointer: pointer.to_string(), origin: origin.to_string() }),
    }
}

/// Replace the document with the first output of a jq filter.
pub fn apply_jq(value: &Value, jq_expr: &str) -> Result<Value> {
    crate::jq_exec::first_output(jq_expr, value)
        .map_err(|error| Error::Jq { message: format!("{error:#}") })
}
