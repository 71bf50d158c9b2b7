//! Parsed JSON samples.
//!
//! A [`Sample`] is decided once, right after parsing, so inference can match
//! exhaustively instead of poking at a `serde_json::Value` over and over.
use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sample {
    Null,
    Bool(bool),
    /// Anything serde_json reports as `i64` or `u64`.
    Integer(i128),
    Float(OrderedFloat<f64>),
    String(String),
    Sequence(Vec<Sample>),
    /// Key order is the document's order.
    Mapping(IndexMap<String, Sample>),
}

/// kind enum + detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind { Null, Bool, Integer, Float, String, Sequence, Mapping }

impl Sample {
    pub fn kind(&self) -> Kind {
        match self {
            Sample::Null        => Kind::Null,
            Sample::Bool(_)     => Kind::Bool,
            Sample::Integer(_)  => Kind::Integer,
            Sample::Float(_)    => Kind::Float,
            Sample::String(_)   => Kind::String,
            Sample::Sequence(_) => Kind::Sequence,
            Sample::Mapping(_)  => Kind::Mapping,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Sample>> {
        match self {
            Sample::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null     => "null",
            Kind::Bool     => "boolean",
            Kind::Integer  => "integer",
            Kind::Float    => "float",
            Kind::String   => "string",
            Kind::Sequence => "array",
            Kind::Mapping  => "object",
        };
        f.write_str(name)
    }
}

impl From<Value> for Sample {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Sample::Null,
            Value::Bool(b) => Sample::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Sample::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Sample::Integer(i128::from(u))
                } else {
                    // without arbitrary_precision every remaining number is an f64
                    Sample::Float(OrderedFloat(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::String(s) => Sample::String(s),
            Value::Array(xs) => Sample::Sequence(xs.into_iter().map(Sample::from).collect()),
            Value::Object(map) => Sample::Mapping(
                map.into_iter().map(|(k, v)| (k, Sample::from(v))).collect()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_split_into_integer_and_float() {
        assert_eq!(Sample::from(json!(7)), Sample::Integer(7));
        assert_eq!(Sample::from(json!(-7)), Sample::Integer(-7));
        assert_eq!(Sample::from(json!(u64::MAX)), Sample::Integer(i128::from(u64::MAX)));
        assert_eq!(Sample::from(json!(1.5)), Sample::Float(OrderedFloat(1.5)));

        // `1.0` stays a float even though it is integral
        let parsed: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(Sample::from(parsed).kind(), Kind::Float);
        let parsed: Value = serde_json::from_str("1e5").unwrap();
        assert_eq!(Sample::from(parsed).kind(), Kind::Float);
    }

    #[test]
    fn mapping_keeps_document_order() {
        let parsed: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let sample = Sample::from(parsed);
        let keys: Vec<&str> = sample.as_mapping().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn duplicate_key_keeps_first_position_and_last_value() {
        let parsed: Value = serde_json::from_str(r#"{"a": 1, "b": 2, "a": "x"}"#).unwrap();
        let sample = Sample::from(parsed);
        let map = sample.as_mapping().unwrap();
        assert_eq!(map.get_index(0), Some((&"a".to_string(), &Sample::String("x".into()))));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn kinds_describe_json_names() {
        assert_eq!(Sample::from(json!([])).kind().to_string(), "array");
        assert_eq!(Sample::from(json!({})).kind().to_string(), "object");
        assert_eq!(Sample::Null.kind().to_string(), "null");
    }
}
