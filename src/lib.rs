//! Infer Go struct definitions from a single sample JSON document.
//!
//! ```
//! use json_gostruct::{inference, sample::Sample};
//!
//! let doc = Sample::from(serde_json::json!({"id": 1, "meta": {"ok": true}}));
//! let go = inference::infer(&doc, "Root").unwrap();
//! assert!(go.find("type RootMeta").unwrap() < go.find("type Root struct").unwrap());
//! ```
pub mod cli;
pub mod codegen;
pub mod error;
pub mod inference;
pub mod ir;
pub mod jq_exec;
pub mod layout;
pub mod sample;
pub mod source;

pub use error::{Error, Result};
