//! Parsing of the stack description document.
//!
//! The input schema is opaque: whatever nested mappings, sequences, and
//! scalars the YAML holds are carried through verbatim, in document order.
//! Parsing only enforces the structural policies the generated file needs:
//! string (or string-coercible) mapping keys, finite numbers, no
//! application-specific tags. YAML merge keys (`<<`) are resolved, and an
//! empty or comment-only document becomes an empty mapping so the generated
//! file always assigns a usable structure.

use crate::error::{Result, StackgenError};
use serde_json::{Map, Value};
use std::path::Path;

/// Read and parse the stack description into a config tree.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        StackgenError::ParseError(format!(
            "failed to read stack description '{}': {}",
            path.display(),
            e
        ))
    })?;

    from_yaml(&text)
}

/// Parse a single YAML document into a config tree.
///
/// Multi-document streams are rejected by the parser. Malformed syntax
/// propagates the underlying parser diagnostic; there is no partial
/// recovery.
pub fn from_yaml(text: &str) -> Result<Value> {
    let mut doc: serde_yaml::Value = serde_yaml::from_str(text)
        .map_err(|e| StackgenError::ParseError(format!("invalid stack description: {}", e)))?;

    doc.apply_merge()
        .map_err(|e| StackgenError::ParseError(format!("invalid stack description: {}", e)))?;

    match doc {
        // Empty, comment-only, and explicit-null documents all parse to the
        // absence sentinel; downstream consumers get a mapping regardless.
        serde_yaml::Value::Null => Ok(Value::Object(Map::new())),
        other => tree_from(other),
    }
}

fn tree_from(value: serde_yaml::Value) -> Result<Value> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_yaml::Value::Number(n) => number_from(&n),
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(sequence) => {
            let items = sequence
                .into_iter()
                .map(tree_from)
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(items))
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                // Coerced keys can collide (`1` and `"1"`); last value wins,
                // first position is kept.
                object.insert(key_from(key)?, tree_from(value)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => Err(StackgenError::ParseError(format!(
            "unsupported YAML tag '{}' in the stack description",
            tagged.tag
        ))),
    }
}

/// Coerce a mapping key to its string form.
///
/// Scalar keys use their canonical scalar rendering ("true", "1", "1.5",
/// "null"); sequences and mappings cannot name fields in the generated file.
fn key_from(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Sequence(_) => Err(non_scalar_key("sequence")),
        serde_yaml::Value::Mapping(_) => Err(non_scalar_key("mapping")),
        serde_yaml::Value::Tagged(_) => Err(non_scalar_key("tagged")),
    }
}

fn non_scalar_key(kind: &str) -> StackgenError {
    StackgenError::ParseError(format!("mapping keys must be scalars, found a {} key", kind))
}

fn number_from(number: &serde_yaml::Number) -> Result<Value> {
    if let Some(i) = number.as_i64() {
        return Ok(Value::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Ok(Value::from(u));
    }
    if let Some(f) = number.as_f64()
        && let Some(n) = serde_json::Number::from_f64(f)
    {
        return Ok(Value::Number(n));
    }

    // `.inf` / `.nan` parse fine as YAML but have no literal form in the
    // generated file's syntax.
    Err(StackgenError::ParseError(format!(
        "non-finite number {} cannot be represented in the generated data file",
        number
    )))
}
