//! Dot-notation access into JSON documents
//!
//! Paths look like `system.description.value` or `system.damage.parts.0`.
//! Numeric segments index into arrays.

use serde_json::{Map, Value};

use crate::DomainError;

/// Walk `path` from `root`. An empty path yields the root itself.
pub fn get_value_from_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Write `value` at `path`, creating intermediate objects as needed.
///
/// Fails when an intermediate segment is a scalar, or an array index is out
/// of range.
pub fn set_value_for_path(root: &mut Value, path: &str, value: Value) -> Result<(), DomainError> {
    if path.is_empty() {
        return Err(DomainError::invalid_path(path, "path is empty"));
    }

    let segments: Vec<&str> = path.split('.').collect();
    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| DomainError::invalid_path(path, "path is empty"))?;

    let mut current = root;
    for segment in parents {
        current = step_mut(current, segment, path)?;
    }

    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(map) => {
            map.insert((*last).to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            let slot = last
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get_mut(i))
                .ok_or_else(|| DomainError::invalid_path(path, "array index out of range"))?;
            *slot = value;
            Ok(())
        }
        _ => Err(DomainError::invalid_path(path, "cannot write into a scalar")),
    }
}

fn step_mut<'a>(current: &'a mut Value, segment: &str, path: &str) -> Result<&'a mut Value, DomainError> {
    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(map) => Ok(map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(move |i| items.get_mut(i))
            .ok_or_else(|| DomainError::invalid_path(path, "array index out of range")),
        _ => Err(DomainError::invalid_path(path, "cannot descend into a scalar")),
    }
}
