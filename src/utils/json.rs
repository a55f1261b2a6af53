//! Guarded lookups into untyped JSON payloads.

use serde_json::Value;

/// Walks `path` through nested objects, returning `None` at the first gap.
pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(Value::as_str)
}
