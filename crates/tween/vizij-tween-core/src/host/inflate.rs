use serde_json::{Map, Value as JsonValue};

use crate::error::InflateError;
use crate::value::ValueTree;

use super::{Inflate, RenderState};

/// Converts a nested JSON object into a target tree, checking every key
/// against the render state's current shape.
///
///   { "x": 10, "fill": { "a": 0 } }  ->  Node{x: Leaf(10), fill: Node{a: Leaf(0)}}
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonInflater;

impl<S: RenderState + ?Sized> Inflate<S> for JsonInflater {
    type Spec = JsonValue;
    type Error = InflateError;

    fn inflate(&self, state: &S, spec: &JsonValue) -> Result<ValueTree, InflateError> {
        match spec {
            JsonValue::Object(map) => inflate_object(map, Some(state.state()), &mut String::new()),
            other => Err(InflateError::NotAnObject {
                found: json_kind(other),
            }),
        }
    }
}

fn inflate_object(
    map: &Map<String, JsonValue>,
    current: Option<&ValueTree>,
    path: &mut String,
) -> Result<ValueTree, InflateError> {
    let mut out = hashbrown::HashMap::with_capacity(map.len());
    for (key, raw) in map {
        let mark = path.len();
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);

        let existing = current.and_then(|c| c.get(key));
        let Some(existing) = existing else {
            return Err(InflateError::UnknownKey { path: path.clone() });
        };
        let tree = match raw {
            JsonValue::Number(n) => {
                let v = n.as_f64().filter(|v| v.is_finite());
                let Some(v) = v else {
                    return Err(InflateError::NonFinite { path: path.clone() });
                };
                if existing.is_node() {
                    return Err(InflateError::ShapeMismatch {
                        path: path.clone(),
                        expected: "an object",
                        found: "a number",
                    });
                }
                ValueTree::Leaf(v)
            }
            JsonValue::Object(inner) => {
                if existing.is_leaf() {
                    return Err(InflateError::ShapeMismatch {
                        path: path.clone(),
                        expected: "a number",
                        found: "an object",
                    });
                }
                inflate_object(inner, Some(existing), path)?
            }
            other => {
                return Err(InflateError::NonNumeric {
                    path: path.clone(),
                    found: json_kind(other),
                })
            }
        };
        out.insert(key.clone(), tree);
        path.truncate(mark);
    }
    Ok(ValueTree::Node(out))
}

fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a bool",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
