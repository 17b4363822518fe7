//! ValueTree: nested numeric state addressed by string keys.
//!
//! A tree is either a terminal `Leaf(f64)` or a `Node` mapping keys to
//! sub-trees. The variant is explicit, so any finite number (negatives
//! included) is a valid leaf.
//!
//! JSON form is untagged: numbers are leaves, objects are nodes.
//!   { "x": 10, "fill": { "r": 0.5, "a": 1 } }

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueTree {
    /// Terminal numeric value
    Leaf(f64),
    /// Nested mapping of key -> sub-tree
    Node(HashMap<String, ValueTree>),
}

impl Default for ValueTree {
    fn default() -> Self {
        ValueTree::Node(HashMap::new())
    }
}

impl From<f64> for ValueTree {
    fn from(v: f64) -> Self {
        ValueTree::Leaf(v)
    }
}

impl ValueTree {
    /// Convenience constructors
    pub fn leaf(v: f64) -> Self {
        ValueTree::Leaf(v)
    }

    pub fn node() -> Self {
        ValueTree::Node(HashMap::new())
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<ValueTree>,
        I: IntoIterator<Item = (K, V)>,
    {
        ValueTree::Node(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builder-style insert. Turns a leaf into an empty node first.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ValueTree>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ValueTree>) {
        if let ValueTree::Leaf(_) = self {
            *self = ValueTree::node();
        }
        if let ValueTree::Node(map) = self {
            map.insert(key.into(), value.into());
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, ValueTree::Leaf(_))
    }

    #[inline]
    pub fn is_node(&self) -> bool {
        matches!(self, ValueTree::Node(_))
    }

    #[inline]
    pub fn as_leaf(&self) -> Option<f64> {
        match self {
            ValueTree::Leaf(v) => Some(*v),
            ValueTree::Node(_) => None,
        }
    }

    /// Child lookup; `None` for leaves and missing keys.
    pub fn get(&self, key: &str) -> Option<&ValueTree> {
        match self {
            ValueTree::Node(map) => map.get(key),
            ValueTree::Leaf(_) => None,
        }
    }

    /// Dotted lookup: `get_path("fill.r")`. Empty path returns `self`.
    pub fn get_path(&self, path: &str) -> Option<&ValueTree> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.').try_fold(self, |cur, seg| cur.get(seg))
    }

    /// Number of direct children (0 for leaves).
    pub fn len(&self) -> usize {
        match self {
            ValueTree::Node(map) => map.len(),
            ValueTree::Leaf(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ValueTree)> {
        let map = match self {
            ValueTree::Node(map) => Some(map),
            ValueTree::Leaf(_) => None,
        };
        map.into_iter().flat_map(|m| m.iter())
    }

    /// Merge `partial` into `self`, overwriting leaves and recursing into
    /// nodes present on both sides. Keys absent from `partial` are untouched.
    pub fn merge(&mut self, partial: &ValueTree) {
        match (self, partial) {
            (ValueTree::Node(dst), ValueTree::Node(src)) => {
                for (key, incoming) in src {
                    let both_nodes =
                        incoming.is_node() && dst.get(key).map(ValueTree::is_node).unwrap_or(false);
                    if both_nodes {
                        if let Some(existing) = dst.get_mut(key) {
                            existing.merge(incoming);
                        }
                    } else {
                        dst.insert(key.clone(), incoming.clone());
                    }
                }
            }
            (dst, src) => *dst = src.clone(),
        }
    }

    /// True when every key of `self` exists in `other` with the same shape
    /// (leaf vs node), recursively. Extra keys in `other` are fine.
    pub fn is_congruent_with(&self, other: &ValueTree) -> bool {
        match (self, other) {
            (ValueTree::Leaf(_), ValueTree::Leaf(_)) => true,
            (ValueTree::Node(a), ValueTree::Node(b)) => a.iter().all(|(key, sub)| {
                b.get(key)
                    .map(|other_sub| sub.is_congruent_with(other_sub))
                    .unwrap_or(false)
            }),
            _ => false,
        }
    }

    pub fn from_json(value: JsonValue) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            ValueTree::Leaf(v) => serde_json::Number::from_f64(*v)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            ValueTree::Node(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ValueTree {
        ValueTree::node()
            .with("x", 10.0)
            .with("fill", ValueTree::from_pairs([("r", 0.5), ("a", 1.0)]))
    }

    #[test]
    fn path_lookup_walks_nodes() {
        let t = sample();
        assert_eq!(t.get_path("x").and_then(ValueTree::as_leaf), Some(10.0));
        assert_eq!(t.get_path("fill.r").and_then(ValueTree::as_leaf), Some(0.5));
        assert!(t.get_path("fill.r.deeper").is_none());
        assert!(t.get_path("missing").is_none());
        assert_eq!(t.get_path(""), Some(&t));
    }

    #[test]
    fn merge_overwrites_only_given_keys() {
        let mut t = sample();
        let partial = ValueTree::node().with("fill", ValueTree::node().with("r", 0.25));
        t.merge(&partial);
        assert_eq!(t.get_path("fill.r").and_then(ValueTree::as_leaf), Some(0.25));
        assert_eq!(t.get_path("fill.a").and_then(ValueTree::as_leaf), Some(1.0));
        assert_eq!(t.get_path("x").and_then(ValueTree::as_leaf), Some(10.0));
    }

    #[test]
    fn merge_adds_new_keys() {
        let mut t = ValueTree::node();
        t.merge(&ValueTree::node().with("y", -3.0));
        assert_eq!(t.get("y").and_then(ValueTree::as_leaf), Some(-3.0));
    }

    #[test]
    fn congruence_checks_shape_not_values() {
        let target = ValueTree::node().with("fill", ValueTree::node().with("r", 1.0));
        assert!(target.is_congruent_with(&sample()));

        let leaf_vs_node = ValueTree::node().with("fill", 1.0);
        assert!(!leaf_vs_node.is_congruent_with(&sample()));

        let missing = ValueTree::node().with("z", 1.0);
        assert!(!missing.is_congruent_with(&sample()));
    }

    #[test]
    fn json_is_untagged() {
        let t = ValueTree::from_json(json!({ "x": -2.5, "fill": { "r": 0.5 } })).unwrap();
        assert_eq!(t.get_path("x").and_then(ValueTree::as_leaf), Some(-2.5));
        assert!(t.get("fill").map(ValueTree::is_node).unwrap_or(false));
        assert_eq!(t.to_json(), json!({ "x": -2.5, "fill": { "r": 0.5 } }));
    }

    #[test]
    fn non_numeric_json_is_rejected() {
        assert!(ValueTree::from_json(json!({ "label": "hi" })).is_err());
    }
}
