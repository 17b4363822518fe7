//! Interpolation helpers:
//! - ease (sinusoidal ease-in/ease-out)
//! - lerp (scalar blend)
//! - partial_values (recursive blend over a ValueTree)
//! - is_at_end (exact structural comparison)

use std::f64::consts::PI;

use crate::value::ValueTree;

#[inline]
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

/// Symmetric ease-in/ease-out: `-cos(t·π)/2 + 0.5`.
/// Endpoints are pinned so callers can test `eased == 1.0` exactly.
#[inline]
pub fn ease(t: f64) -> f64 {
    let t = clamp01(t);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    -(t * PI).cos() / 2.0 + 0.5
}

/// Scalar blend, written as `t * (end - start) + start`.
/// `t == 1` yields `end` bit-exact; the formula alone can be off by an ulp.
#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    if t == 1.0 {
        return end;
    }
    t * (end - start) + start
}

/// Build the partial tree for every key of `target`, blending from the
/// matching key of `start` by `eased`.
///
/// # Panics
/// When `start` is not congruent with `target` at some key (leaf paired with
/// a node, or a missing key). That is a caller contract violation.
pub fn partial_values(start: &ValueTree, target: &ValueTree, eased: f64) -> ValueTree {
    partial_at(start, target, eased, &mut String::new())
}

fn partial_at(start: &ValueTree, target: &ValueTree, eased: f64, path: &mut String) -> ValueTree {
    match (start, target) {
        (ValueTree::Leaf(s), ValueTree::Leaf(e)) => ValueTree::Leaf(lerp(*s, *e, eased)),
        (ValueTree::Node(s), ValueTree::Node(e)) => {
            let mut out = hashbrown::HashMap::with_capacity(e.len());
            for (key, end_sub) in e {
                let mark = push_segment(path, key);
                let start_sub = match s.get(key) {
                    Some(v) => v,
                    None => panic!("value tree shape mismatch: start has no key '{path}'"),
                };
                out.insert(key.clone(), partial_at(start_sub, end_sub, eased, path));
                path.truncate(mark);
            }
            ValueTree::Node(out)
        }
        _ => panic!(
            "value tree shape mismatch at '{}': start is {}, target is {}",
            display_path(path),
            shape_name(start),
            shape_name(target)
        ),
    }
}

/// True when every key of `target` equals (exactly) the matching value in
/// `current`. Extra keys in `current` are ignored.
///
/// # Panics
/// On a shape mismatch, same as [`partial_values`].
pub fn is_at_end(current: &ValueTree, target: &ValueTree) -> bool {
    at_end(current, target, &mut String::new())
}

fn at_end(current: &ValueTree, target: &ValueTree, path: &mut String) -> bool {
    match (current, target) {
        (ValueTree::Leaf(c), ValueTree::Leaf(e)) => c == e,
        (ValueTree::Node(c), ValueTree::Node(e)) => e.iter().all(|(key, end_sub)| {
            let mark = push_segment(path, key);
            let cur_sub = match c.get(key) {
                Some(v) => v,
                None => panic!("value tree shape mismatch: current state has no key '{path}'"),
            };
            let done = at_end(cur_sub, end_sub, path);
            path.truncate(mark);
            done
        }),
        _ => panic!(
            "value tree shape mismatch at '{}': current is {}, target is {}",
            display_path(path),
            shape_name(current),
            shape_name(target)
        ),
    }
}

fn push_segment(path: &mut String, key: &str) -> usize {
    let mark = path.len();
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(key);
    mark
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

fn shape_name(v: &ValueTree) -> &'static str {
    match v {
        ValueTree::Leaf(_) => "a leaf",
        ValueTree::Node(_) => "a node",
    }
}
