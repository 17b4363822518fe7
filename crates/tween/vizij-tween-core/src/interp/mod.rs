//! Easing and interpolation helpers shared by the tween.
//!
//! v1 ships a single sinusoidal ease-in/ease-out curve; blending is linear
//! per leaf after easing.

pub mod functions;

pub use functions::{clamp01, ease, is_at_end, lerp, partial_values};
