//! Combination operators over signed distances.

use glam::Vec2;

/// Polynomial smooth minimum. Degenerates to a hard `min` as `k` approaches
/// zero; the guard makes that limit exact instead of dividing by zero.
pub fn smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    if k <= 1e-6 {
        return d1.min(d2);
    }
    let h = (0.5 + 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    d2 * (1.0 - h) + d1 * h - k * h * (1.0 - h)
}

/// Union with a circular fillet of radius `k` at the joint.
pub fn round_merge(d1: f32, d2: f32, k: f32) -> f32 {
    let u = Vec2::new((k - d1).max(0.0), (k - d2).max(0.0));
    d1.min(d2).max(k) - u.length()
}

pub fn intersect(d1: f32, d2: f32) -> f32 {
    d1.max(d2)
}

/// Remove the second field from the first.
pub fn subtract(d1: f32, d2: f32) -> f32 {
    d1.max(-d2)
}

/// Linear blend of two fields. Written so both endpoints are exact in
/// floating point: t = 0 returns `d1` unchanged, t = 1 returns `d2`.
pub fn interpolate(d1: f32, d2: f32, t: f32) -> f32 {
    d1 * (1.0 - t) + d2 * t
}

/// A combination rule with its parameter, applied pairwise when a scene
/// folds its shapes left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Union,
    SmoothUnion(f32),
    RoundMerge(f32),
    Intersect,
    Subtract,
    Interpolate(f32),
}

impl Operator {
    pub fn apply(self, d1: f32, d2: f32) -> f32 {
        match self {
            Operator::Union => d1.min(d2),
            Operator::SmoothUnion(k) => smooth_union(d1, d2, k),
            Operator::RoundMerge(k) => round_merge(d1, d2, k),
            Operator::Intersect => intersect(d1, d2),
            Operator::Subtract => subtract(d1, d2),
            Operator::Interpolate(t) => interpolate(d1, d2, t),
        }
    }
}
