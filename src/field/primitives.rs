//! Signed distance functions.
//!
//! Sign convention: negative inside, zero on the boundary, positive outside.
//! These are pure formulas. Degenerate parameters (zero-length capsule
//! segments, non-positive squircle exponents) yield NaN that flows through
//! to the pixel loop; nothing here traps or panics.

use glam::{Vec2, Vec3};

/// Distance from `p` to the edge of a circle.
pub fn circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Exact distance to an axis-aligned rectangle with half-extents `half`.
pub fn rect(p: Vec2, center: Vec2, half: Vec2) -> f32 {
    let d = (p - center).abs() - half;
    d.max(Vec2::ZERO).length() + d.max_element().min(0.0)
}

/// Rectangle rotated 45 degrees around its center: the diamond used by
/// shape morphing.
pub fn diamond(p: Vec2, center: Vec2, half: Vec2) -> f32 {
    let q = p - center;
    let c = std::f32::consts::FRAC_PI_4.cos();
    let s = std::f32::consts::FRAC_PI_4.sin();
    let rotated = Vec2::new(q.x * c - q.y * s, q.x * s + q.y * c);
    rect(rotated, Vec2::ZERO, half)
}

/// Distance to a segment from `a` to `b` thickened by `radius`.
pub fn capsule(p: Vec2, a: Vec2, b: Vec2, radius: f32) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let h = (pa.dot(ba) / ba.dot(ba)).clamp(0.0, 1.0);
    (pa - ba * h).length() - radius
}

/// Superquadric squircle. An exponent near 2 approximates a circle; larger
/// exponents square the corners off. Exponents <= 0 are undefined and the
/// caller's problem.
pub fn squircle(p: Vec2, center: Vec2, radius: f32, exponent: f32) -> f32 {
    let d = ((p - center) / radius).abs();
    let val = (d.x.powf(exponent) + d.y.powf(exponent)).powf(1.0 / exponent) - 1.0;
    val * radius * 0.5
}

/// Elongation operator: stretches the sample space of a primitive by `h`
/// along each axis. Returns the clamped sample point and the interior
/// correction to add to the primitive's distance.
pub fn elongate(p: Vec2, h: Vec2) -> (Vec2, f32) {
    let q = p.abs() - h;
    (q.max(Vec2::ZERO), q.max_element().min(0.0))
}

/// Squircle stretched along its axes, the gooey hull shape.
pub fn elongated_squircle(
    p: Vec2,
    center: Vec2,
    radius: f32,
    exponent: f32,
    stretch: Vec2,
) -> f32 {
    let (q, interior) = elongate(p - center, stretch);
    interior + squircle(q, Vec2::ZERO, radius, exponent)
}

/// Distance from a 3-D point to a sphere.
pub fn sphere(p: Vec3, center: Vec3, radius: f32) -> f32 {
    (p - center).length() - radius
}
