//! Raymarched blob field, the animated page background.
//!
//! Sixteen spheres drift on hashed phase offsets and melt together under a
//! smooth union. Rays march front to back through an orthographic view,
//! normals come from a four-tap tetrahedral estimate, and a cosine palette
//! lit by a fixed key light colors the hit. Depth drives both fog and the
//! fade to the page color.

use glam::{Vec2, Vec3};
use rayon::prelude::*;

use crate::field::{ops, primitives};

pub const SPHERES: usize = 16;
pub const MAX_STEPS: usize = 64;
const MERGE_K: f32 = 0.4;
const MAX_DEPTH: f32 = 6.0;
const HIT_EPSILON: f32 = 1e-6;

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Distance from `p` to the drifting blob cluster at time `t`.
pub fn field(p: Vec3, t: f32) -> f32 {
    let mut d = 2.0;
    for i in 0..SPHERES {
        let fi = i as f32;
        // Hashed per-sphere speed in [-1, 1] and radius in [0.5, 1]
        let speed = (fract(fi * 412.531 + 0.513) - 0.5) * 2.0;
        let radius = 0.5 + 0.5 * fract(fi * 412.531 + 0.5124);
        let phase = t * speed;
        let drift = Vec3::new(
            (phase + fi * 52.5126).sin() * 2.0,
            (phase + fi * 64.62744).sin() * 2.0,
            (phase + fi * 632.25).sin() * 0.8,
        );
        d = ops::smooth_union(primitives::sphere(p + drift, Vec3::ZERO, radius), d, MERGE_K);
    }
    d
}

/// Four-tap tetrahedral normal estimate.
fn normal(p: Vec3, t: f32) -> Vec3 {
    const H: f32 = 1e-5;
    let k_xyy = Vec3::new(1.0, -1.0, -1.0);
    let k_yyx = Vec3::new(-1.0, -1.0, 1.0);
    let k_yxy = Vec3::new(-1.0, 1.0, -1.0);
    let k_xxx = Vec3::new(1.0, 1.0, 1.0);
    (k_xyy * field(p + k_xyy * H, t)
        + k_yyx * field(p + k_yyx * H, t)
        + k_yxy * field(p + k_yxy * H, t)
        + k_xxx * field(p + k_xxx * H, t))
    .normalize_or_zero()
}

fn shade(uv: Vec2, depth: f32, p: Vec3, t: f32) -> (Vec3, f32) {
    let n = normal(p, t);
    let b = n.dot(Vec3::splat(0.577)).max(0.0);

    let phase =
        Vec3::new(uv.x, uv.y, uv.x) * 2.0 + Vec3::new(0.0, 2.0, 4.0) + Vec3::splat(b + t * 3.0);
    let palette = Vec3::new(phase.x.cos(), phase.y.cos(), phase.z.cos()) * 0.5 + Vec3::splat(0.5);
    let col = palette * (0.85 + b * 0.35) * (-depth * 0.15).exp();

    let alpha = (1.0 - (depth - 0.5) / 2.0).clamp(0.0, 1.0);
    (col, alpha)
}

/// Render the blob field at time `t`, composited over the page color.
pub fn render(width: usize, height: usize, t: f32, page: [f32; 3]) -> Vec<u8> {
    let aspect = width as f32 / height as f32;
    let mut pixels = vec![0u8; width * height * 4];
    let row_size = width * 4;

    pixels
        .par_chunks_exact_mut(row_size)
        .enumerate()
        .for_each(|(py, row)| {
            for px in 0..width {
                let uv = Vec2::new(
                    (px as f32 + 0.5) / width as f32,
                    1.0 - (py as f32 + 0.5) / height as f32,
                );
                let origin = Vec3::new((uv.x - 0.5) * aspect * 6.0, (uv.y - 0.5) * 6.0, 3.0);
                let dir = Vec3::new(0.0, 0.0, -1.0);

                let mut depth = 0.0f32;
                let mut p = origin;
                for _ in 0..MAX_STEPS {
                    p = origin + dir * depth;
                    let dist = field(p, t);
                    depth += dist;
                    if dist < HIT_EPSILON || depth > MAX_DEPTH {
                        break;
                    }
                }
                depth = depth.min(MAX_DEPTH);

                let (col, alpha) = shade(uv, depth, p, t);
                let idx = px * 4;
                row[idx] =
                    ((col.x * alpha + page[0] * (1.0 - alpha)).clamp(0.0, 1.0) * 255.0) as u8;
                row[idx + 1] =
                    ((col.y * alpha + page[1] * (1.0 - alpha)).clamp(0.0, 1.0) * 255.0) as u8;
                row[idx + 2] =
                    ((col.z * alpha + page[2] * (1.0 - alpha)).clamp(0.0, 1.0) * 255.0) as u8;
                row[idx + 3] = 255;
            }
        });

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_has_interior_at_the_origin_at_time_zero() {
        // Sphere 0 sits exactly at the origin when t = 0
        assert!(field(Vec3::ZERO, 0.0) < 0.0);
    }

    #[test]
    fn field_is_positive_far_outside() {
        // The running minimum starts at 2, so nothing far away dips below it
        let d = field(Vec3::new(50.0, 0.0, 0.0), 1.7);
        assert!(d > 0.0);
    }

    #[test]
    fn field_stays_finite_over_time() {
        for i in 0..20 {
            let t = i as f32 * 0.37;
            let d = field(Vec3::new(1.0, -2.0, 0.5), t);
            assert!(d.is_finite());
            assert!(d <= 2.0 + 1e-3);
        }
    }

    #[test]
    fn render_fills_an_opaque_buffer() {
        let pixels = render(64, 48, 0.0, [1.0, 1.0, 1.0]);
        assert_eq!(pixels.len(), 64 * 48 * 4);
        assert!(pixels.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn render_shows_blobs_against_the_page() {
        let pixels = render(64, 48, 0.0, [1.0, 1.0, 1.0]);
        let first = [pixels[0], pixels[1], pixels[2]];
        let varied = pixels
            .chunks(4)
            .any(|px| [px[0], px[1], px[2]] != first);
        assert!(varied);
    }
}
