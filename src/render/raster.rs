//! CPU rasterization of the 2-D studies.
//!
//! A study exposes one shading function over world coordinates; rows of the
//! RGBA output fill in parallel, one shading call per pixel center, and the
//! result is composited over the page color.

use glam::Vec2;
use rayon::prelude::*;

/// Pixel-to-world mapping for one render target.
///
/// `world_scale` is the span of the world window: uv maps to
/// `(uv - 0.5) * world_scale`, y up. Studies that display anisotropically
/// pass the exact scale their view defines.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub world_scale: Vec2,
}

impl Viewport {
    pub fn new(width: usize, height: usize, world_scale: Vec2) -> Self {
        Self {
            width,
            height,
            world_scale,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// World position of a pixel center.
    pub fn world(&self, px: usize, py: usize) -> Vec2 {
        let u = (px as f32 + 0.5) / self.width as f32 - 0.5;
        let v = 0.5 - (py as f32 + 0.5) / self.height as f32;
        Vec2::new(u * self.world_scale.x, v * self.world_scale.y)
    }

    /// World-space footprint of one pixel: the screen-space derivative of a
    /// well-behaved distance field (gradient magnitude near 1), wide enough
    /// for one-pixel anti-aliasing.
    pub fn pixel_footprint(&self) -> f32 {
        self.world_scale.y / self.height as f32
    }
}

/// Fill an RGBA buffer by evaluating `shade` at every pixel center.
/// `shade` returns straight-alpha linear RGB; output is composited over
/// `page` and written as opaque 8-bit color.
pub fn fill<F>(vp: Viewport, page: [f32; 3], shade: F) -> Vec<u8>
where
    F: Fn(Vec2) -> ([f32; 3], f32) + Sync,
{
    let mut pixels = vec![0u8; vp.width * vp.height * 4];
    let row_size = vp.width * 4;

    pixels
        .par_chunks_exact_mut(row_size)
        .enumerate()
        .for_each(|(py, row)| {
            for px in 0..vp.width {
                let (rgb, alpha) = shade(vp.world(px, py));
                let a = alpha.clamp(0.0, 1.0);
                let idx = px * 4;
                for c in 0..3 {
                    let v = (rgb[c] * a + page[c] * (1.0 - a)).clamp(0.0, 1.0);
                    row[idx + c] = (v * 255.0) as u8;
                }
                row[idx + 3] = 255;
            }
        });

    pixels
}

/// Hermite step between two edges, clamped.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Component-wise linear blend of two colors.
pub fn mix3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Darkening factor for the distance-grid isolines: 0 on a line (including
/// the zero level set), 1 between lines, stepped across `band` so lines
/// stay one pixel wide at any zoom.
pub fn isoline_factor(dist: f32, spacing: f32, thickness: f32, band: f32) -> f32 {
    let cell = (dist / spacing + 0.5).rem_euclid(1.0);
    let line_dist = (cell - 0.5).abs() * spacing;
    smoothstep(thickness - band, thickness + band, line_dist)
}

/// Time-pulsed emphasis hugging the zero level set.
pub fn glow_factor(dist: f32, t: f32) -> f32 {
    1.0 + 0.3 * (t * 3.0).sin() * (-dist.abs() * 1.5).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_mapping_is_centered_and_y_up() {
        let vp = Viewport::new(64, 64, Vec2::splat(4.0));
        let center = vp.world(31, 31);
        assert!(center.x.abs() < 0.1);
        assert!(center.y.abs() < 0.1);

        let top_left = vp.world(0, 0);
        assert!(top_left.x < -1.9);
        assert!(top_left.y > 1.9);
    }

    #[test]
    fn pixel_footprint_tracks_resolution() {
        let vp = Viewport::new(100, 100, Vec2::splat(4.0));
        assert!((vp.pixel_footprint() - 0.04).abs() < 1e-6);
        let vp2 = Viewport::new(100, 200, Vec2::splat(4.0));
        assert!((vp2.pixel_footprint() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn fill_produces_a_full_opaque_buffer() {
        let vp = Viewport::new(64, 48, Vec2::splat(2.0));
        let pixels = fill(vp, [0.0, 0.0, 0.0], |_| ([1.0, 0.5, 0.0], 1.0));
        assert_eq!(pixels.len(), 64 * 48 * 4);
        assert!(pixels.chunks(4).all(|px| px[3] == 255));
        assert!(pixels.chunks(4).all(|px| px[0] == 255 && px[2] == 0));
    }

    #[test]
    fn zero_alpha_shows_the_page_color() {
        let vp = Viewport::new(8, 8, Vec2::splat(2.0));
        let pixels = fill(vp, [0.2, 0.4, 0.6], |_| ([1.0, 1.0, 1.0], 0.0));
        let px = &pixels[0..4];
        assert_eq!(px[0], 51);
        assert_eq!(px[1], 102);
        assert_eq!(px[2], 153);
    }

    #[test]
    fn fill_rasterizes_a_circle_mask() {
        let vp = Viewport::new(64, 64, Vec2::splat(4.0));
        let fp = vp.pixel_footprint();
        let pixels = fill(vp, [1.0, 1.0, 1.0], |p| {
            let d = p.length() - 1.0;
            ([0.0, 0.0, 0.0], 1.0 - smoothstep(0.0, fp, d))
        });
        let sample = |px: usize, py: usize| pixels[(py * 64 + px) * 4];
        // Center inside: black. Corner outside: white.
        assert!(sample(32, 32) < 10);
        assert!(sample(1, 1) > 245);
    }

    #[test]
    fn smoothstep_clamps_and_interpolates() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn isolines_land_on_spacing_multiples() {
        let (spacing, thickness, band) = (0.2, 0.02, 0.005);
        // On a line, both at zero and one spacing in: fully darkened
        assert_eq!(isoline_factor(0.0, spacing, thickness, band), 0.0);
        assert_eq!(isoline_factor(0.2, spacing, thickness, band), 0.0);
        assert_eq!(isoline_factor(-0.4, spacing, thickness, band), 0.0);
        // Halfway between lines: untouched
        assert_eq!(isoline_factor(0.1, spacing, thickness, band), 1.0);
        // Negative distances land on lines the same way
        assert_eq!(isoline_factor(-0.1, spacing, thickness, band), 1.0);
    }

    #[test]
    fn glow_peaks_on_the_boundary() {
        let t = std::f32::consts::FRAC_PI_2 / 3.0; // sin(3t) = 1
        let on = glow_factor(0.0, t);
        let off = glow_factor(2.0, t);
        assert!((on - 1.3).abs() < 1e-3);
        assert!(off < on);
        assert!(off > 0.99);
    }

    #[test]
    fn mix3_blends_endpoints() {
        let a = [1.0, 0.0, 0.5];
        let b = [0.0, 1.0, 0.5];
        assert_eq!(mix3(a, b, 0.0), a);
        assert_eq!(mix3(a, b, 1.0), b);
        let mid = mix3(a, b, 0.5);
        assert!((mid[0] - 0.5).abs() < 1e-6);
    }
}
