//! Morph header: two circles melting together on hover, shaded with a
//! distance-weighted color blend, distance-grid isolines, and a glow that
//! pulses on the boundary.

use glam::Vec2;

use crate::anim::{Approach, ColorDrift};
use crate::field::{Operator, Scene, Shape};
use crate::render::raster::{self, Viewport};
use crate::studies::FrameInput;

const RADIUS: f32 = 0.8;
const MOVE_RATE: f32 = 0.05;
const COLOR_RATE: f32 = 0.03;
const LINE_THICKNESS: f32 = 0.02;
const INTERIOR_BG: [f32; 3] = [0.95, 0.95, 0.98];

pub struct MorphStudy {
    circle1_x: Approach,
    circle2_x: Approach,
    smoothness: Approach,
    line_distance: Approach,
    color1: ColorDrift,
    color2: ColorDrift,
    t: f32,
}

impl MorphStudy {
    pub fn new() -> Self {
        Self {
            circle1_x: Approach::new(-1.5, MOVE_RATE),
            circle2_x: Approach::new(1.5, MOVE_RATE),
            smoothness: Approach::new(0.1, MOVE_RATE),
            line_distance: Approach::new(0.2, MOVE_RATE),
            // Start hot and drift toward the resting palette
            color1: ColorDrift::new([1.0, 0.2, 0.3], COLOR_RATE),
            color2: ColorDrift::new([0.2, 0.6, 1.0], COLOR_RATE),
            t: 0.0,
        }
    }

    pub fn update(&mut self, input: &FrameInput) {
        self.t = input.t;

        if input.hovered {
            self.circle1_x.set_target(-0.5);
            self.circle2_x.set_target(0.5);
            self.smoothness.set_target(0.6);
            self.line_distance.set_target(0.1);
            self.color1.set_target([1.0, 0.1, 0.5]);
            self.color2.set_target([0.1, 0.8, 1.0]);
        } else {
            self.circle1_x.set_target(-1.5);
            self.circle2_x.set_target(1.5);
            self.smoothness.set_target(0.1);
            self.line_distance.set_target(0.2);
            self.color1.set_target([0.8, 0.3, 0.4]);
            self.color2.set_target([0.3, 0.5, 0.8]);
        }

        self.circle1_x.tick();
        self.circle2_x.tick();
        self.smoothness.tick();
        self.line_distance.tick();
        self.color1.tick();
        self.color2.tick();
    }

    fn centers(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.circle1_x.value, 0.0),
            Vec2::new(self.circle2_x.value, 0.0),
        )
    }

    pub fn scene(&self) -> Scene {
        let (c1, c2) = self.centers();
        Scene::with_shapes(
            Operator::SmoothUnion(self.smoothness.value),
            vec![
                Shape::Circle {
                    center: c1,
                    radius: RADIUS,
                },
                Shape::Circle {
                    center: c2,
                    radius: RADIUS,
                },
            ],
        )
    }

    pub fn render(&self, width: usize, height: usize, page: [f32; 3]) -> Vec<u8> {
        let vp = Viewport::new(width, height, Vec2::splat(4.0));
        let scene = self.scene();
        let (c1, c2) = self.centers();
        let (color1, color2) = (self.color1.value, self.color2.value);
        let spacing = self.line_distance.value;
        let t = self.t;
        let fp = vp.pixel_footprint();
        // Half-pixel band: lines and the outer edge stay crisp
        let band = fp * 0.5;

        raster::fill(vp, page, move |p| {
            let dist = scene.distance(p);

            // Weight each circle's color by closeness to the other's center
            let d1 = (p - c1).length();
            let d2 = (p - c2).length();
            let total = d1 + d2;
            let blended = if total > 0.0 {
                raster::mix3(color2, color1, d2 / total)
            } else {
                raster::mix3(color1, color2, 0.5)
            };

            let base = if dist < 0.0 { blended } else { INTERIOR_BG };
            let lines = raster::isoline_factor(dist, spacing, LINE_THICKNESS, band);
            let glow = raster::glow_factor(dist, t);
            let alpha = 1.0 - raster::smoothstep(-band, band, dist);

            (
                [base[0] * lines * glow, base[1] * lines * glow, base[2] * lines * glow],
                alpha,
            )
        })
    }

    pub fn stats(&self) -> Vec<String> {
        vec![
            format!("Circle 1 x: {:.2}", self.circle1_x.value),
            format!("Circle 2 x: {:.2}", self.circle2_x.value),
            format!("Smoothness: {:.2}", self.smoothness.value),
            format!("Line spacing: {:.2}", self.line_distance.value),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hovered(t: f32) -> FrameInput {
        let mut input = FrameInput::idle(t);
        input.hovered = true;
        input
    }

    #[test]
    fn circles_pull_together_on_hover() {
        let mut study = MorphStudy::new();
        for i in 0..200 {
            study.update(&hovered(i as f32 / 60.0));
        }
        assert!((study.circle1_x.value + 0.5).abs() < 0.01);
        assert!((study.circle2_x.value - 0.5).abs() < 0.01);
        assert!((study.smoothness.value - 0.6).abs() < 0.01);
    }

    #[test]
    fn circles_relax_apart_after_hover_ends() {
        let mut study = MorphStudy::new();
        for i in 0..100 {
            study.update(&hovered(i as f32 / 60.0));
        }
        for i in 0..300 {
            study.update(&FrameInput::idle(2.0 + i as f32 / 60.0));
        }
        assert!((study.circle1_x.value + 1.5).abs() < 0.01);
        assert!((study.line_distance.value - 0.2).abs() < 0.01);
    }

    #[test]
    fn palette_drifts_toward_the_resting_colors() {
        let mut study = MorphStudy::new();
        for i in 0..400 {
            study.update(&FrameInput::idle(i as f32 / 60.0));
        }
        assert!((study.color1.value[0] - 0.8).abs() < 0.01);
        assert!((study.color2.value[2] - 0.8).abs() < 0.01);
    }

    #[test]
    fn hovered_scene_fuses_at_the_midpoint() {
        let mut study = MorphStudy::new();
        for i in 0..400 {
            study.update(&hovered(i as f32 / 60.0));
        }
        // Circles at -0.5 and 0.5 with radius 0.8 overlap the origin
        assert!(study.scene().distance(Vec2::ZERO) < 0.0);
    }

    #[test]
    fn resting_scene_is_open_at_the_midpoint() {
        let study = MorphStudy::new();
        assert!(study.scene().distance(Vec2::ZERO) > 0.0);
    }

    #[test]
    fn render_colors_the_interiors() {
        let mut study = MorphStudy::new();
        study.update(&FrameInput::idle(0.0));
        let pixels = study.render(80, 80, [1.0, 1.0, 1.0]);
        assert_eq!(pixels.len(), 80 * 80 * 4);

        // World (-1.5, 0) is inside circle 1: warm color, red over blue
        let px = ((-1.5 / 4.0 + 0.5) * 80.0) as usize;
        let py = 40;
        let idx = (py * 80 + px) * 4;
        assert!(pixels[idx] > pixels[idx + 2]);
    }
}
