//! Flat union: two circles under a smooth union, filled flat blue with an
//! interior falloff and a hard edge band instead of grid shading. A thin
//! line bridges the circle inner edges. World units here are big: the
//! window spans 800 by 600.

use glam::Vec2;

use crate::anim::Approach;
use crate::field::{ops, primitives};
use crate::render::raster::{self, Viewport};
use crate::studies::FrameInput;

const RADIUS: f32 = 40.0;
const RATE: f32 = 0.15;
const FILL: [f32; 3] = [59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0];
const LINE: [f32; 3] = [1.0, 100.0 / 255.0, 100.0 / 255.0];
const LINE_ALPHA: f32 = 180.0 / 255.0;

pub struct FlatStudy {
    left_x: Approach,
    right_x: Approach,
    smoothness: Approach,
}

impl FlatStudy {
    pub fn new() -> Self {
        Self {
            left_x: Approach::new(-60.0, RATE),
            right_x: Approach::new(60.0, RATE),
            smoothness: Approach::new(10.0, RATE),
        }
    }

    pub fn update(&mut self, input: &FrameInput) {
        if input.hovered {
            self.left_x.set_target(-30.0);
            self.right_x.set_target(30.0);
            self.smoothness.set_target(30.0);
        } else {
            self.left_x.set_target(-60.0);
            self.right_x.set_target(60.0);
            self.smoothness.set_target(10.0);
        }
        self.left_x.tick();
        self.right_x.tick();
        self.smoothness.tick();
    }

    fn distance(&self, p: Vec2) -> f32 {
        ops::smooth_union(
            primitives::circle(p, Vec2::new(self.left_x.value, 0.0), RADIUS),
            primitives::circle(p, Vec2::new(self.right_x.value, 0.0), RADIUS),
            self.smoothness.value,
        )
    }

    pub fn render(&self, width: usize, height: usize, page: [f32; 3]) -> Vec<u8> {
        let vp = Viewport::new(width, height, Vec2::new(800.0, 600.0));
        let (lx, rx) = (self.left_x.value, self.right_x.value);
        let fp = vp.pixel_footprint();

        raster::fill(vp, page, move |p| {
            // A one-pixel line between the circle inner edges
            if p.y.abs() < fp && p.x > lx + RADIUS && p.x < rx - RADIUS {
                return (LINE, LINE_ALPHA);
            }

            let d = self.distance(p);
            if d < 0.0 {
                let intensity = (1.0 - d.abs() / 20.0).max(0.6);
                (
                    [FILL[0] * intensity, FILL[1] * intensity, FILL[2] * intensity],
                    1.0,
                )
            } else if d < 3.0 {
                (FILL, 1.0 - d / 3.0)
            } else {
                (FILL, 0.0)
            }
        })
    }

    pub fn stats(&self) -> Vec<String> {
        let span = (self.right_x.value - self.left_x.value).abs();
        vec![
            format!("Left x: {:.1}", self.left_x.value),
            format!("Right x: {:.1}", self.right_x.value),
            format!("Distance: {:.1}", span),
            format!("Overlap: {:.1}", (2.0 * RADIUS - span).max(0.0)),
            format!("Smoothness: {:.1}", self.smoothness.value),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_pulls_the_circles_together() {
        let mut study = FlatStudy::new();
        let mut input = FrameInput::idle(0.0);
        input.hovered = true;
        for _ in 0..200 {
            study.update(&input);
        }
        assert!((study.left_x.value + 30.0).abs() < 0.1);
        assert!((study.right_x.value - 30.0).abs() < 0.1);
        assert!((study.smoothness.value - 30.0).abs() < 0.1);
    }

    #[test]
    fn overlap_appears_once_the_gap_closes() {
        let mut study = FlatStudy::new();
        let mut input = FrameInput::idle(0.0);
        input.hovered = true;
        for _ in 0..200 {
            study.update(&input);
        }
        // Centers 60 apart with radius 40: 20 units of overlap
        let span = study.right_x.value - study.left_x.value;
        assert!(((2.0 * RADIUS - span) - 20.0).abs() < 0.2);
    }

    #[test]
    fn interior_falloff_bottoms_out() {
        let study = FlatStudy::new();
        let d = study.distance(Vec2::new(-60.0, 0.0));
        assert!((d + RADIUS).abs() < 0.1);
        // Deep interior clamps to the 0.6 intensity floor
        let intensity = (1.0 - d.abs() / 20.0).max(0.6);
        assert_eq!(intensity, 0.6);
    }

    #[test]
    fn render_draws_fill_line_and_page() {
        let study = FlatStudy::new();
        let page = [1.0, 1.0, 1.0];
        let pixels = study.render(200, 150, page);
        assert_eq!(pixels.len(), 200 * 150 * 4);
        let sample = |px: usize, py: usize| {
            let idx = (py * 200 + px) * 4;
            [pixels[idx], pixels[idx + 1], pixels[idx + 2]]
        };

        // Left circle center, world (-60, 0): dimmed blue fill
        let fill = sample(85, 75);
        assert!(fill[2] > fill[0]);
        // Canvas center, world (0, 0): the red line between the circles
        let line = sample(100, 74);
        assert!(line[0] > line[2]);
        // Far corner: page white
        assert_eq!(sample(2, 2), [255, 255, 255]);
    }
}
