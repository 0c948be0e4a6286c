//! Two hard-cornered squircles under a wide smooth union: the gap between
//! them fills in even though the shapes never touch.

use glam::Vec2;

use crate::field::{Operator, Scene, Shape};
use crate::render::raster::{self, Viewport};
use crate::studies::FrameInput;

const RADIUS: f32 = 0.2;
const ROUNDNESS: f32 = 4.0;
const MERGE_K: f32 = 0.5;
const LEFT: Vec2 = Vec2::new(-0.3, 0.0);
const RIGHT: Vec2 = Vec2::new(0.5, 0.0);

pub struct SquirclesStudy;

impl SquirclesStudy {
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self, _input: &FrameInput) {}

    pub fn scene(&self) -> Scene {
        Scene::with_shapes(
            Operator::SmoothUnion(MERGE_K),
            vec![
                Shape::Squircle {
                    center: LEFT,
                    radius: RADIUS,
                    exponent: ROUNDNESS,
                    stretch: Vec2::ZERO,
                },
                Shape::Squircle {
                    center: RIGHT,
                    radius: RADIUS,
                    exponent: ROUNDNESS,
                    stretch: Vec2::ZERO,
                },
            ],
        )
    }

    pub fn render(&self, width: usize, height: usize) -> Vec<u8> {
        let vp = Viewport::new(width, height, Vec2::splat(2.0));
        let scene = self.scene();
        let fp = vp.pixel_footprint();
        raster::fill(vp, [1.0, 1.0, 1.0], move |p| {
            let d = scene.distance(p);
            let alpha = 1.0 - raster::smoothstep(0.0, fp, d);
            ([0.0, 0.0, 0.0], alpha)
        })
    }

    pub fn stats(&self) -> Vec<String> {
        vec![
            format!(
                "Centers: ({:.1}, {:.1}) and ({:.1}, {:.1})",
                LEFT.x, LEFT.y, RIGHT.x, RIGHT.y
            ),
            format!("Exponent: {:.1}", ROUNDNESS),
            format!("Merge k: {:.1}", MERGE_K),
        ]
    }
}
