//! Gooey header: a stretched squircle hull with a pointer-chasing bubble
//! that melts into it.

use glam::Vec2;

use crate::field::{Operator, Scene, Shape};
use crate::render::raster::{self, Viewport};
use crate::studies::FrameInput;

const RADIUS: f32 = 0.1;
const ROUNDNESS: f32 = 2.5;
const STRETCH_X: f32 = 0.6;
const MERGE_K: f32 = 0.1;

pub struct GooeyStudy {
    /// Pointer in view coordinates: NDC with aspect-corrected x, so the
    /// bubble tracks the cursor without horizontal squash.
    bubble: Vec2,
    aspect: f32,
}

impl GooeyStudy {
    pub fn new() -> Self {
        Self {
            bubble: Vec2::ZERO,
            aspect: 1.5,
        }
    }

    pub fn update(&mut self, input: &FrameInput) {
        self.aspect = input.aspect;
        if let Some(ndc) = input.pointer_ndc {
            self.bubble = Vec2::new(ndc.x * input.aspect, ndc.y);
        }
    }

    pub fn scene(&self) -> Scene {
        Scene::with_shapes(
            Operator::SmoothUnion(MERGE_K),
            vec![
                Shape::Squircle {
                    center: Vec2::ZERO,
                    radius: RADIUS,
                    exponent: ROUNDNESS,
                    stretch: Vec2::new(STRETCH_X, 0.0),
                },
                Shape::Circle {
                    center: self.bubble,
                    radius: RADIUS,
                },
            ],
        )
    }

    pub fn render(&self, width: usize, height: usize) -> Vec<u8> {
        let vp = Viewport::new(width, height, Vec2::new(2.0 * self.aspect, 2.0));
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
            format!("Bubble: ({:.2}, {:.2})", self.bubble.x, self.bubble.y),
            format!("Hull stretch: {:.1}", STRETCH_X),
            format!("Merge k: {:.2}", MERGE_K),
        ]
    }
}
