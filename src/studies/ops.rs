//! The operator gallery: round-merge navigation with overlay buttons,
//! time-driven interpolation, and circle-to-diamond morphing. All three
//! share the 6-unit world window and the distance-grid shading.

use glam::Vec2;

use crate::anim::Approach;
use crate::field::{ops, primitives, Operator, Scene, Shape};
use crate::render::raster::{self, Viewport};
use crate::studies::FrameInput;

const RADIUS: f32 = 0.5;
const MOVE_RATE: f32 = 0.15;
const HOVER_RATE: f32 = 0.2;
const CLICK_RATE: f32 = 0.3;
const LINE_SPACING: f32 = 0.12;
const LINE_THICKNESS: f32 = 0.012;
const CANVAS_BG: [f32; 3] = [0.98, 0.98, 1.0];
const WORLD: f32 = 6.0;

/// Color pairs for the gallery canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Blue,
    Green,
    Purple,
    Coral,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Blue,
        ColorScheme::Green,
        ColorScheme::Purple,
        ColorScheme::Coral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::Blue => "Blue",
            ColorScheme::Green => "Green",
            ColorScheme::Purple => "Purple",
            ColorScheme::Coral => "Coral",
        }
    }

    pub fn colors(self) -> ([f32; 3], [f32; 3]) {
        match self {
            ColorScheme::Blue => ([0.1, 0.5, 1.0], [0.0, 0.8, 1.0]),
            ColorScheme::Green => ([0.2, 0.8, 0.3], [0.6, 1.0, 0.2]),
            ColorScheme::Purple => ([0.6, 0.2, 1.0], [1.0, 0.3, 0.8]),
            ColorScheme::Coral => ([0.3, 0.7, 1.0], [1.0, 0.4, 0.3]),
        }
    }
}

/// Distance-weighted blend between the two circle colors. The 0.001 bias
/// keeps the division finite when both distances vanish.
fn circle_blend(p: Vec2, c1: Vec2, c2: Vec2, colors: ([f32; 3], [f32; 3])) -> [f32; 3] {
    let d1 = (p - c1).length();
    let d2 = (p - c2).length();
    let weight = d2 / (d1 + d2 + 0.001);
    raster::mix3(colors.0, colors.1, weight)
}

fn grid_shade(base: [f32; 3], dist: f32, band: f32) -> [f32; 3] {
    let color = if dist < 0.0 { base } else { CANVAS_BG };
    let lines = raster::isoline_factor(dist, LINE_SPACING, LINE_THICKNESS, band);
    [color[0] * lines, color[1] * lines, color[2] * lines]
}

/// Two circles joined by a capsule bridge under a round merge. Hover tears
/// them apart and the bridge thins away; two overlay buttons ride the
/// circle centers.
pub struct MergeStudy {
    circle1_x: Approach,
    circle2_x: Approach,
    smoothness: Approach,
    bridge_radius: Approach,
    left_hover: Approach,
    right_hover: Approach,
    left_click: Approach,
    right_click: Approach,
    pub scheme: ColorScheme,
}

impl MergeStudy {
    pub fn new() -> Self {
        Self {
            circle1_x: Approach::new(-0.6, MOVE_RATE),
            circle2_x: Approach::new(0.6, MOVE_RATE),
            smoothness: Approach::new(0.6, MOVE_RATE),
            bridge_radius: Approach::new(0.4, MOVE_RATE),
            left_hover: Approach::new(0.0, HOVER_RATE),
            right_hover: Approach::new(0.0, HOVER_RATE),
            left_click: Approach::new(0.0, CLICK_RATE),
            right_click: Approach::new(0.0, CLICK_RATE),
            scheme: ColorScheme::Green,
        }
    }

    pub fn update(&mut self, input: &FrameInput) {
        if input.hovered {
            self.circle1_x.set_target(-1.8);
            self.circle2_x.set_target(1.8);
            self.smoothness.set_target(0.3);
        } else {
            self.circle1_x.set_target(-0.6);
            self.circle2_x.set_target(0.6);
            self.smoothness.set_target(0.6);
        }
        self.circle1_x.tick();
        self.circle2_x.tick();
        self.smoothness.tick();

        // The bridge thins to nothing as the circles separate
        let span = (self.circle2_x.value - self.circle1_x.value).abs();
        self.bridge_radius.set_target(((3.6 - span) / 3.6).max(0.0) * 0.4);
        self.bridge_radius.tick();

        // Button feedback follows the pointer in the world frame
        let pointer = input
            .pointer_ndc
            .map(|ndc| Vec2::new(ndc.x * 3.0, ndc.y * 2.0));
        let on_left = pointer
            .map(|p| (p - self.left_center()).length() < 0.8)
            .unwrap_or(false);
        let on_right = pointer
            .map(|p| (p - self.right_center()).length() < 0.8)
            .unwrap_or(false);

        self.left_hover.set_target(if on_left { 1.0 } else { 0.0 });
        self.right_hover.set_target(if on_right { 1.0 } else { 0.0 });
        self.left_hover.tick();
        self.right_hover.tick();

        // A click flashes to full and decays back toward zero
        if input.clicked && on_left {
            self.left_click.snap(1.0);
        }
        if input.clicked && on_right {
            self.right_click.snap(1.0);
        }
        self.left_click.set_target(0.0);
        self.right_click.set_target(0.0);
        self.left_click.tick();
        self.right_click.tick();
    }

    fn left_center(&self) -> Vec2 {
        Vec2::new(self.circle1_x.value, 0.0)
    }

    fn right_center(&self) -> Vec2 {
        Vec2::new(self.circle2_x.value, 0.0)
    }

    fn distance(&self, p: Vec2) -> f32 {
        let (c1, c2) = (self.left_center(), self.right_center());
        let k = self.smoothness.value;
        let pair = ops::round_merge(
            primitives::circle(p, c1, RADIUS),
            primitives::circle(p, c2, RADIUS),
            k,
        );
        let bridge = primitives::capsule(p, c1, c2, self.bridge_radius.value);
        ops::round_merge(pair, bridge, k * 0.5)
    }

    pub fn render(&self, width: usize, height: usize) -> Vec<u8> {
        let vp = Viewport::new(width, height, Vec2::splat(WORLD));
        let (c1, c2) = (self.left_center(), self.right_center());
        let colors = self.scheme.colors();
        let (lh, rh) = (self.left_hover.value, self.right_hover.value);
        let (lc, rc) = (self.left_click.value, self.right_click.value);
        let band = vp.pixel_footprint();

        raster::fill(vp, CANVAS_BG, move |p| {
            let dist = self.distance(p);

            let mut base = circle_blend(p, c1, c2, colors);
            // Button feedback tints the circle that holds the button
            if (p - c1).length() < RADIUS + 0.2 {
                base = raster::mix3(base, [1.0, 1.0, 1.0], lh * 0.3);
                base = raster::mix3(base, [0.8, 1.0, 0.8], lc * 0.5);
            }
            if (p - c2).length() < RADIUS + 0.2 {
                base = raster::mix3(base, [1.0, 1.0, 1.0], rh * 0.3);
                base = raster::mix3(base, [0.8, 1.0, 0.8], rc * 0.5);
            }

            (grid_shade(base, dist, band), 1.0)
        })
    }

    /// Horizontal button anchors as fractions of the canvas width.
    pub fn button_anchors(&self) -> (f32, f32) {
        (
            (self.circle1_x.value + 3.0) / WORLD,
            (self.circle2_x.value + 3.0) / WORLD,
        )
    }

    pub fn left_feedback(&self) -> (f32, f32) {
        (self.left_hover.value, self.left_click.value)
    }

    pub fn right_feedback(&self) -> (f32, f32) {
        (self.right_hover.value, self.right_click.value)
    }

    pub fn stats(&self) -> Vec<String> {
        vec![
            format!("Circle 1 x: {:.2}", self.circle1_x.value),
            format!("Circle 2 x: {:.2}", self.circle2_x.value),
            format!("Smoothness: {:.2}", self.smoothness.value),
            format!("Bridge radius: {:.2}", self.bridge_radius.value),
        ]
    }
}

/// Two circles blended by a time-driven interpolation factor: the field
/// breathes between the two shapes instead of merging them.
pub struct LerpStudy {
    circle1_x: Approach,
    circle2_x: Approach,
    lerp_t: f32,
    pub scheme: ColorScheme,
    t: f32,
}

impl LerpStudy {
    pub fn new() -> Self {
        Self {
            circle1_x: Approach::new(-0.6, MOVE_RATE),
            circle2_x: Approach::new(0.6, MOVE_RATE),
            lerp_t: 0.5,
            scheme: ColorScheme::Purple,
            t: 0.0,
        }
    }

    pub fn update(&mut self, input: &FrameInput) {
        // This canvas runs half a second ahead of the merge canvas
        self.t = input.t + 0.5;

        if input.hovered {
            self.circle1_x.set_target(-1.8);
            self.circle2_x.set_target(1.8);
        } else {
            self.circle1_x.set_target(-0.6);
            self.circle2_x.set_target(0.6);
        }
        self.circle1_x.tick();
        self.circle2_x.tick();

        self.lerp_t = 0.5 + 0.3 * (self.t * 2.0).sin();
    }

    pub fn scene(&self) -> Scene {
        Scene::with_shapes(
            Operator::Interpolate(self.lerp_t),
            vec![
                Shape::Circle {
                    center: Vec2::new(self.circle1_x.value, 0.0),
                    radius: RADIUS,
                },
                Shape::Circle {
                    center: Vec2::new(self.circle2_x.value, 0.0),
                    radius: RADIUS,
                },
            ],
        )
    }

    pub fn render(&self, width: usize, height: usize) -> Vec<u8> {
        let vp = Viewport::new(width, height, Vec2::splat(WORLD));
        let scene = self.scene();
        let c1 = Vec2::new(self.circle1_x.value, 0.0);
        let c2 = Vec2::new(self.circle2_x.value, 0.0);
        let colors = self.scheme.colors();
        let band = vp.pixel_footprint();

        raster::fill(vp, CANVAS_BG, move |p| {
            let dist = scene.distance(p);
            let base = circle_blend(p, c1, c2, colors);
            (grid_shade(base, dist, band), 1.0)
        })
    }

    pub fn stats(&self) -> Vec<String> {
        vec![
            format!("Blend t: {:.2}", self.lerp_t),
            format!("Circle 1 x: {:.2}", self.circle1_x.value),
            format!("Circle 2 x: {:.2}", self.circle2_x.value),
        ]
    }
}

/// A circle interpolating into a diamond while sliding across the canvas.
/// Hover doubles the cycle speed.
pub struct ShapeMorphStudy {
    morph: f32,
    center_x: f32,
    t: f32,
}

impl ShapeMorphStudy {
    pub fn new() -> Self {
        Self {
            morph: 0.0,
            center_x: -1.5,
            t: 0.0,
        }
    }

    pub fn update(&mut self, input: &FrameInput) {
        self.t = input.t + 1.0;
        let speed = if input.hovered { 3.0 } else { 1.5 };
        self.morph = 0.5 + 0.5 * (self.t * speed).sin();
        self.center_x = -1.5 + self.morph * 3.0;
    }

    pub fn scene(&self) -> Scene {
        let center = Vec2::new(self.center_x, 0.0);
        Scene::with_shapes(
            Operator::Interpolate(self.morph),
            vec![
                Shape::Circle {
                    center,
                    radius: 0.8,
                },
                Shape::Diamond {
                    center,
                    half: Vec2::splat(0.8),
                },
            ],
        )
    }

    pub fn render(&self, width: usize, height: usize) -> Vec<u8> {
        let vp = Viewport::new(width, height, Vec2::splat(4.0));
        let scene = self.scene();
        let base = raster::mix3([0.2, 0.9, 0.5], [0.9, 0.3, 0.7], self.morph);
        let band = vp.pixel_footprint();

        raster::fill(vp, CANVAS_BG, move |p| {
            let dist = scene.distance(p);
            (grid_shade(base, dist, band), 1.0)
        })
    }

    pub fn stats(&self) -> Vec<String> {
        vec![
            format!("Morph t: {:.2}", self.morph),
            format!("Center x: {:.2}", self.center_x),
        ]
    }
}
