//! Scene composition: an ordered shape list folded under one operator.

use glam::Vec2;

use crate::field::ops::Operator;
use crate::field::primitives;

/// Distance reported by an empty scene. Far enough outside that every
/// downstream fill style renders pure background.
pub const EMPTY_DISTANCE: f32 = 1e6;

/// Primitive variants a study composes into a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
    },
    Rect {
        center: Vec2,
        half: Vec2,
    },
    Diamond {
        center: Vec2,
        half: Vec2,
    },
    Capsule {
        a: Vec2,
        b: Vec2,
        radius: f32,
    },
    /// Superquadric squircle, optionally elongated. A zero `stretch` is the
    /// plain shape.
    Squircle {
        center: Vec2,
        radius: f32,
        exponent: f32,
        stretch: Vec2,
    },
}

impl Shape {
    /// Signed distance from `p` to this shape.
    pub fn distance(&self, p: Vec2) -> f32 {
        match *self {
            Shape::Circle { center, radius } => primitives::circle(p, center, radius),
            Shape::Rect { center, half } => primitives::rect(p, center, half),
            Shape::Diamond { center, half } => primitives::diamond(p, center, half),
            Shape::Capsule { a, b, radius } => primitives::capsule(p, a, b, radius),
            Shape::Squircle {
                center,
                radius,
                exponent,
                stretch,
            } => primitives::elongated_squircle(p, center, radius, exponent, stretch),
        }
    }
}

/// Shapes folded pairwise under one operator: `op(op(d0, d1), d2)` and so
/// on, in push order. Scenes are rebuilt from animated parameters every
/// frame; nothing persists between frames.
#[derive(Debug, Clone)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub operator: Operator,
}

impl Scene {
    pub fn new(operator: Operator) -> Self {
        Self {
            shapes: Vec::new(),
            operator,
        }
    }

    pub fn with_shapes(operator: Operator, shapes: Vec<Shape>) -> Self {
        Self { shapes, operator }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Signed distance from `p` to the composed scene.
    pub fn distance(&self, p: Vec2) -> f32 {
        let mut d = match self.shapes.first() {
            Some(shape) => shape.distance(p),
            None => return EMPTY_DISTANCE,
        };
        for shape in &self.shapes[1..] {
            d = self.operator.apply(d, shape.distance(p));
        }
        d
    }
}
