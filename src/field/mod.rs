//! Distance-field evaluation: primitives, combination operators, scenes.

pub mod ops;
pub mod primitives;
pub mod scene;

pub use ops::Operator;
pub use scene::{Scene, Shape, EMPTY_DISTANCE};
