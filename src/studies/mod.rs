//! The visual studies.
//!
//! Each study owns its animated parameters, consumes one [`FrameInput`] per
//! frame, and rasterizes itself into an RGBA buffer. Studies share nothing
//! with each other; switching away and back resumes where the eased values
//! left off.

pub mod blobs;
pub mod flat;
pub mod gooey;
pub mod morph;
pub mod ops;
pub mod squircles;

use glam::Vec2;

/// Which study the content area is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyKind {
    Gooey,
    Morph,
    Merge,
    Lerp,
    ShapeMorph,
    Squircles,
    Flat,
    Blobs,
}

impl Default for StudyKind {
    fn default() -> Self {
        Self::Morph
    }
}

impl StudyKind {
    pub const ALL: [StudyKind; 8] = [
        StudyKind::Gooey,
        StudyKind::Morph,
        StudyKind::Merge,
        StudyKind::Lerp,
        StudyKind::ShapeMorph,
        StudyKind::Squircles,
        StudyKind::Flat,
        StudyKind::Blobs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StudyKind::Gooey => "Gooey",
            StudyKind::Morph => "Morph",
            StudyKind::Merge => "Round Merge",
            StudyKind::Lerp => "Interpolate",
            StudyKind::ShapeMorph => "Circle to Diamond",
            StudyKind::Squircles => "Squircles",
            StudyKind::Flat => "Flat Union",
            StudyKind::Blobs => "Blobs",
        }
    }
}

/// Everything a study consumes for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Seconds since the app started.
    pub t: f32,
    /// Pointer is inside the canvas.
    pub hovered: bool,
    /// Pointer in normalized device coordinates over the canvas:
    /// x right, y up, both in [-1, 1].
    pub pointer_ndc: Option<Vec2>,
    /// Canvas aspect ratio (width / height).
    pub aspect: f32,
    /// Primary button was pressed this frame.
    pub clicked: bool,
}

impl FrameInput {
    /// An idle frame at time `t`: no pointer, nothing pressed.
    pub fn idle(t: f32) -> Self {
        Self {
            t,
            hovered: false,
            pointer_ndc: None,
            aspect: 1.5,
            clicked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn study_labels_are_unique() {
        for (i, a) in StudyKind::ALL.iter().enumerate() {
            for b in &StudyKind::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
