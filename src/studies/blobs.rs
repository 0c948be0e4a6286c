//! Raymarched blob background, framed as a study so it can be watched
//! directly. Purely time-driven; the pointer has no effect.

use crate::render::march;
use crate::studies::FrameInput;

pub struct BlobsStudy {
    t: f32,
}

impl BlobsStudy {
    pub fn new() -> Self {
        Self { t: 0.0 }
    }

    pub fn update(&mut self, input: &FrameInput) {
        self.t = input.t;
    }

    pub fn render(&self, width: usize, height: usize, page: [f32; 3]) -> Vec<u8> {
        march::render(width, height, self.t, page)
    }

    pub fn stats(&self) -> Vec<String> {
        vec![
            format!("Spheres: {}", march::SPHERES),
            format!("March steps: {}", march::MAX_STEPS),
            format!("Time: {:.1} s", self.t),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_advances_with_time() {
        let mut study = BlobsStudy::new();
        study.update(&FrameInput::idle(0.0));
        let a = study.render(48, 32, [1.0, 1.0, 1.0]);
        study.update(&FrameInput::idle(2.0));
        let b = study.render(48, 32, [1.0, 1.0, 1.0]);
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }
}
