//! Per-frame parameter relaxation.
//!
//! Every animated quantity eases toward its target by a fixed fraction each
//! rendered frame: `value += (target - value) * rate`. Interaction only
//! moves targets; the displayed value follows on its own. Rates are
//! presentation constants tuned per study.

/// Scalar eased toward a target once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Approach {
    pub value: f32,
    pub target: f32,
    pub rate: f32,
}

impl Approach {
    /// Start at `value` with the target already there, so an unprompted
    /// tick is a no-op.
    pub fn new(value: f32, rate: f32) -> Self {
        Self {
            value,
            target: value,
            rate,
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.value += (self.target - self.value) * self.rate;
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump the value immediately; the target keeps pulling afterwards.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
    }
}

/// RGB color relaxed per channel under the same rule as [`Approach`].
#[derive(Debug, Clone, Copy)]
pub struct ColorDrift {
    pub value: [f32; 3],
    pub target: [f32; 3],
    pub rate: f32,
}

impl ColorDrift {
    pub fn new(value: [f32; 3], rate: f32) -> Self {
        Self {
            value,
            target: value,
            rate,
        }
    }

    pub fn tick(&mut self) {
        for c in 0..3 {
            self.value[c] += (self.target[c] - self.value[c]) * self.rate;
        }
    }

    pub fn set_target(&mut self, target: [f32; 3]) {
        self.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_converges_monotonically() {
        let mut a = Approach::new(0.0, 0.15);
        a.set_target(1.0);
        let mut prev = 0.0;
        for _ in 0..60 {
            a.tick();
            assert!(a.value > prev);
            assert!(a.value <= 1.0);
            prev = a.value;
        }
        assert!((a.value - 1.0).abs() < 0.01);
    }

    #[test]
    fn approach_is_stable_at_the_target() {
        let mut a = Approach::new(0.6, 0.3);
        a.tick();
        assert_eq!(a.value, 0.6);
    }

    #[test]
    fn retargeting_reverses_direction() {
        let mut a = Approach::new(0.0, 0.2);
        a.set_target(1.0);
        for _ in 0..10 {
            a.tick();
        }
        let peak = a.value;
        a.set_target(0.0);
        a.tick();
        assert!(a.value < peak);
    }

    #[test]
    fn snap_jumps_then_decays() {
        let mut a = Approach::new(0.0, 0.3);
        a.snap(1.0);
        assert_eq!(a.value, 1.0);
        a.tick();
        assert!((a.value - 0.7).abs() < 1e-6);
        a.tick();
        assert!((a.value - 0.49).abs() < 1e-6);
    }

    #[test]
    fn color_drift_approaches_target_channelwise() {
        let mut c = ColorDrift::new([1.0, 0.2, 0.3], 0.03);
        c.set_target([0.8, 0.3, 0.4]);
        for _ in 0..400 {
            c.tick();
        }
        for ch in 0..3 {
            assert!((c.value[ch] - c.target[ch]).abs() < 0.01);
        }
    }
}
