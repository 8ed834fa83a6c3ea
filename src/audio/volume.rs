/// Playback volume, kept as a whole number of `STEP`s so saturation is exact.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Volume {
    steps: u8,
}

impl Volume {
    pub const STEP: f32 = 0.025;
    pub const MIN: f32 = 0.025;
    pub const MAX: f32 = 0.5;

    const MIN_STEPS: u8 = 1;
    const MAX_STEPS: u8 = 20;

    /// Clamp `level` into `[MIN, MAX]` and round it to the nearest step.
    /// Non-finite input falls back to the default level.
    pub fn from_level(level: f32) -> Self {
        if !level.is_finite() {
            return Self::default();
        }
        let steps = (level.clamp(Self::MIN, Self::MAX) / Self::STEP).round() as u8;
        Self {
            steps: steps.clamp(Self::MIN_STEPS, Self::MAX_STEPS),
        }
    }

    pub fn level(self) -> f32 {
        self.steps as f32 * Self::STEP
    }

    pub fn up(&mut self) {
        self.steps = (self.steps + 1).min(Self::MAX_STEPS);
    }

    pub fn down(&mut self) {
        self.steps = self.steps.saturating_sub(1).max(Self::MIN_STEPS);
    }

    /// Fraction of the maximum volume, in `(0, 1]`.
    pub fn fraction(self) -> f32 {
        self.steps as f32 / Self::MAX_STEPS as f32
    }
}

impl Default for Volume {
    fn default() -> Self {
        // 0.1
        Self { steps: 4 }
    }
}
