/// Easing curves mapping linear progress `t ∈ [0, 1]` to eased progress.
///
/// Every curve maps 0 to 0 and 1 to exactly 1, so a finished transition
/// lands on its end value without overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Exponential ease-out: fast start, decelerating toward the end.
    #[default]
    ExpOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::ExpOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
        }
    }
}
