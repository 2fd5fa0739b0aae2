use std::time::Duration;

use super::easing::Easing;

/// Outcome of advancing a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// Still running; carries the current value.
    Running(f32),
    /// This advance finished the transition. Reported exactly once, with the
    /// exact end value.
    Completed(f32),
    /// Already finished before this advance.
    Idle(f32),
}

/// A value moving from `from` to `to` over `duration`, shaped by `easing`.
///
/// Time is supplied by the caller through [`Transition::advance`], so the
/// transition is independent of any clock or render loop. Completion is
/// signalled once via [`TransitionStep::Completed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
    completed: bool,
}

impl Transition {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
            completed: false,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Current interpolated value. Equals `to` exactly once complete.
    pub fn value(&self) -> f32 {
        if self.completed {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    pub fn advance(&mut self, dt: Duration) -> TransitionStep {
        if self.completed {
            return TransitionStep::Idle(self.to);
        }

        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        if self.elapsed >= self.duration {
            self.completed = true;
            return TransitionStep::Completed(self.to);
        }
        TransitionStep::Running(self.value())
    }
}
