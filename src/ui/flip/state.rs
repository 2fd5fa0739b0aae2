use std::time::Duration;

use crate::animation::Transition;
use crate::ui::mvi::UiState;

pub const FRONT_ANGLE: f32 = 0.0;
pub const BACK_ANGLE: f32 = 180.0;
const CROSSOVER_ANGLE: f32 = 90.0;
const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(800);

/// What the renderer needs for one card face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceProjection {
    pub visible: bool,
    /// Rotation about the vertical axis, in degrees.
    pub rotation: f32,
}

impl FaceProjection {
    /// Horizontal scale of the face as seen head-on, in `[0, 1]`.
    pub fn width_scale(&self) -> f32 {
        self.rotation.to_radians().cos().abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardProjection {
    pub front: FaceProjection,
    pub back: FaceProjection,
}

/// Flip state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipState {
    pub is_flipped: bool,
    /// Current rotation in degrees. Rests at 0 or 180.
    pub angle: f32,
    /// In-flight transition, if any.
    pub transition: Option<Transition>,
    pub duration: Duration,
}

impl Default for FlipState {
    fn default() -> Self {
        Self::with_duration(DEFAULT_FLIP_DURATION)
    }
}

impl UiState for FlipState {}

impl FlipState {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            is_flipped: false,
            angle: FRONT_ANGLE,
            transition: None,
            duration,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Angle the card is heading to (or resting at).
    pub fn target_angle(&self) -> f32 {
        match &self.transition {
            Some(transition) => transition.target(),
            None => self.rest_angle(),
        }
    }

    pub fn rest_angle(&self) -> f32 {
        if self.is_flipped {
            BACK_ANGLE
        } else {
            FRONT_ANGLE
        }
    }

    /// Front face: visible on `[0, 90)`, rotates 0 → 180.
    pub fn front_face(&self) -> FaceProjection {
        FaceProjection {
            visible: self.angle < CROSSOVER_ANGLE,
            rotation: self.clamped_angle(),
        }
    }

    /// Back face: visible on `[90, 180]`, rotates 180 → 360 so it reads
    /// right-side-up when shown.
    pub fn back_face(&self) -> FaceProjection {
        FaceProjection {
            visible: !self.front_face().visible,
            rotation: BACK_ANGLE + self.clamped_angle(),
        }
    }

    pub fn projection(&self) -> CardProjection {
        CardProjection {
            front: self.front_face(),
            back: self.back_face(),
        }
    }

    fn clamped_angle(&self) -> f32 {
        self.angle.clamp(FRONT_ANGLE, BACK_ANGLE)
    }
}
