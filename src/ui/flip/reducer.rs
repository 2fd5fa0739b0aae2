use tracing::debug;

use crate::animation::{Easing, Transition, TransitionStep};
use crate::ui::mvi::Reducer;

use super::intent::FlipIntent;
use super::state::{FlipState, BACK_ANGLE, FRONT_ANGLE};

/// Reducer for the flip state machine.
///
/// Whether a toggle is allowed at all (a country must be loaded) is decided
/// by the profile screen before dispatching.
pub struct FlipReducer;

impl Reducer for FlipReducer {
    type State = FlipState;
    type Intent = FlipIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FlipIntent::Toggle => {
                if state.is_transitioning() {
                    debug!("flip already running, toggle ignored");
                    return state;
                }
                let target = if state.is_flipped {
                    FRONT_ANGLE
                } else {
                    BACK_ANGLE
                };
                state.transition = Some(Transition::new(
                    state.rest_angle(),
                    target,
                    state.duration,
                    Easing::ExpOut,
                ));
                state
            }

            FlipIntent::Tick { elapsed } => {
                let Some(transition) = state.transition.as_mut() else {
                    return state;
                };
                match transition.advance(elapsed) {
                    TransitionStep::Running(angle) => {
                        state.angle = angle;
                    }
                    TransitionStep::Completed(angle) => {
                        state.angle = angle;
                        state.is_flipped = !state.is_flipped;
                        state.transition = None;
                    }
                    TransitionStep::Idle(_) => {
                        state.transition = None;
                    }
                }
                state
            }
        }
    }
}
