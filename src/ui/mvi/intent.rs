/// Marker trait for intents: user input (key presses), fetch results and
/// animation ticks. Reducers consume them to produce the next state.
pub trait Intent: Send + 'static {}
