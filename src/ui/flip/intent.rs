use std::time::Duration;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FlipIntent {
    /// Flip to the other side. Ignored while a flip is running.
    Toggle,

    /// Animation clock advanced by `elapsed`.
    Tick { elapsed: Duration },
}

impl Intent for FlipIntent {}
