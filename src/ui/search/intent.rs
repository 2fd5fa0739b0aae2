//! Intents for the search controller.

use crate::country::FetchOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Replace the raw input text verbatim.
    SetInput { text: String },

    /// Append one typed character.
    InsertChar(char),

    /// Remove the last character (Backspace).
    DeleteChar,

    /// Clear the input field.
    Clear,

    /// User pressed Search. Blank input is ignored.
    Submit,

    /// A fetch finished. Ignored unless it belongs to the latest submit.
    Resolved(FetchOutcome),
}

impl Intent for SearchIntent {}
