use crate::country::{CountryCode, CountryRecord, FetchRequest, RequestId};
use crate::ui::mvi::UiState;

/// Lifecycle of the current lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading {
        code: CountryCode,
        request: RequestId,
    },
    Loaded(CountryRecord),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn record(&self) -> Option<&CountryRecord> {
        match self {
            Self::Loaded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Search controller state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Raw text as typed, not canonicalized.
    pub input: String,
    pub fetch: FetchState,
    /// Id of the most recently issued fetch. `RequestId::default()` until
    /// the first submit.
    pub last_issued: RequestId,
}

impl UiState for SearchState {}

impl SearchState {
    /// State whose request ids continue after `last_issued`, so ids never
    /// repeat across screens sharing one fetch channel.
    pub fn continuing_after(input: impl Into<String>, last_issued: RequestId) -> Self {
        Self {
            input: input.into(),
            last_issued,
            ..Self::default()
        }
    }

    /// The fetch the UI still owes the client, if the latest submit is
    /// in flight.
    pub fn pending_request(&self) -> Option<FetchRequest> {
        match &self.fetch {
            FetchState::Loading { code, request } => Some(FetchRequest {
                id: *request,
                code: code.clone(),
            }),
            _ => None,
        }
    }

    /// Label for the search button.
    pub fn button_label(&self) -> &'static str {
        if self.fetch.is_loading() {
            "Searching..."
        } else {
            "Search"
        }
    }
}
