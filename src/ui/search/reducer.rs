//! Reducer for the search controller.

use tracing::debug;

use crate::country::CountryCode;
use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{FetchState, SearchState};

/// Pure search state transitions.
///
/// `Submit` only moves the state to `Loading` with a fresh request id; the
/// owning screen reads [`SearchState::pending_request`] afterwards and hands
/// it to the fetch dispatcher.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::SetInput { text } => {
                state.input = text;
                state
            }

            SearchIntent::InsertChar(ch) => {
                state.input.push(ch);
                state
            }

            SearchIntent::DeleteChar => {
                state.input.pop();
                state
            }

            SearchIntent::Clear => {
                state.input.clear();
                state
            }

            SearchIntent::Submit => {
                let Some(code) = CountryCode::parse(&state.input) else {
                    return state;
                };
                let request = state.last_issued.next();
                state.last_issued = request;
                state.fetch = FetchState::Loading { code, request };
                state
            }

            SearchIntent::Resolved(outcome) => {
                let is_latest = outcome.request == state.last_issued && state.fetch.is_loading();
                if !is_latest {
                    debug!(
                        request = %outcome.request,
                        latest = %state.last_issued,
                        "dropping superseded fetch result"
                    );
                    return state;
                }

                state.fetch = match outcome.result {
                    Ok(record) => FetchState::Loaded(record),
                    Err(reason) => FetchState::Failed(reason),
                };
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{CountryRecord, FetchOutcome, RequestId};

    fn record(name: &str) -> CountryRecord {
        CountryRecord {
            name: name.into(),
            native: name.into(),
            capital: None,
            emoji: String::new(),
            currency: None,
            languages: vec![],
        }
    }

    fn typed(input: &str) -> SearchState {
        SearchState::continuing_after(input, RequestId::default())
    }

    fn submit(input: &str) -> SearchState {
        SearchReducer::reduce(typed(input), SearchIntent::Submit)
    }

    fn resolved(request: u64, result: Result<CountryRecord, String>) -> SearchIntent {
        SearchIntent::Resolved(FetchOutcome {
            request: RequestId::new(request),
            result,
        })
    }

    #[test]
    fn set_input_is_verbatim() {
        let state = SearchReducer::reduce(
            SearchState::default(),
            SearchIntent::SetInput {
                text: "  br ".into(),
            },
        );
        assert_eq!(state.input, "  br ");
        assert_eq!(state.fetch, FetchState::Idle);
    }

    #[test]
    fn editing_intents() {
        let state = SearchState::default();
        let state = SearchReducer::reduce(state, SearchIntent::InsertChar('f'));
        let state = SearchReducer::reduce(state, SearchIntent::InsertChar('r'));
        assert_eq!(state.input, "fr");
        let state = SearchReducer::reduce(state, SearchIntent::DeleteChar);
        assert_eq!(state.input, "f");
        let state = SearchReducer::reduce(state, SearchIntent::Clear);
        assert!(state.input.is_empty());
        // Deleting from empty input is harmless.
        let state = SearchReducer::reduce(state, SearchIntent::DeleteChar);
        assert!(state.input.is_empty());
    }

    #[test]
    fn blank_submit_is_noop() {
        for input in ["", " ", "\t", "  \n  "] {
            let before = typed(input);
            let after = SearchReducer::reduce(before.clone(), SearchIntent::Submit);
            assert_eq!(after, before, "input {input:?}");
            assert!(after.pending_request().is_none());
        }
    }

    #[test]
    fn submit_canonicalizes_code() {
        let state = submit(" br ");
        let request = state.pending_request().expect("fetch pending");
        assert_eq!(request.code.as_str(), "BR");
        assert_eq!(request.id, RequestId::new(1));
        // Raw input is left as typed.
        assert_eq!(state.input, " br ");
    }

    #[test]
    fn success_loads_record() {
        let state = submit("br");
        let state = SearchReducer::reduce(state, resolved(1, Ok(record("Brazil"))));
        assert_eq!(state.fetch.record().map(|r| r.name.as_str()), Some("Brazil"));
    }

    #[test]
    fn failure_keeps_message() {
        let state = submit("zz");
        let state = SearchReducer::reduce(state, resolved(1, Err("not found".into())));
        assert_eq!(state.fetch, FetchState::Failed("not found".into()));
    }

    #[test]
    fn later_submit_wins_over_late_response() {
        let state = SearchReducer::reduce(typed("BR"), SearchIntent::Submit);
        let state = SearchReducer::reduce(
            state,
            SearchIntent::SetInput { text: "FR".into() },
        );
        let state = SearchReducer::reduce(state, SearchIntent::Submit);
        assert_eq!(state.last_issued, RequestId::new(2));

        // FR answers first, then the stale BR response arrives.
        let state = SearchReducer::reduce(state, resolved(2, Ok(record("France"))));
        let state = SearchReducer::reduce(state, resolved(1, Ok(record("Brazil"))));

        assert_eq!(state.fetch.record().map(|r| r.name.as_str()), Some("France"));
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let state = SearchReducer::reduce(typed("BR"), SearchIntent::Submit);
        let state = SearchReducer::reduce(state, SearchIntent::Submit);
        let state = SearchReducer::reduce(state, resolved(1, Err("timeout".into())));
        assert!(state.fetch.is_loading());
        assert_eq!(state.pending_request().map(|r| r.id), Some(RequestId::new(2)));
    }

    #[test]
    fn duplicate_delivery_is_ignored() {
        let state = submit("br");
        let state = SearchReducer::reduce(state, resolved(1, Ok(record("Brazil"))));
        let state = SearchReducer::reduce(state, resolved(1, Err("late".into())));
        assert!(state.fetch.record().is_some());
    }

    #[test]
    fn resubmit_after_failure_recovers() {
        let state = submit("br");
        let state = SearchReducer::reduce(state, resolved(1, Err("offline".into())));
        let state = SearchReducer::reduce(state, SearchIntent::Submit);
        let state = SearchReducer::reduce(state, resolved(2, Ok(record("Brazil"))));
        assert!(state.fetch.record().is_some());
    }
}
