//! Profile screen: search field, fetch lifecycle and the flip card.

use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use crate::country::{FetchDispatcher, FetchOutcome, RequestId};
use crate::nav::Route;
use crate::ui::flip::{FlipIntent, FlipReducer, FlipState};
use crate::ui::mvi::dispatch;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};

pub struct ProfileScreen {
    search: SearchState,
    flip: FlipState,
    fetcher: Rc<dyn FetchDispatcher>,
}

impl ProfileScreen {
    /// Fresh screen state. An incoming code is placed in the input field
    /// as given and submitted right away.
    pub fn new(
        initial_code: Option<&str>,
        flip_duration: Duration,
        fetcher: Rc<dyn FetchDispatcher>,
    ) -> Self {
        Self::resume(initial_code, flip_duration, fetcher, RequestId::default())
    }

    /// Like [`ProfileScreen::new`], but request ids start after
    /// `last_issued`. Outcomes for ids at or below it are never applied.
    pub fn resume(
        initial_code: Option<&str>,
        flip_duration: Duration,
        fetcher: Rc<dyn FetchDispatcher>,
        last_issued: RequestId,
    ) -> Self {
        let mut screen = Self {
            search: SearchState::continuing_after(
                initial_code.unwrap_or_default(),
                last_issued,
            ),
            flip: FlipState::with_duration(flip_duration),
            fetcher,
        };
        if initial_code.is_some() {
            screen.submit();
        }
        screen
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn flip(&self) -> &FlipState {
        &self.flip
    }

    /// Id of the newest fetch this screen issued.
    pub fn last_issued(&self) -> RequestId {
        self.search.last_issued
    }

    pub fn set_input_code(&mut self, text: impl Into<String>) {
        self.dispatch_search(SearchIntent::SetInput { text: text.into() });
    }

    pub fn edit(&mut self, intent: SearchIntent) {
        match intent {
            SearchIntent::Submit => {
                self.submit();
            }
            other => self.dispatch_search(other),
        }
    }

    /// Submit the current input. Returns true if a fetch was issued.
    pub fn submit(&mut self) -> bool {
        let before = self.search.last_issued;
        self.dispatch_search(SearchIntent::Submit);
        if self.search.last_issued == before {
            debug!(input = %self.search.input, "blank search ignored");
            return false;
        }

        match self.search.pending_request() {
            Some(request) => {
                info!(request = %request.id, code = %request.code, "search submitted");
                self.fetcher.dispatch(request);
                true
            }
            None => false,
        }
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        self.dispatch_search(SearchIntent::Resolved(outcome));
    }

    /// Request a card flip. Only honored while a country is loaded.
    /// Returns true if a flip started.
    pub fn toggle(&mut self) -> bool {
        if self.search.fetch.record().is_none() {
            debug!("no country loaded, flip ignored");
            return false;
        }
        let was_running = self.flip.is_transitioning();
        dispatch::<FlipReducer>(&mut self.flip, FlipIntent::Toggle);
        !was_running && self.flip.is_transitioning()
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        if self.flip.is_transitioning() {
            dispatch::<FlipReducer>(&mut self.flip, FlipIntent::Tick { elapsed });
        }
    }

    pub fn is_animating(&self) -> bool {
        self.flip.is_transitioning()
    }

    /// Header title: the loaded country's name, else the route default.
    pub fn title(&self) -> String {
        match self.search.fetch.record() {
            Some(record) => record.name.clone(),
            None => Route::Profile { country_code: None }
                .default_title()
                .to_string(),
        }
    }

    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch::<SearchReducer>(&mut self.search, intent);
    }
}
