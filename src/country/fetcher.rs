//! Bridge between the single-threaded UI and the async [`CountryClient`].
//!
//! The UI hands a [`FetchRequest`] to a [`FetchDispatcher`] and returns
//! immediately. The outcome comes back later as a [`FetchOutcome`] event,
//! tagged with the request id so superseded responses can be dropped.

use std::fmt;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, warn};

use super::client::CountryClient;
use super::code::CountryCode;
use super::record::CountryRecord;

/// Identifier of one issued fetch. Strictly increasing per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub code: CountryCode,
}

/// Result of a fetch, delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub request: RequestId,
    pub result: Result<CountryRecord, String>,
}

/// Starts fetches without blocking the caller.
pub trait FetchDispatcher {
    fn dispatch(&self, request: FetchRequest);
}

/// Runs each fetch as a task on a tokio runtime and posts the outcome to the
/// UI event channel.
pub struct TokioFetcher<C, E> {
    client: Arc<C>,
    runtime: Handle,
    events: Sender<E>,
}

impl<C, E> TokioFetcher<C, E>
where
    C: CountryClient + 'static,
    E: From<FetchOutcome> + Send + 'static,
{
    pub fn new(client: Arc<C>, runtime: Handle, events: Sender<E>) -> Self {
        Self {
            client,
            runtime,
            events,
        }
    }
}

impl<C, E> FetchDispatcher for TokioFetcher<C, E>
where
    C: CountryClient + 'static,
    E: From<FetchOutcome> + Send + 'static,
{
    fn dispatch(&self, request: FetchRequest) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        debug!(request = %request.id, code = %request.code, "dispatching fetch");

        self.runtime.spawn(async move {
            let result = client.fetch_country(&request.code).await.map_err(|err| {
                warn!(
                    request = %request.id,
                    code = %request.code,
                    kind = err.kind(),
                    error = %err,
                    "country fetch failed"
                );
                err.to_string()
            });
            let outcome = FetchOutcome {
                request: request.id,
                result,
            };
            // The UI may already be gone during shutdown.
            let _ = events.send(E::from(outcome));
        });
    }
}
