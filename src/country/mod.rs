//! Country data: lookup keys, records and the GraphQL client.

mod cache;
mod client;
mod code;
mod error;
mod fetcher;
mod graphql;
mod record;

pub use cache::ResponseCache;
pub use client::{CountryClient, GraphqlCountryClient};
pub use code::CountryCode;
pub use error::ClientError;
pub use fetcher::{FetchDispatcher, FetchOutcome, FetchRequest, RequestId, TokioFetcher};
pub use graphql::{GraphqlRequest, GraphqlResponse, GET_COUNTRY_QUERY};
pub use record::{CountryRecord, Language};
