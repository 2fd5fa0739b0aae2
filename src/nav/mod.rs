//! Screen routing and deep links.

mod link;
mod route;

pub use link::{parse_link, to_link, LINK_PREFIXES};
pub use route::{Navigator, Route};
