//! HTTP fetching for the audit checks
//!
//! Every check pulls what it needs through a [`Fetcher`]: one GET per call,
//! no retries, bounded by the configured timeout.

mod fetcher;

pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher};
