//! Video page metadata for deep search.
//!
//! Fetches the watch page and pulls the upload date, description and view
//! count out of the embedded player payload. Everything here is best-effort:
//! a missing field is simply empty and a failed fetch yields no metadata.

mod error;
mod extract;
mod fetcher;

pub use error::MetadataError;
pub use extract::{extract_meta, normalize_date};
pub use fetcher::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, WebMetadataFetcher};
