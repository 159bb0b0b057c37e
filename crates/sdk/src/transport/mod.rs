//! Transport layer for the Synchro SDK.

pub mod http;

pub use http::{HttpTransport, QueryPairs};
