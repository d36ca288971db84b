//! Transport layer for the prediction service.

pub mod http;

pub use http::{router, HttpTransport};
