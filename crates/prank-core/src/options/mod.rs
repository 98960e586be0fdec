//! Per-invocation request options.

pub mod keys;
pub mod request_options;

pub use request_options::{RequestOptions, RequestOptionsBuilder};
