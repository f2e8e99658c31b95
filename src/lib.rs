//! Awaitable REST calls with cooperative cancellation.
//!
//! A request is sent through a pluggable [`HttpClient`](http::HttpClient),
//! awaited, and normalized into a [`RestResponse`]. Error statuses and network
//! failures are data on that response; the only error a call returns is
//! [`CancelledError`], and only when the caller's
//! [`CancellationToken`] was cancelled.

#![forbid(unsafe_code)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod client;
mod error;
mod executor;
pub mod http;
pub mod platform;
pub mod prelude;
mod request;
mod request_url;
mod response;

pub use client::RestClient;
pub use error::{CancelledError, Error};
pub use executor::execute;
pub use request::{JSON_CONTENT_TYPE, RestRequest, RestRequestBuilder};
pub use request_url::{IntoRequestUrl, InvalidRequestUrl, RequestUrl};
pub use response::{JsonBodyError, Outcome, RestResponse};

/// Documentation
pub mod _documentation {
    #[doc = include_str!("../README.md")]
    mod readme {}
    #[doc = include_str!("../CHANGELOG.md")]
    pub mod changelog {}
}

pub use bytes::Bytes;
pub use tokio_util::sync::CancellationToken;
