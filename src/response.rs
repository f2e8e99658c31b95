//! The normalized result of a request.
//!
//! Every settled request produces a [`RestResponse`], whether the server
//! answered with a success, answered with an error status, or never answered
//! at all. Only cancellation is reported as an error.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use snafu::prelude::*;

/// How a settled request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A 2xx-class response was received.
    Success,
    /// A response was received with a status outside the 2xx class.
    HttpError,
    /// No usable response: connection, DNS, TLS or timeout failure, an abort
    /// the caller did not request, or a body that could not be read.
    NetworkError,
}

/// The outcome of a request, normalized into one shape.
#[derive(Debug, Clone)]
pub struct RestResponse {
    status_code: u16,
    text: Option<String>,
    error_message: Option<String>,
    headers: Option<HeaderMap>,
    outcome: Outcome,
}

impl RestResponse {
    pub(crate) fn from_status(status: StatusCode, headers: HeaderMap, body: &Bytes) -> Self {
        let (outcome, error_message) = if status.is_success() {
            (Outcome::Success, None)
        } else {
            (Outcome::HttpError, Some(describe_status(status)))
        };

        Self {
            status_code: status.as_u16(),
            text: Some(String::from_utf8_lossy(body).into_owned()),
            error_message,
            headers: non_empty(headers),
            outcome,
        }
    }

    pub(crate) fn network_error(error_message: impl Into<String>) -> Self {
        Self {
            status_code: 0,
            text: None,
            error_message: Some(error_message.into()),
            headers: None,
            outcome: Outcome::NetworkError,
        }
    }

    /// A response arrived but its body could not be read.
    pub(crate) fn unreadable_body(
        status: StatusCode,
        headers: HeaderMap,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: non_empty(headers),
            ..Self::network_error(error_message)
        }
    }

    /// HTTP status code returned by the server.
    ///
    /// Zero if no response was received.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The status code as a [`StatusCode`], or `None` if no response was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status_code).ok()
    }

    /// The response body decoded as UTF-8.
    ///
    /// `None` if no body was received; `Some("")` if the body was empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// True if the response body exists and is not empty.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    /// A description of what went wrong. `None` on success.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The received headers, or `None` if none were received.
    #[must_use]
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// How the request ended.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True if a 2xx-class response was received.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// True if the request failed below the HTTP layer.
    ///
    /// An error status such as 404 or 503 is not a network error.
    #[must_use]
    pub fn is_network_error(&self) -> bool {
        self.outcome == Outcome::NetworkError
    }

    /// Deserializes the body as JSON, whatever the status.
    ///
    /// # Errors
    ///
    /// Returns [`JsonBodyError::MissingBody`] if no body was received, or
    /// [`JsonBodyError::Deserialize`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, JsonBodyError> {
        let text = self.text.as_deref().context(MissingBodySnafu)?;
        serde_json::from_str(text).context(DeserializeSnafu)
    }
}

/// Errors from [`RestResponse::json`].
#[derive(Debug, Snafu)]
pub enum JsonBodyError {
    /// The request produced no body.
    #[snafu(display("Response has no body"))]
    MissingBody,
    /// The body could not be deserialized.
    #[snafu(display("Failed to deserialize response body"))]
    Deserialize {
        /// The underlying error.
        source: serde_json::Error,
    },
}

fn describe_status(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP/1.1 {} {reason}", status.as_u16()),
        None => format!("HTTP/1.1 {}", status.as_u16()),
    }
}

fn non_empty(headers: HeaderMap) -> Option<HeaderMap> {
    (!headers.is_empty()).then_some(headers)
}
