//! A validated request URL.
//!
//! [`RequestUrl`] is a newtype over [`Uri`] that guarantees the URL is
//! absolute. It can be constructed from common string and URL types via
//! [`IntoRequestUrl`].

use std::convert::Infallible;

use http::{Uri, uri::InvalidUri};
use snafu::prelude::*;
use url::Url;

/// An absolute URL a request can be sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(Uri);

impl RequestUrl {
    /// Validates that `uri` carries both a scheme and an authority.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestUrl::NotAbsolute`] for relative URIs such as
    /// `/users` or `example.com`.
    pub fn new(uri: Uri) -> Result<Self, InvalidRequestUrl> {
        ensure!(
            uri.scheme().is_some() && uri.authority().is_some(),
            NotAbsoluteSnafu {
                url: uri.to_string()
            }
        );
        Ok(Self(uri))
    }

    /// Returns the inner [`Uri`].
    #[must_use]
    pub fn as_uri(&self) -> &Uri {
        &self.0
    }

    /// Consumes the [`RequestUrl`] and returns the inner [`Uri`].
    #[must_use]
    pub fn into_uri(self) -> Uri {
        self.0
    }
}

impl std::fmt::Display for RequestUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Reasons a value could not be used as a [`RequestUrl`].
#[derive(Debug, Snafu)]
pub enum InvalidRequestUrl {
    /// The value is not a syntactically valid URI.
    #[snafu(display("Malformed URL: {source}"))]
    Malformed {
        /// The underlying parse error.
        source: InvalidUri,
    },
    /// The URI has no scheme or no host.
    #[snafu(display("URL is not absolute: {url}"))]
    NotAbsolute {
        /// The rejected URL.
        url: String,
    },
}

/// Conversion trait for types that can be turned into a [`RequestUrl`].
pub trait IntoRequestUrl {
    /// The error type returned if the conversion fails.
    type Error: std::fmt::Display;

    /// Attempts to convert this value into a [`RequestUrl`].
    fn into_request_url(self) -> Result<RequestUrl, Self::Error>;
}

impl IntoRequestUrl for RequestUrl {
    type Error = Infallible;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        Ok(self)
    }
}

impl IntoRequestUrl for Uri {
    type Error = InvalidRequestUrl;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        RequestUrl::new(self)
    }
}

impl IntoRequestUrl for Url {
    type Error = InvalidRequestUrl;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        self.as_str().into_request_url()
    }
}

impl IntoRequestUrl for &Url {
    type Error = InvalidRequestUrl;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        self.as_str().into_request_url()
    }
}

impl IntoRequestUrl for &str {
    type Error = InvalidRequestUrl;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        RequestUrl::new(self.parse::<Uri>().context(MalformedSnafu)?)
    }
}

impl IntoRequestUrl for String {
    type Error = InvalidRequestUrl;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        RequestUrl::new(Uri::try_from(self).context(MalformedSnafu)?)
    }
}

impl IntoRequestUrl for &String {
    type Error = InvalidRequestUrl;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        self.as_str().into_request_url()
    }
}
