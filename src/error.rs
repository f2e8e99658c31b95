//! Error types and the [`Error`] trait.
//!
//! Transport errors implement the [`Error`] trait, which extends
//! [`std::error::Error`] with enough detail for a failed exchange to be
//! described in a [`RestResponse`](crate::RestResponse). [`CancelledError`] is
//! the only error the request entry points ever return.

use http::{Method, Uri};
use snafu::{AsErrorSource, Snafu};
use tokio_util::sync::CancellationToken;

use crate::platform::MaybeSendSync;

/// Errors reported by a transport.
pub trait Error: std::error::Error + AsErrorSource + MaybeSendSync + 'static {
    /// If true, the transport gave up on the exchange itself (for example it
    /// timed out) rather than failing to connect or read.
    fn is_aborted(&self) -> bool;
}

/// The caller cancelled the request before its outcome was observed.
///
/// Cancellation takes priority over whatever the transport reported, so no
/// [`RestResponse`](crate::RestResponse) accompanies this error.
#[derive(Debug, Clone, Snafu)]
#[snafu(display("{method} {url} was cancelled"), visibility(pub(crate)))]
pub struct CancelledError {
    method: Method,
    url: Uri,
    token: CancellationToken,
}

impl CancelledError {
    /// The method of the cancelled request.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The URL of the cancelled request.
    #[must_use]
    pub fn url(&self) -> &Uri {
        &self.url
    }

    /// The token whose cancellation interrupted the request.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}
