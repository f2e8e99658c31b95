//! The request descriptor handed to the executor.

use bon::Builder;
use bytes::Bytes;
use http::{HeaderValue, Method, Request, header::CONTENT_TYPE};

use crate::RequestUrl;

/// Media type sent with every [`RestClient::post`](crate::RestClient::post) body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single outbound call.
///
/// The descriptor is owned by one invocation of [`execute`](crate::execute)
/// and is never mutated once built.
#[derive(Debug, Clone, Builder)]
#[builder(state_mod(name = "builder"))]
pub struct RestRequest {
    /// The absolute URL the request is sent to.
    url: RequestUrl,

    /// The HTTP method.
    #[builder(default = Method::GET)]
    method: Method,

    /// The upload payload. Absent means no upload stage.
    #[builder(into)]
    body: Option<Bytes>,

    /// Sent as the `Content-Type` header, but only alongside a body.
    content_type: Option<HeaderValue>,
}

impl RestRequest {
    /// The absolute URL the request is sent to.
    #[must_use]
    pub fn url(&self) -> &RequestUrl {
        &self.url
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The upload payload, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The content type that will accompany the body, if any.
    ///
    /// Always `None` when there is no body.
    #[must_use]
    pub fn content_type(&self) -> Option<&HeaderValue> {
        self.body.as_ref().and(self.content_type.as_ref())
    }

    pub(crate) fn to_http_request(&self) -> Request<Option<Bytes>> {
        let (mut parts, ()) = Request::new(()).into_parts();
        parts.method = self.method.clone();
        parts.uri = self.url.as_uri().clone();

        if let Some(content_type) = self.content_type()
            && !content_type.is_empty()
        {
            parts.headers.insert(CONTENT_TYPE, content_type.clone());
        }

        Request::from_parts(parts, self.body.clone())
    }
}
