use super::{HttpClient, HttpResponse};

use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode};

impl HttpClient for reqwest::Client {
    /// The response type is `reqwest::Response`.
    type Response = reqwest::Response;
    /// The error type is `reqwest::Error`.
    type Error = reqwest::Error;

    /// Executes an `http::Request` using the `reqwest::Client`.
    ///
    /// This method converts the generic `http::Request<Option<Bytes>>` into a `reqwest::Request`
    /// and then sends it. Non-2xx statuses are returned as responses, not errors.
    async fn execute(
        &self,
        request: Request<Option<Bytes>>,
    ) -> Result<Self::Response, Self::Error> {
        let (parts, body) = request.into_parts();
        let mut builder = self
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        reqwest::Client::execute(self, builder.build()?).await
    }
}

impl HttpResponse for reqwest::Response {
    type Error = reqwest::Error;

    /// Returns the HTTP status code of the `reqwest::Response`.
    fn status(&self) -> StatusCode {
        self.status()
    }

    /// Returns the `reqwest::Response`'s headers.
    fn headers(&self) -> HeaderMap {
        self.headers().clone()
    }

    /// Consumes the `reqwest::Response` and asynchronously returns its body as `bytes::Bytes`.
    async fn body(self) -> Result<Bytes, Self::Error> {
        self.bytes().await
    }
}

impl crate::Error for reqwest::Error {
    fn is_aborted(&self) -> bool {
        self.is_timeout()
    }
}
