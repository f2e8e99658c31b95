//! Convenience entry points over [`execute`].

use bon::Builder;
use bytes::Bytes;
use http::{HeaderValue, Method};
use tokio_util::sync::CancellationToken;

use crate::{
    CancelledError, IntoRequestUrl, RestRequest, RestResponse, execute, http::HttpClient,
    request::JSON_CONTENT_TYPE,
};

/// Issues GET and POST requests through an [`HttpClient`].
///
/// ```no_run
/// # async fn run() -> Result<(), awaitable_rest::CancelledError> {
/// use awaitable_rest::RestClient;
///
/// let client = RestClient::builder()
///     .http_client(reqwest::Client::new())
///     .build();
///
/// let response = client.get("https://api.example.com/items").await?;
/// if response.is_success() {
///     println!("{}", response.text().unwrap_or_default());
/// } else if response.is_network_error() {
///     eprintln!("unreachable: {:?}", response.error_message());
/// } else {
///     eprintln!("server said {}", response.status_code());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Builder)]
pub struct RestClient<C: HttpClient> {
    /// The transport requests are sent through.
    http_client: C,
}

impl<C: HttpClient> RestClient<C> {
    /// The transport requests are sent through.
    #[must_use]
    pub fn http_client(&self) -> &C {
        &self.http_client
    }

    /// Sends a GET request with no body.
    ///
    /// # Errors
    ///
    /// Never fails; use [`get_with_cancellation`](Self::get_with_cancellation)
    /// for a call that can be cancelled.
    pub async fn get<U: IntoRequestUrl>(&self, url: U) -> Result<RestResponse, CancelledError> {
        self.get_with_cancellation(url, &CancellationToken::new())
            .await
    }

    /// Sends a GET request with no body, aborting it if `cancellation` fires.
    ///
    /// # Errors
    ///
    /// Returns [`CancelledError`] if `cancellation` was cancelled before the
    /// outcome was observed.
    pub async fn get_with_cancellation<U: IntoRequestUrl>(
        &self,
        url: U,
        cancellation: &CancellationToken,
    ) -> Result<RestResponse, CancelledError> {
        self.send(url, Method::GET, None, cancellation).await
    }

    /// Sends a POST request with `body` as `application/json`.
    ///
    /// # Errors
    ///
    /// Never fails; use [`post_with_cancellation`](Self::post_with_cancellation)
    /// for a call that can be cancelled.
    pub async fn post<U: IntoRequestUrl>(
        &self,
        url: U,
        body: impl Into<Bytes>,
    ) -> Result<RestResponse, CancelledError> {
        self.post_with_cancellation(url, body, &CancellationToken::new())
            .await
    }

    /// Sends a POST request with `body` as `application/json`, aborting it if
    /// `cancellation` fires.
    ///
    /// # Errors
    ///
    /// Returns [`CancelledError`] if `cancellation` was cancelled before the
    /// outcome was observed.
    pub async fn post_with_cancellation<U: IntoRequestUrl>(
        &self,
        url: U,
        body: impl Into<Bytes>,
        cancellation: &CancellationToken,
    ) -> Result<RestResponse, CancelledError> {
        self.send(url, Method::POST, Some(body.into()), cancellation)
            .await
    }

    async fn send<U: IntoRequestUrl>(
        &self,
        url: U,
        method: Method,
        body: Option<Bytes>,
        cancellation: &CancellationToken,
    ) -> Result<RestResponse, CancelledError> {
        let url = match url.into_request_url() {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(%method, error = %err, "rejected request URL");
                return Ok(RestResponse::network_error(err.to_string()));
            }
        };

        let content_type = body
            .is_some()
            .then(|| HeaderValue::from_static(JSON_CONTENT_TYPE));

        let request = RestRequest::builder()
            .url(url)
            .method(method)
            .maybe_body(body)
            .maybe_content_type(content_type)
            .build();

        execute(&self.http_client, request, cancellation).await
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;

    use super::*;
    use crate::executor::tests::{Behavior, MockTransport};

    fn client(behavior: Behavior) -> RestClient<MockTransport> {
        RestClient::builder()
            .http_client(MockTransport::new(behavior))
            .build()
    }

    fn ok() -> Behavior {
        Behavior::Respond {
            status: 200,
            body: r#"{"ok":true}"#,
        }
    }

    #[tokio::test]
    async fn test_get_sends_no_body_or_content_type() {
        let client = client(ok());

        let response = client.get("https://api.example.com/items").await.unwrap();
        assert!(response.is_success());

        let sent = client.http_client().last_request();
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.uri, "https://api.example.com/items");
        assert!(sent.body.is_none());
        assert!(sent.headers.get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_post_sends_json() {
        let client = client(ok());

        let response = client
            .post("https://api.example.com/items", r#"{"name":"widget"}"#)
            .await
            .unwrap();
        assert_eq!(response.text(), Some(r#"{"ok":true}"#));

        let sent = client.http_client().last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.body.as_deref(), Some(&br#"{"name":"widget"}"#[..]));
        assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_post_empty_body_still_json() {
        let client = client(ok());

        client
            .post("https://api.example.com/items", String::new())
            .await
            .unwrap();

        let sent = client.http_client().last_request();
        assert_eq!(sent.body.as_deref(), Some(&b""[..]));
        assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_error() {
        let client = client(ok());

        let response = client.get("not a url").await.unwrap();

        assert!(response.is_network_error());
        assert_eq!(response.status_code(), 0);
        assert!(response.error_message().unwrap().contains("URL"));
        assert!(client.http_client().requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_http_error_never_cancelled() {
        let client = client(Behavior::Respond {
            status: 500,
            body: "boom",
        });

        let response = client
            .post_with_cancellation(
                "https://api.example.com/items",
                "{}",
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.status_code(), 500);
        assert!(!response.is_success());
        assert!(!response.is_network_error());
    }

    #[tokio::test]
    async fn test_get_cancelled() {
        let client = client(Behavior::Hang);
        let token = CancellationToken::new();

        let (result, ()) = tokio::join!(
            client.get_with_cancellation("https://api.example.com/slow", &token),
            async {
                client.http_client().sent.notified().await;
                token.cancel();
            }
        );

        assert_eq!(result.unwrap_err().method(), Method::GET);
    }
}
