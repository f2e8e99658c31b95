//! The request/await/cancel/normalize sequence.

use tokio_util::sync::CancellationToken;
use tracing::Instrument as _;

use crate::{
    CancelledError, RestRequest, RestResponse,
    error::CancelledSnafu,
    http::{HttpClient, HttpResponse},
};

/// Terminal state of a transport exchange.
enum Settled {
    Responded(RestResponse),
    Failed(RestResponse),
}

/// Sends `request` through `http_client` and waits for it to settle.
///
/// Cancelling `cancellation` while the exchange is in flight aborts it by
/// dropping the transport's future. Once the exchange settles, a cancelled
/// token always wins: the call fails with [`CancelledError`] even if the
/// transport had already produced a response.
///
/// Every other outcome, including error statuses and network failures, is
/// returned as a [`RestResponse`].
///
/// # Errors
///
/// Returns [`CancelledError`] if and only if `cancellation` was cancelled
/// before the outcome was observed.
pub async fn execute<C: HttpClient>(
    http_client: &C,
    request: RestRequest,
    cancellation: &CancellationToken,
) -> Result<RestResponse, CancelledError> {
    let span = tracing::debug_span!(
        "rest_request",
        method = %request.method(),
        url = %request.url(),
    );

    async move {
        let settled = tokio::select! {
            biased;
            () = cancellation.cancelled() => None,
            settled = exchange(http_client, &request) => Some(settled),
        };

        let Some(settled) = settled.filter(|_| !cancellation.is_cancelled()) else {
            tracing::debug!("request cancelled");
            return CancelledSnafu {
                method: request.method().clone(),
                url: request.url().as_uri().clone(),
                token: cancellation.clone(),
            }
            .fail();
        };

        let response = match settled {
            Settled::Responded(response) => {
                tracing::debug!(
                    status = response.status_code(),
                    outcome = ?response.outcome(),
                    "request settled"
                );
                response
            }
            Settled::Failed(response) => {
                tracing::warn!(
                    error = response.error_message().unwrap_or_default(),
                    "request failed"
                );
                response
            }
        };

        Ok(response)
    }
    .instrument(span)
    .await
}

async fn exchange<C: HttpClient>(http_client: &C, request: &RestRequest) -> Settled {
    let response = match http_client.execute(request.to_http_request()).await {
        Ok(response) => response,
        Err(err) => return Settled::Failed(RestResponse::network_error(describe(&err))),
    };

    let status = response.status();
    let headers = response.headers();

    match response.body().await {
        Ok(body) => Settled::Responded(RestResponse::from_status(status, headers, &body)),
        Err(err) => Settled::Failed(RestResponse::unreadable_body(
            status,
            headers,
            describe(&err),
        )),
    }
}

fn describe<E: crate::Error>(err: &E) -> String {
    if err.is_aborted() {
        format!("Request aborted: {err}")
    } else {
        err.to_string()
    }
}
