use std::time::Duration;

use awaitable_rest::{CancellationToken, RestClient};
use snafu::prelude::*;

#[snafu::report]
#[tokio::main]
pub async fn main() -> Result<(), snafu::Whatever> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .whatever_context("Usage: get <url> [timeout-seconds]")?;
    let timeout = std::env::args()
        .nth(2)
        .map(|secs| secs.parse::<u64>())
        .transpose()
        .whatever_context("Timeout must be a whole number of seconds")?
        .unwrap_or(10);

    let client = RestClient::builder()
        .http_client(reqwest::Client::new())
        .build();

    let token = CancellationToken::new();
    let timer = tokio::spawn({
        let token = token.clone();
        async move {
            tokio::time::sleep(Duration::from_secs(timeout)).await;
            token.cancel();
        }
    });

    let response = client
        .get_with_cancellation(url.as_str(), &token)
        .await
        .whatever_context("Request timed out")?;
    timer.abort();

    println!("status:   {}", response.status_code());
    println!("outcome:  {:?}", response.outcome());
    if let Some(error) = response.error_message() {
        println!("error:    {error}");
    }
    if let Some(headers) = response.headers() {
        for (name, value) in headers {
            println!("{name}: {}", value.to_str().unwrap_or("<binary>"));
        }
    }
    if response.has_body() {
        println!();
        println!("{}", response.text().unwrap_or_default());
    }

    Ok(())
}
