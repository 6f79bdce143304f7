//! HTTP call to the answer endpoint.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`.
//! Server-side (SSR) and native tests: a stub that fails as a transport
//! error, since the endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an `AskError`; the caller decides what the
//! reader sees. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AskError;
#[cfg(feature = "hydrate")]
use super::types::{ChatQuery, is_success_status, parse_answer};

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "answer endpoint not available outside the browser";

/// Post `query` to `endpoint` and return the answer text.
///
/// `timeout_ms` bounds the whole exchange: sending, the status line, and
/// reading the body.
///
/// # Errors
///
/// Returns [`AskError::Status`] for a non-2xx response, and a transport
/// class error if the request fails, times out, or the body is malformed.
pub async fn post_chat_query(endpoint: &str, query: &str, timeout_ms: Option<u32>) -> Result<String, AskError> {
    #[cfg(feature = "hydrate")]
    {
        let exchange = async {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(&ChatQuery { query })
                .map_err(|e| AskError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AskError::Transport(e.to_string()))?;

            let status = resp.status();
            if !is_success_status(status) {
                return Err(AskError::Status { status });
            }
            let body = resp.text().await.map_err(|e| AskError::Transport(e.to_string()))?;
            parse_answer(&body)
        };
        let timer = timeout_ms.map(|ms| (ms, gloo_timers::future::TimeoutFuture::new(ms)));
        bounded(exchange, timer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, query, timeout_ms);
        Err(AskError::Transport(UNAVAILABLE.to_owned()))
    }
}

/// Run `exchange` to completion, or fail with [`AskError::Timeout`] if the
/// timer fires first. Without a timer the exchange is awaited as is.
#[cfg(any(test, feature = "hydrate"))]
async fn bounded<F, T>(exchange: F, timer: Option<(u32, T)>) -> Result<String, AskError>
where
    F: Future<Output = Result<String, AskError>>,
    T: Future<Output = ()>,
{
    use futures::future::{Either, select};

    let exchange = Box::pin(exchange);
    let Some((ms, timer)) = timer else {
        return exchange.await;
    };
    match select(exchange, Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(AskError::Timeout { ms }),
    }
}
