//! Outbound calls to the query service.
//!
//! Every call runs on its own task and reports back exactly once through the
//! service channel, tagged with the cycle id it was spawned for.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{extract_error_detail, QueryRequest, ResponseBody, QUERY_ENDPOINT};
use crate::utils::url::construct_api_url;

/// Shown when the exchange could not be completed at all.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No usable response: connection failure, unreadable body, or a success
    /// body that is not JSON.
    Transport,
    /// The service answered with a non-success status.
    Service { status: u16, detail: Option<String> },
    /// The configured timeout elapsed first.
    TimedOut { after: Duration },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Transport => f.write_str(TRANSPORT_ERROR_MESSAGE),
            QueryError::Service {
                detail: Some(detail),
                ..
            } => f.write_str(detail),
            QueryError::Service { status, .. } => write!(f, "HTTP {status}"),
            QueryError::TimedOut { after } => {
                write!(f, "Request timed out after {}s", after.as_secs())
            }
        }
    }
}

impl Error for QueryError {}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Answered(ResponseBody),
    Failed(QueryError),
}

/// Map a completed HTTP exchange onto an outcome.
///
/// `body` is `None` when the body could not be read.
pub fn resolve_response(status: StatusCode, body: Option<&[u8]>) -> QueryOutcome {
    let parsed = body.and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());

    if status.is_success() {
        return match parsed {
            Some(value) => QueryOutcome::Answered(ResponseBody::from_value(value)),
            None => QueryOutcome::Failed(QueryError::Transport),
        };
    }

    QueryOutcome::Failed(QueryError::Service {
        status: status.as_u16(),
        detail: parsed.as_ref().and_then(extract_error_detail),
    })
}

async fn perform_exchange(
    client: &reqwest::Client,
    url: &str,
    request: &QueryRequest,
) -> QueryOutcome {
    let response = match client
        .post(url)
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, url, "query request failed");
            return QueryOutcome::Failed(QueryError::Transport);
        }
    };

    let status = response.status();
    let body = match response.bytes().await {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            debug!(error = %err, %status, "failed to read query response body");
            None
        }
    };

    resolve_response(status, body.as_deref())
}

/// Run one query to completion. Never fails; every problem becomes a
/// [`QueryOutcome::Failed`].
pub async fn execute_query(
    client: &reqwest::Client,
    base_url: &str,
    request: &QueryRequest,
    timeout: Option<Duration>,
) -> QueryOutcome {
    let url = construct_api_url(base_url, QUERY_ENDPOINT);
    let exchange = perform_exchange(client, &url, request);

    match timeout {
        Some(limit) => match tokio::time::timeout(limit, exchange).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(?limit, url = %url, "query timed out");
                QueryOutcome::Failed(QueryError::TimedOut { after: limit })
            }
        },
        None => exchange.await,
    }
}

#[derive(Debug, Clone)]
pub struct QueryParams {
    pub client: reqwest::Client,
    pub base_url: String,
    pub request: QueryRequest,
    pub timeout: Option<Duration>,
    pub cycle_id: u64,
}

#[derive(Clone)]
pub struct QueryService {
    tx: mpsc::UnboundedSender<(QueryOutcome, u64)>,
}

impl QueryService {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(QueryOutcome, u64)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn spawn_query(&self, params: QueryParams) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let QueryParams {
                client,
                base_url,
                request,
                timeout,
                cycle_id,
            } = params;

            debug!(cycle_id, "query started");
            let outcome = execute_query(&client, &base_url, &request, timeout).await;
            debug!(cycle_id, ?outcome, "query finished");
            let _ = tx.send((outcome, cycle_id));
        });
    }

    #[cfg(test)]
    pub fn send_for_test(&self, outcome: QueryOutcome, cycle_id: u64) {
        let _ = self.tx.send((outcome, cycle_id));
    }
}
