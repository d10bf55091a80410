use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Request};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{HttpError, TransportError};

/// Status and drained body size of one completed exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub status: u16,
    pub body_bytes: u64,
}

/// Issues one request and reports what came back.
#[async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent or its body cannot be read.
    async fn execute(&self, request: Request) -> Result<Exchange, TransportError>;
}

#[derive(Debug, Clone, Copy)]
pub struct TransportConfig {
    pub timeout: Duration,
    /// Upper bound for both idle pooled connections and in-flight requests.
    pub pool_size: usize,
}

/// `reqwest` client with a bounded number of concurrent requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    permits: Arc<Semaphore>,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns an error when the pool size is zero or the client cannot be built.
    pub fn build(config: TransportConfig) -> Result<Self, HttpError> {
        if config.pool_size == 0 {
            return Err(HttpError::EmptyPool);
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_size)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;

        Ok(Self {
            client,
            permits: Arc::new(Semaphore::new(config.pool_size)),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Exchange, TransportError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|err| TransportError::Unavailable {
                reason: err.to_string(),
            })?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| TransportError::Send { source: err })?;
        let status = response.status().as_u16();
        let body_bytes = drain_response_body(response)
            .await
            .map_err(|err| TransportError::Body { source: err })?;

        Ok(Exchange { status, body_bytes })
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

/// Transports handed to dispatch workers.
#[derive(Debug)]
pub enum TransportPool<T> {
    /// One transport (and connection pool) cloned to every worker.
    Shared(Arc<T>),
    /// A private transport per worker, indexed by worker number.
    PerWorker(Vec<Arc<T>>),
}

impl<T> TransportPool<T> {
    #[must_use]
    pub fn shared(transport: T) -> Self {
        Self::Shared(Arc::new(transport))
    }

    #[must_use]
    pub fn per_worker(transports: Vec<T>) -> Self {
        Self::PerWorker(transports.into_iter().map(Arc::new).collect())
    }

    /// Transport for `worker`, or `None` when no private transport exists for it.
    #[must_use]
    pub fn for_worker(&self, worker: usize) -> Option<Arc<T>> {
        match self {
            Self::Shared(transport) => Some(Arc::clone(transport)),
            Self::PerWorker(transports) => transports.get(worker).map(Arc::clone),
        }
    }
}

impl TransportPool<HttpTransport> {
    /// Builds one shared client, or `workers` private clients when `per_worker` is set.
    ///
    /// # Errors
    ///
    /// Returns an error when any client cannot be built.
    pub fn build_http(
        config: TransportConfig,
        per_worker: bool,
        workers: usize,
    ) -> Result<Self, HttpError> {
        if !per_worker {
            return Ok(Self::shared(HttpTransport::build(config)?));
        }
        debug!("Building {} per-worker HTTP clients", workers);
        let transports = (0..workers)
            .map(|_| HttpTransport::build(config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::per_worker(transports))
    }
}
