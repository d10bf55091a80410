use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Body, Method, Request, StatusCode};
use tracing::{debug, warn};

use crate::jobs::{Job, JobKind};
use crate::metrics::Outcome;

use super::transport::Transport;

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";
pub(crate) const CUSTOM_HEADER_NAME: &str = "x-custom-header";
pub(crate) const CUSTOM_HEADER_VALUE: &str = "myvalue";

/// How a completed exchange with a non-200 status is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Any exchange without a transport error counts as a success.
    #[default]
    Lenient,
    /// Only `200 OK` counts as a success.
    Strict,
}

/// Builds the HTTP request for `job`: `POST` with payload and custom header
/// for writes, bare `GET` for reads.
#[must_use]
pub fn build_request(job: &Job) -> Request {
    let method = if job.is_write() {
        Method::POST
    } else {
        Method::GET
    };
    let mut request = Request::new(method, job.target().clone());
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    if let JobKind::Write { payload } = job.kind() {
        request.headers_mut().insert(
            HeaderName::from_static(CUSTOM_HEADER_NAME),
            HeaderValue::from_static(CUSTOM_HEADER_VALUE),
        );
        *request.body_mut() = Some(Body::from(payload.clone()));
        debug!("POST: {} -> {}", job.target(), payload);
    }

    request
}

/// Runs one job. Transport errors become [`Outcome::Failure`] and are never retried.
pub async fn invoke<T>(transport: &T, job: &Job, policy: StatusPolicy) -> Outcome
where
    T: Transport + ?Sized,
{
    let request = build_request(job);
    let exchange = match transport.execute(request).await {
        Ok(exchange) => exchange,
        Err(err) => {
            debug!(timed_out = err.is_timeout(), "{}: {}", job.target(), err);
            return Outcome::Failure;
        }
    };

    if exchange.status == StatusCode::OK.as_u16() {
        debug!(
            "{}: {} -> resp: {}, {}",
            method_label(job),
            job.target(),
            exchange.status,
            exchange.body_bytes
        );
        return Outcome::success(exchange.body_bytes);
    }

    warn!(
        "{}: {} -> resp: {}",
        method_label(job),
        job.target(),
        exchange.status
    );
    match policy {
        StatusPolicy::Lenient => Outcome::success(exchange.body_bytes),
        StatusPolicy::Strict => Outcome::Failure,
    }
}

const fn method_label(job: &Job) -> &'static str {
    if job.is_write() { "POST" } else { "GET" }
}
