//! Core library for the `phaseload` CLI.
//!
//! `phaseload` drives an HTTP endpoint through a warmup phase and a
//! measurement phase. Each phase generates a fixed sequence of request jobs
//! (from the endpoint itself or from a request template), splits them evenly
//! across concurrent workers, and reports success counts, bytes transferred,
//! transaction rate, and throughput.
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod harness;
pub mod http;
pub mod jobs;
pub mod logger;
pub mod metrics;
