//! Request execution: transports, single-job invocation, and the dispatch engine.
mod dispatch;
mod invoke;
mod transport;


pub use dispatch::{Dispatcher, partition};
pub use invoke::{StatusPolicy, build_request, invoke};
pub use transport::{Exchange, HttpTransport, Transport, TransportConfig, TransportPool};
