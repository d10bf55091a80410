pub(crate) const DEFAULT_USER_AGENT: &str = concat!("phaseload/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_PORT: u16 = 9999;
pub(crate) const DEFAULT_INVOCATIONS: usize = 10;
/// Idle and in-flight connections per transport.
pub(crate) const DEFAULT_POOL_SIZE: usize = 20;
