mod app;
mod config;
mod dispatch;
mod http;
mod template;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use http::{HttpError, TransportError};
pub use template::TemplateError;
pub use validation::ValidationError;
