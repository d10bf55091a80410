//! Request jobs: the endpoint, template parsing, and sequence generation.
mod endpoint;
mod generator;
mod job;
mod template;


pub use endpoint::Endpoint;
pub use generator::{JobGenerator, JobSource, RANDOM_TOKEN, RANDOM_UPPER_BOUND};
pub use job::{Job, JobKind};
pub use template::{JobTemplate, WRITE_DELIMITER, render_template};
