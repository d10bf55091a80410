use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unclosed action on template line {line}.")]
    UnclosedAction { line: usize },
    #[error("Empty action on template line {line}.")]
    EmptyAction { line: usize },
    #[error("Unknown template variable '{name}' on line {line}.")]
    UnknownVariable { name: String, line: usize },
    #[error("Template produced no request lines.")]
    NoJobs,
    #[error("Invalid target '{target}' on rendered line {line}: {source}")]
    InvalidTarget {
        target: String,
        line: usize,
        #[source]
        source: url::ParseError,
    },
}
