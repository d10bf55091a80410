use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No transport available for worker {worker}.")]
    MissingTransport { worker: usize },
    #[error("Workers stopped after delivering {received} of {expected} results.")]
    ResultsMissing { received: usize, expected: usize },
    #[error("Worker task failed: {source}")]
    WorkerJoin {
        #[source]
        source: tokio::task::JoinError,
    },
}
