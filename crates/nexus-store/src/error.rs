use nexus_types::ThreadId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Thread not found: {0}")]
    ThreadNotFound(ThreadId),
}

pub type Result<T> = std::result::Result<T, StoreError>;
