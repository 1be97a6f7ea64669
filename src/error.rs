//! Errors

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Returned by [`Queue::dequeue`](crate::Queue::dequeue) when there is nothing to remove
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("queue is empty")]
pub struct EmptyQueueError;

/// Fifo errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tried to remove an element from an empty queue
    #[error(transparent)]
    EmptyQueue(#[from] EmptyQueueError),

    /// Serde json error
    #[error("failed to decode snapshot: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Postcard error
    #[error("failed to decode snapshot: {0}")]
    Postcard(#[from] postcard::Error),

    /// Invalid serializer
    #[error("invalid serializer, the serializer was encoded incorrectly {0}")]
    InvalidSerializer(u8),

    /// The snapshot is missing its serializer tag
    #[error("malformed snapshot")]
    MalformedSnapshot,
}
