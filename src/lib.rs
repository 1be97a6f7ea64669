#![deny(missing_docs)]
//! Fifo is a first-in-first-out queue with a checked dequeue
//!
//! ```
//! use fifo::{EmptyQueueError, Queue};
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! assert_eq!(queue.dequeue(), Err(EmptyQueueError));
//! ```

pub mod error;
mod queue;
mod serializer;

pub use error::{EmptyQueueError, Error, Result};
pub use queue::Queue;
pub use serializer::Serializer;
