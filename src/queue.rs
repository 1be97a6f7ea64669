use std::collections::vec_deque::{IntoIter, Iter};
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::EmptyQueueError;

/// A first-in-first-out queue.
///
/// Elements are added at the tail with [`Queue::enqueue`] and removed from the
/// head with [`Queue::dequeue`]. The head is always the earliest inserted
/// element still held by the queue.
///
/// ```
/// use fifo::Queue;
///
/// let mut queue = Queue::from(vec!["a", "b"]);
/// queue.enqueue("c");
///
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.dequeue(), Ok("b"));
/// assert_eq!(queue.dequeue(), Ok("c"));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    inner: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            inner: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for at least `cap` elements.
    /// The queue still grows past `cap`.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: VecDeque::with_capacity(cap),
        }
    }

    /// Push a value onto the tail of the queue
    pub fn enqueue(&mut self, value: T) {
        self.inner.push_back(value);
    }

    /// Remove and return the value at the head of the queue.
    ///
    /// Returns [`EmptyQueueError`] if the queue holds no values, in which case
    /// the queue is left as it was.
    pub fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        match self.inner.pop_front() {
            Some(value) => Ok(value),
            None => {
                log::trace!("dequeue on empty queue");
                Err(EmptyQueueError)
            }
        }
    }

    /// Same as [`Queue::dequeue`] but for callers that expect the queue to run dry
    pub fn try_dequeue(&mut self) -> Option<T> {
        self.dequeue().ok()
    }

    /// The value at the head of the queue, if any
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Number of values in the queue
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` if the queue holds no values
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of values the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Drop every value in the queue
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            inner: values.into(),
        }
    }
}

impl<T> From<Queue<T>> for Vec<T> {
    fn from(queue: Queue<T>) -> Self {
        queue.inner.into()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
