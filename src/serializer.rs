use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::Queue;

/// The encoding used for the payload of a queue snapshot.
/// The discriminant is written as the first byte of the snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Serializer {
    /// Plain text
    Json = 0,
    /// Binary
    Postcard = 1,
}

impl Serializer {
    /// Write the tag byte followed by the queue content
    fn encode<T: Serialize>(self, queue: &Queue<T>) -> Result<Vec<u8>> {
        let mut bytes = vec![self as u8];
        match self {
            Self::Json => serde_json::to_writer(&mut bytes, queue)?,
            Self::Postcard => bytes = postcard::to_extend(queue, bytes)?,
        }
        Ok(bytes)
    }

    /// Read a queue from a payload (tag byte already stripped).
    /// The whole payload must be consumed.
    fn decode<T: DeserializeOwned>(self, payload: &[u8]) -> Result<Queue<T>> {
        match self {
            Self::Json => Ok(serde_json::from_slice(payload)?),
            Self::Postcard => {
                let (queue, rest) = postcard::take_from_bytes(payload)?;
                if !rest.is_empty() {
                    log::debug!("{} trailing bytes after postcard payload", rest.len());
                    return Err(Error::MalformedSnapshot);
                }
                Ok(queue)
            }
        }
    }
}

impl TryFrom<u8> for Serializer {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        [Self::Json, Self::Postcard]
            .into_iter()
            .find(|ser| *ser as u8 == tag)
            .ok_or(Error::InvalidSerializer(tag))
    }
}

impl<T: Serialize> Queue<T> {
    /// Encode the content of the queue, head first, prefixed with the serializer byte.
    ///
    /// ```
    /// use fifo::{Queue, Serializer};
    ///
    /// let queue = Queue::from(vec![1u32, 2, 3]);
    /// let snapshot = queue.snapshot(Serializer::Json).unwrap();
    /// assert_eq!(&snapshot[..], b"\x00[1,2,3]");
    /// ```
    pub fn snapshot(&self, serializer: Serializer) -> Result<Box<[u8]>> {
        let bytes = serializer.encode(self)?;
        log::debug!("snapshot of {} values ({serializer:?}, {} bytes)", self.len(), bytes.len());
        Ok(bytes.into_boxed_slice())
    }
}

impl<T: DeserializeOwned> Queue<T> {
    /// Rebuild a queue from a snapshot created by [`Queue::snapshot`].
    /// Bytes left over after the payload are rejected.
    pub fn restore(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let Some((&tag, payload)) = bytes.as_ref().split_first() else {
            return Err(Error::MalformedSnapshot);
        };
        let serializer = Serializer::try_from(tag)?;
        let queue: Self = serializer.decode(payload)?;
        log::debug!("restored {} values ({serializer:?})", queue.len());
        Ok(queue)
    }
}
