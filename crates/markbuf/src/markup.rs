//! Cached, already-safe output fragments.

use alloc::sync::Arc;

use crate::sink::Sink;

/// An owned snapshot of rendered output, safe to splice into another
/// builder without re-scanning or re-escaping.
///
/// Produced by [`Builder::to_markup`](crate::Builder::to_markup); consumed
/// by [`Builder::append_markup`](crate::Builder::append_markup) or written
/// straight to a [`Sink`]. The bytes are shared, so cloning is cheap —
/// snapshot once, splice into many documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    bytes: Arc<[u8]>,
}

impl Markup {
    pub(crate) fn from_committed(bytes: &[u8]) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Rendered length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for an empty fragment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the fragment to `sink` as one contiguous span.
    ///
    /// # Errors
    ///
    /// Forwards the sink's error unchanged.
    pub fn write_to<S: Sink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.write(&self.bytes)
    }
}
