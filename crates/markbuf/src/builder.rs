//! The builder: one buffer, one escaper, two append paths.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    buffer::Buffer,
    error::BuildError,
    escape::{Escaper, Transform},
    html::HtmlEscaper,
    markup::Markup,
    sink::Sink,
};

// Multiplier for the first, optimistic transform reservation. Real-world
// text rarely approaches the worst-case expansion, so the first reservation
// stays near the exact output size.
const OPTIMISTIC_FACTOR: usize = 2;

/// Incremental builder for escaped output.
///
/// Content arrives through two entry points: [`Builder::append_raw`] copies
/// pre-encoded fragments verbatim, and [`Builder::append_text`] escapes on
/// the way in, skipping the transform entirely when a bulk scan proves the
/// input clean. One growable buffer backs the whole composition and is
/// retained across [`Builder::clear`], so a reused builder stops
/// allocating once it has seen its typical output size.
///
/// The escaper is fixed at construction; a document needing two encodings
/// uses two builders. A builder is single-owner while active, and views
/// returned by [`Builder::as_bytes`]/[`Builder::as_str`] borrow it, so
/// mutation while a view is live is rejected at compile time.
///
/// # Examples
///
/// ```
/// use markbuf::Builder;
///
/// let mut out = Builder::html();
/// out.append_raw("<b>")?;
/// out.append_text("a&b")?;
/// out.append_raw("</b>")?;
/// assert_eq!(out.as_str(), "<b>a&amp;b</b>");
/// # Ok::<(), markbuf::BuildError>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder<E = HtmlEscaper> {
    buf: Buffer,
    escaper: E,
}

impl Builder<HtmlEscaper> {
    /// A builder bound to the bundled [`HtmlEscaper`].
    #[must_use]
    pub fn html() -> Self {
        Self::new(HtmlEscaper)
    }
}

impl<E: Escaper> Builder<E> {
    /// Creates an empty builder bound to `escaper` for its lifetime.
    pub fn new(escaper: E) -> Self {
        Self {
            buf: Buffer::new(),
            escaper,
        }
    }

    /// Like [`Builder::new`], with a starting capacity hint for the buffer.
    pub fn with_capacity(escaper: E, capacity: usize) -> Self {
        Self {
            buf: Buffer::with_capacity(capacity),
            escaper,
        }
    }

    /// Appends pre-encoded content verbatim.
    ///
    /// The fragment must already be safe for the target encoding; it is
    /// never re-escaped. Structurally constant markup belongs here.
    ///
    /// # Errors
    ///
    /// Buffer growth failures ([`BuildError::AllocFailed`],
    /// [`BuildError::CapacityOverflow`]).
    pub fn append_raw(&mut self, fragment: &str) -> Result<(), BuildError> {
        self.buf.push_bytes(fragment.as_bytes())
    }

    /// Re-appends cached output without re-scanning or re-escaping.
    ///
    /// # Errors
    ///
    /// Buffer growth failures, as for [`Builder::append_raw`].
    pub fn append_markup(&mut self, markup: &Markup) -> Result<(), BuildError> {
        self.buf.push_bytes(markup.as_bytes())
    }

    /// Escapes `text` and appends the result.
    ///
    /// A bulk scan classifies the input first: clean text is copied once
    /// and the transform never runs. Otherwise the clean prefix is copied
    /// verbatim and the remainder is transformed into a reservation sized
    /// optimistically at twice its length, retried exactly once at the
    /// escaper's guaranteed worst-case size if that turns out too small.
    ///
    /// # Errors
    ///
    /// Buffer growth failures, or [`BuildError::EscaperContract`] if the
    /// bound escaper breaks its declared bounds.
    pub fn append_text(&mut self, text: &str) -> Result<(), BuildError> {
        let input = text.as_bytes();
        let Some(first) = self.escaper.scan(input) else {
            return self.buf.push_bytes(input);
        };
        // An offset past the end classifies everything as clean.
        if first >= input.len() {
            return self.buf.push_bytes(input);
        }
        let (clean, tail) = input.split_at(first);
        self.buf.push_bytes(clean)?;
        self.transform_tail(tail)
    }

    fn transform_tail(&mut self, tail: &[u8]) -> Result<(), BuildError> {
        let optimistic = tail
            .len()
            .checked_mul(OPTIMISTIC_FACTOR)
            .ok_or(BuildError::CapacityOverflow)?;
        let dest = self.buf.reserve(optimistic)?;
        match self.escaper.transform(tail, dest) {
            Transform::Complete { written } if written <= optimistic => {
                self.buf.commit(written);
                Ok(())
            }
            Transform::Complete { .. } => Err(BuildError::EscaperContract),
            Transform::DestTooSmall => {
                // The optimistic reservation is discarded, never committed.
                // The worst-case size cannot be undersized for a conforming
                // escaper, so a second failure is a contract violation.
                let bound = tail
                    .len()
                    .checked_mul(self.escaper.max_expansion())
                    .ok_or(BuildError::CapacityOverflow)?;
                let dest = self.buf.reserve(bound)?;
                match self.escaper.transform(tail, dest) {
                    Transform::Complete { written } if written <= bound => {
                        self.buf.commit(written);
                        Ok(())
                    }
                    Transform::Complete { .. } | Transform::DestTooSmall => {
                        Err(BuildError::EscaperContract)
                    }
                }
            }
        }
    }

    /// The committed output. Zero-copy; borrows the builder.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// The committed output as text.
    ///
    /// # Panics
    ///
    /// Panics if the bound escaper emitted invalid UTF-8, which conforming
    /// escapers never do.
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.buf.as_slice()).expect("escaper emitted invalid UTF-8")
    }

    /// Copies the committed output into an independently owned `Vec`.
    ///
    /// The one place an extra allocation is accepted: the copy outlives the
    /// builder, which can then be cleared and reused.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.buf.as_slice().to_vec()
    }

    /// Snapshots the committed output as cached, already-safe content.
    ///
    /// Like [`Builder::to_vec`], but the snapshot can be spliced into other
    /// builders via [`Builder::append_markup`] without being re-escaped.
    #[must_use]
    pub fn to_markup(&self) -> Markup {
        Markup::from_committed(self.buf.as_slice())
    }

    /// Writes the committed output to `sink` as one contiguous span.
    ///
    /// # Errors
    ///
    /// Forwards the sink's error unchanged.
    pub fn write_to<S: Sink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.write(self.buf.as_slice())
    }

    /// Discards committed output. Buffer capacity is retained.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Committed length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been appended since construction or
    /// the last [`Builder::clear`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Usable capacity of the backing buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

/// Formatted writes are escaped on the way in, so interpolated data cannot
/// break out of the surrounding markup.
///
/// ```
/// use core::fmt::Write;
/// use markbuf::Builder;
///
/// let mut out = Builder::html();
/// write!(out, "{} & {}", 1, 2)?;
/// assert_eq!(out.as_str(), "1 &amp; 2");
/// # Ok::<(), core::fmt::Error>(())
/// ```
impl<E: Escaper> fmt::Write for Builder<E> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_text(s).map_err(|_| fmt::Error)
    }
}
