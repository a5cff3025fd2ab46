//! Where rendered output goes.

use alloc::vec::Vec;
use core::convert::Infallible;

/// Consumes rendered output, one contiguous span per call.
///
/// No buffering contract is imposed: implementations may write through or
/// accumulate. The builder and [`Markup`](crate::Markup) forward their
/// whole committed region in a single call.
pub trait Sink {
    /// Error surfaced when the sink cannot accept a span.
    type Error;

    /// Accepts one contiguous span of rendered output.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the builder forwards the error unchanged.
    fn write(&mut self, chunk: &[u8]) -> Result<(), Self::Error>;
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    fn write(&mut self, chunk: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(chunk);
        Ok(())
    }
}

/// Adapter driving any [`std::io::Write`] as a [`Sink`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W>(W);

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    fn write(&mut self, chunk: &[u8]) -> Result<(), std::io::Error> {
        self.0.write_all(chunk)
    }
}
