//! Incremental, allocation-minimizing assembly of escaped markup.
//!
//! [`Builder`] accumulates output from two kinds of input: pre-encoded
//! fragments appended verbatim ([`Builder::append_raw`]) and text escaped
//! on the way in ([`Builder::append_text`]). One growable byte buffer backs
//! the whole composition; a bulk scan routes already-clean text around the
//! escape transform, and an undersized optimistic reservation is retried
//! exactly once at the transform's guaranteed worst-case size. Rendered
//! output is exposed as a borrowed view, an owned [`Markup`] snapshot, or
//! one contiguous write to a [`Sink`].
//!
//! The escaping transform is pluggable through the [`Escaper`] trait and
//! bound per builder; [`HtmlEscaper`] is the bundled implementation.
//! [`BuilderPool`] (default `pool` feature, implies `std`) recycles
//! builders so buffer capacity grown by one use survives into the next.
//!
//! ```
//! use markbuf::Builder;
//!
//! let mut out = Builder::html();
//! out.append_raw("<b>")?;
//! out.append_text("a&b")?;
//! out.append_raw("</b>")?;
//! assert_eq!(out.as_str(), "<b>a&amp;b</b>");
//! # Ok::<(), markbuf::BuildError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod builder;
mod error;
mod escape;
mod html;
mod markup;
#[cfg(feature = "pool")]
mod options;
#[cfg(feature = "pool")]
mod pool;
mod sink;

#[cfg(test)]
mod tests;

pub use buffer::Buffer;
pub use builder::Builder;
pub use error::BuildError;
pub use escape::{Escaper, Transform};
pub use html::HtmlEscaper;
pub use markup::Markup;
#[cfg(feature = "pool")]
pub use options::PoolOptions;
#[cfg(feature = "pool")]
pub use pool::{BuilderPool, PooledBuilder};
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::Sink;
