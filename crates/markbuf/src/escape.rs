//! The escaping transform contract consumed by [`Builder`](crate::Builder).
//!
//! The builder is agnostic to which transform it drives; HTML escaping
//! ([`HtmlEscaper`](crate::HtmlEscaper)) is one implementation. A transform
//! is pure with respect to the builder: [`Escaper::scan`] classifies input,
//! [`Escaper::transform`] rewrites it into a caller-provided destination,
//! and [`Escaper::max_expansion`] promises a hard output bound the builder
//! relies on when retrying an undersized destination.

/// What happened after one [`Escaper::transform`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// The whole input was consumed.
    Complete {
        /// Bytes placed at the front of the destination. Never more than
        /// the destination's length.
        written: usize,
    },
    /// The destination could not hold the transformed input. Whatever was
    /// partially written is garbage and must not be committed.
    DestTooSmall,
}

/// An escaping transform, bound to a builder for the builder's lifetime.
///
/// Implementations carry three obligations the builder depends on:
///
/// - `transform` output for valid UTF-8 input is valid UTF-8;
/// - `Complete { written }` never reports more than the destination length;
/// - `DestTooSmall` is impossible once the destination holds at least
///   `max_expansion() * input.len()` bytes.
///
/// A violation is surfaced as
/// [`BuildError::EscaperContract`](crate::BuildError::EscaperContract),
/// never silently tolerated.
pub trait Escaper {
    /// Byte offset of the first unit needing transformation, or `None` when
    /// the whole input can be copied through untouched.
    ///
    /// Expected to be a bulk scan, asymptotically cheaper than running the
    /// transform over data that needs no change. The builder copies
    /// everything before the reported offset verbatim.
    fn scan(&self, input: &[u8]) -> Option<usize>;

    /// Hard upper bound on growth: transformed output never exceeds
    /// `max_expansion() * input.len()` bytes, for any input. At least 1.
    fn max_expansion(&self) -> usize;

    /// Rewrites `input` into `dest`.
    fn transform(&self, input: &[u8], dest: &mut [u8]) -> Transform;
}

impl<E: Escaper + ?Sized> Escaper for &E {
    fn scan(&self, input: &[u8]) -> Option<usize> {
        (**self).scan(input)
    }

    fn max_expansion(&self) -> usize {
        (**self).max_expansion()
    }

    fn transform(&self, input: &[u8], dest: &mut [u8]) -> Transform {
        (**self).transform(input, dest)
    }
}
