use thiserror::Error;

/// Failures surfaced by buffer and builder operations.
///
/// Caller-contract violations (such as committing more bytes than were
/// reserved) are programming errors and panic instead of returning a
/// variant here; see [`Buffer::commit`](crate::Buffer::commit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Growing the buffer failed because the allocator refused the request.
    ///
    /// The failed growth is not retried internally; whether to retry is the
    /// caller's decision.
    #[error("failed to allocate {requested} bytes of buffer storage")]
    AllocFailed {
        /// Total capacity, in bytes, the buffer attempted to reach.
        requested: usize,
    },

    /// A size computation exceeded `usize::MAX`.
    #[error("buffer size arithmetic overflowed")]
    CapacityOverflow,

    /// The bound escaper broke its contract: it reported an output larger
    /// than the destination it was given, or still reported the destination
    /// too small at its own declared worst-case size.
    #[error("escaper violated its declared worst-case expansion bound")]
    EscaperContract,
}
