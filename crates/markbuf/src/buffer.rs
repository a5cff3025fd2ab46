//! Append-only byte storage with an explicit reserve/commit protocol.
//!
//! [`Buffer`] is the single backing store for builder output. Committed
//! bytes live in `[0, len)`; the region past `len` is scratch that callers
//! fill through [`Buffer::reserve`] and make durable with
//! [`Buffer::commit`]. Clearing never releases storage, so capacity grown
//! by one use carries into the next.

use alloc::vec::Vec;
use core::cmp;

use crate::error::BuildError;

/// Capacity floor for the first allocation.
const MIN_CAPACITY: usize = 64;

/// Growable contiguous byte storage with a committed-length cursor.
///
/// Growth is geometric (doubling, with a floor that satisfies the immediate
/// request), keeping amortized copy cost constant per appended byte. All
/// storage is kept initialized, so the scratch region is plain `&mut [u8]`.
#[derive(Debug, Default)]
pub struct Buffer {
    // `storage.len()` is the usable capacity; the committed region is
    // `storage[..len]`.
    storage: Vec<u8>,
    len: usize,
    // Size of the outstanding reservation, consumed by `commit`.
    reserved: usize,
}

impl Buffer {
    /// Creates an empty buffer. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer with `capacity` bytes pre-allocated.
    ///
    /// The capacity is a hint: if the initial allocation fails, the buffer
    /// starts empty and grows on first use instead.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        if capacity > 0 {
            let _ = buf.grow_to(capacity);
        }
        buf
    }

    /// Bytes committed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Usable capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns a writable slice of exactly `n` bytes at the write cursor.
    ///
    /// Does not advance the committed length; call [`Buffer::commit`] with
    /// the number of bytes actually written. A reservation left uncommitted
    /// is discarded by the next `reserve` or [`Buffer::push_bytes`].
    ///
    /// # Errors
    ///
    /// [`BuildError::AllocFailed`] when growth is needed and the allocator
    /// refuses it, [`BuildError::CapacityOverflow`] when `len + n` does not
    /// fit in `usize`. The committed region is untouched in both cases.
    pub fn reserve(&mut self, n: usize) -> Result<&mut [u8], BuildError> {
        let needed = self
            .len
            .checked_add(n)
            .ok_or(BuildError::CapacityOverflow)?;
        if needed > self.storage.len() {
            self.grow_to(needed)?;
        }
        self.reserved = n;
        Ok(&mut self.storage[self.len..needed])
    }

    /// Makes `written` bytes of the last reservation durable.
    ///
    /// # Panics
    ///
    /// Panics if `written` exceeds the outstanding reservation. That is
    /// caller misuse, not an environmental failure; tolerating it would
    /// expose scratch bytes as committed data.
    pub fn commit(&mut self, written: usize) {
        assert!(
            written <= self.reserved,
            "commit of {written} bytes exceeds reservation of {} bytes",
            self.reserved
        );
        self.len += written;
        self.reserved = 0;
    }

    /// Copies `bytes` verbatim after the committed region.
    ///
    /// Zero-length input returns without touching storage.
    ///
    /// # Errors
    ///
    /// Propagates [`Buffer::reserve`] failures.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), BuildError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let dest = self.reserve(bytes.len())?;
        dest.copy_from_slice(bytes);
        self.commit(bytes.len());
        Ok(())
    }

    /// The committed region, `[0, len)`.
    ///
    /// The slice borrows the buffer's storage; it is valid until the next
    /// mutating call.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Forgets committed data and any outstanding reservation. Capacity is
    /// retained.
    pub fn clear(&mut self) {
        self.len = 0;
        self.reserved = 0;
    }

    // Grows storage so at least `needed` bytes are usable. The new region
    // is zero-filled so every byte of storage stays initialized.
    fn grow_to(&mut self, needed: usize) -> Result<(), BuildError> {
        let target = cmp::max(
            cmp::max(self.storage.len().saturating_mul(2), needed),
            MIN_CAPACITY,
        );
        let additional = target - self.storage.len();
        self.storage
            .try_reserve_exact(additional)
            .map_err(|_| BuildError::AllocFailed { requested: target })?;
        self.storage.resize(target, 0);
        Ok(())
    }
}
