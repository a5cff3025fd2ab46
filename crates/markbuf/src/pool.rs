//! Reuse of builder instances and the capacity they grew.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use parking_lot::Mutex;

use crate::{builder::Builder, escape::Escaper, html::HtmlEscaper, options::PoolOptions};

/// A free list of idle [`Builder`]s.
///
/// Acquire and release are the only synchronized operations; a checked-out
/// builder is exclusively owned by its holder until the guard drops. Every
/// instance handed out is empty, with buffer capacity carried over from
/// earlier cycles, so steady-state use stops allocating.
///
/// The pool is an explicit component: construct it at the composition root
/// and pass it to whatever needs builders. It is not a global.
///
/// # Examples
///
/// ```
/// use markbuf::{BuilderPool, HtmlEscaper};
///
/// let pool = BuilderPool::new(HtmlEscaper);
/// {
///     let mut page = pool.acquire();
///     page.append_text("a&b")?;
///     assert_eq!(page.as_str(), "a&amp;b");
/// } // guard dropped: cleared and returned to the pool
/// assert!(pool.acquire().is_empty());
/// # Ok::<(), markbuf::BuildError>(())
/// ```
#[derive(Debug)]
pub struct BuilderPool<E = HtmlEscaper> {
    escaper: E,
    options: PoolOptions,
    idle: Mutex<Vec<Builder<E>>>,
}

impl<E: Escaper + Clone> BuilderPool<E> {
    /// Creates an empty pool vending builders bound to `escaper`.
    pub fn new(escaper: E) -> Self {
        Self::with_options(escaper, PoolOptions::default())
    }

    /// Creates a pool with explicit sizing.
    pub fn with_options(escaper: E, options: PoolOptions) -> Self {
        Self {
            escaper,
            options,
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Hands out an idle builder, constructing a fresh one when the free
    /// list is empty.
    ///
    /// The result is always empty; recycled instances keep their grown
    /// capacity. No instance is ever handed to two holders at once.
    pub fn acquire(&self) -> PooledBuilder<'_, E> {
        let recycled = self.idle.lock().pop();
        let builder = recycled.unwrap_or_else(|| {
            Builder::with_capacity(self.escaper.clone(), self.options.start_capacity)
        });
        debug_assert!(builder.is_empty());
        PooledBuilder {
            pool: self,
            builder: Some(builder),
        }
    }

    /// Idle builders currently pooled.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    fn release(&self, mut builder: Builder<E>) {
        builder.clear();
        let mut idle = self.idle.lock();
        if idle.len() < self.options.max_idle {
            idle.push(builder);
        }
    }
}

/// Exclusive handle to a pooled [`Builder`].
///
/// Dereferences to the builder. Dropping the guard clears the builder and
/// returns it to the pool; release *is* giving up the guard, so using a
/// builder after release is unrepresentable.
#[derive(Debug)]
pub struct PooledBuilder<'pool, E: Escaper + Clone> {
    pool: &'pool BuilderPool<E>,
    builder: Option<Builder<E>>,
}

impl<E: Escaper + Clone> PooledBuilder<'_, E> {
    /// Detaches the builder from the pool; it will not be recycled.
    #[must_use]
    pub fn detach(mut self) -> Builder<E> {
        self.builder.take().expect("pooled builder already detached")
    }
}

impl<E: Escaper + Clone> Deref for PooledBuilder<'_, E> {
    type Target = Builder<E>;

    fn deref(&self) -> &Builder<E> {
        self.builder.as_ref().expect("pooled builder already detached")
    }
}

impl<E: Escaper + Clone> DerefMut for PooledBuilder<'_, E> {
    fn deref_mut(&mut self) -> &mut Builder<E> {
        self.builder.as_mut().expect("pooled builder already detached")
    }
}

impl<E: Escaper + Clone> Drop for PooledBuilder<'_, E> {
    fn drop(&mut self) {
        if let Some(builder) = self.builder.take() {
            self.pool.release(builder);
        }
    }
}
