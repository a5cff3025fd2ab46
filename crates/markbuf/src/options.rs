/// Configuration for [`BuilderPool`](crate::BuilderPool).
///
/// # Examples
///
/// ```
/// use markbuf::{BuilderPool, HtmlEscaper, PoolOptions};
///
/// let pool = BuilderPool::with_options(
///     HtmlEscaper,
///     PoolOptions {
///         start_capacity: 4096,
///         ..PoolOptions::default()
///     },
/// );
/// # let _ = pool;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    /// Buffer capacity seeded into builders the pool constructs from
    /// scratch.
    ///
    /// Recycled builders keep whatever capacity their previous uses grew;
    /// this only affects brand-new instances. Sizing it near the typical
    /// rendered output avoids early growth steps.
    ///
    /// # Default
    ///
    /// `256`
    pub start_capacity: usize,

    /// Most idle builders the pool retains.
    ///
    /// A release past this bound drops the builder (and its capacity)
    /// instead of pooling it.
    ///
    /// # Default
    ///
    /// `64`
    pub max_idle: usize,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            start_capacity: 256,
            max_idle: 64,
        }
    }
}
