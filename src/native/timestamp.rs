use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_TIME: AtomicU64 = AtomicU64::new(0);

/// Modification stamp.
///
/// Every call to [`TimeStamp::modified`] draws a fresh value from a global
/// counter, so stamps of different props are comparable.
#[derive(Debug)]
pub struct TimeStamp {
    time: AtomicU64,
}

impl TimeStamp {
    /// Creates a stamp that is already marked as modified.
    #[must_use]
    pub fn new() -> Self {
        let stamp = Self { time: AtomicU64::new(0) };
        stamp.modified();
        stamp
    }

    #[inline]
    pub fn modified(&self) {
        let now = GLOBAL_TIME.fetch_add(1, Ordering::Relaxed) + 1;
        self.time.store(now, Ordering::Release);
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> u64 {
        self.time.load(Ordering::Acquire)
    }
}

impl Default for TimeStamp {
    fn default() -> Self {
        Self::new()
    }
}
