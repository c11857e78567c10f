use std::sync::atomic::{AtomicU64, Ordering};

use crate::prelude::*;

/// Locally tracked account nonce, shared by all sending tasks.
#[derive(Debug, Default)]
pub struct NonceCounter(AtomicU64);

impl NonceCounter {
    pub fn new(nonce: Nonce) -> Self {
        Self(AtomicU64::new(nonce))
    }

    /// Returns the nonce to use for the next submission and advances the counter.
    pub fn next(&self) -> Nonce {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    pub fn current(&self) -> Nonce {
        self.0.load(Ordering::SeqCst)
    }

    /// Overwrites the counter with the nonce reported by the network.
    pub fn resync(&self, nonce: Nonce) {
        self.0.store(nonce, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_consecutive_nonces() {
        let counter = NonceCounter::new(5);
        assert_eq!(counter.next(), 5);
        assert_eq!(counter.next(), 6);
        assert_eq!(counter.current(), 7);
    }

    #[test]
    fn resync_overrides_local_count() {
        let counter = NonceCounter::new(40);
        counter.next();
        counter.resync(12);
        assert_eq!(counter.next(), 12);
    }
}
