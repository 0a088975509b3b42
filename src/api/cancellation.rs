use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{ChartError, ChartResult};

/// Shared cancellation signal checked by [`ChartDataEngine`](super::ChartDataEngine)
/// before each suspension point of a scope load.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clears the signal so the token can guard another load.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }

    pub(crate) fn check(&self) -> ChartResult<()> {
        if self.is_cancelled() {
            return Err(ChartError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_signal() {
        let token = CancellationToken::new();
        let observer = token.clone();
        assert!(observer.check().is_ok());
        token.cancel();
        assert!(matches!(observer.check(), Err(ChartError::Cancelled)));
        token.reset();
        assert!(!observer.is_cancelled());
    }
}
