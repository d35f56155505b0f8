use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-way "countdown reached zero" flag shared between the host and the
/// frame loop. Once set it cannot be cleared.
#[derive(Clone, Debug, Default)]
pub struct ResolvedFlag(Arc<AtomicBool>);

impl ResolvedFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Returns `true` only for the call that flipped it.
    pub fn resolve(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
