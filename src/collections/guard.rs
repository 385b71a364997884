// ============================================================================
// spark-observable - Scoped Guards
// Reentrancy depth and suppression state, released on every exit path
// ============================================================================

use std::cell::Cell;

// =============================================================================
// HANDLER GUARD
// =============================================================================

/// Marks a structural-change delivery as in progress.
///
/// While any guard is alive the collection rejects mutation. The depth is
/// restored on drop, so a panicking handler cannot leave the collection
/// locked.
pub(crate) struct HandlerGuard<'a> {
    depth: &'a Cell<u32>,
}

impl<'a> HandlerGuard<'a> {
    pub(crate) fn enter(depth: &'a Cell<u32>) -> Self {
        depth.set(depth.get() + 1);
        Self { depth }
    }
}

impl Drop for HandlerGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

// =============================================================================
// SUPPRESSION GUARD
// =============================================================================

/// Forces the suppression flag for the guard's lifetime, then restores it.
///
/// Bypasses the "suppression disallowed" option; only reload uses it.
pub(crate) struct SuppressionGuard<'a> {
    flag: &'a Cell<bool>,
    prev: bool,
}

impl<'a> SuppressionGuard<'a> {
    pub(crate) fn force(flag: &'a Cell<bool>, value: bool) -> Self {
        let prev = flag.replace(value);
        Self { flag, prev }
    }
}

impl Drop for SuppressionGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.prev);
    }
}

// =============================================================================
// TESTS
// =============================================================================
