//! The host runtime's reentry lock.
//!
//! Engine threads may invoke debug callbacks at arbitrary points, so any
//! entry into host-runtime state has to be serialized against the rest of
//! the host. The embedding application creates one [`HostLock`] for its
//! runtime and hands clones to everything that re-enters it; the relay
//! paths take a scoped guard around every callback invocation.

use std::sync::Arc;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

/// Cloneable handle to the host runtime's global reentry lock.
///
/// The lock is reentrant: host code running inside a debug callback already
/// holds it and may re-acquire without deadlocking.
#[derive(Clone, Default)]
pub struct HostLock {
    inner: Arc<ReentrantMutex<()>>,
}

impl HostLock {
    /// Create a fresh reentry lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock, blocking the calling thread until it is free.
    /// The guard releases on drop, on every exit path.
    pub fn lock(&self) -> HostLockGuard<'_> {
        HostLockGuard {
            _guard: self.inner.lock(),
        }
    }
}

impl std::fmt::Debug for HostLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostLock").finish_non_exhaustive()
    }
}

/// Scoped guard for [`HostLock`].
#[must_use = "the reentry lock is released as soon as the guard is dropped"]
pub struct HostLockGuard<'a> {
    _guard: ReentrantMutexGuard<'a, ()>,
}
