//! Strong references to engine-managed execution contexts.

use std::fmt;
use std::sync::Arc;

/// A strong reference to an engine-managed execution context.
///
/// The engine mints these from `DebugEngine::new_context` and keys its own
/// bookkeeping off the context id. `Clone` yields a new strong reference to
/// the same context;
/// the owner's reference can never be invalidated through a clone.
#[derive(Clone)]
pub struct ContextHandle {
    core: Arc<ContextCore>,
}

#[derive(Debug)]
struct ContextCore {
    id: u64,
}

impl ContextHandle {
    /// Mint a handle for the context with the given engine-assigned id.
    pub fn new(id: u64) -> Self {
        Self {
            core: Arc::new(ContextCore { id }),
        }
    }

    /// The engine-assigned context id.
    pub fn id(&self) -> u64 {
        self.core.id
    }
}

impl PartialEq for ContextHandle {
    fn eq(&self, other: &Self) -> bool {
        self.core.id == other.core.id
    }
}

impl Eq for ContextHandle {}

impl fmt::Debug for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextHandle")
            .field("id", &self.core.id)
            .finish()
    }
}
