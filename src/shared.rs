//! # Shared Registry Module
//!
//! Lock-free shared access to a registry for concurrent callers.
//!
//! ## Overview
//!
//! A dispatch table is read on every call and rewritten rarely, so the shared
//! handle keeps the registry behind an [`arc_swap::ArcSwap`]: readers load a
//! snapshot without taking a lock, writers clone the current table, mutate
//! the clone, and swap it in atomically. In-flight readers keep seeing the
//! snapshot they loaded.
//!
//! ## Update Process
//!
//! When a registry is updated:
//!
//! 1. **Snapshot** - the current table is cloned (method handles are
//!    `Arc`-backed, so this copies the map, not the callables)
//! 2. **Mutate** - the caller's closure runs against the clone
//! 3. **Swap** - on success the clone replaces the live table
//!
//! If the mutation fails, the live table is untouched and readers never
//! observe a partial update.

use crate::registry::{MethodRegistry, RegistryError};
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::info;

/// Clonable handle to a registry snapshot that can be replaced atomically.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<ArcSwap<MethodRegistry>>,
}

impl SharedRegistry {
    /// Wrap a registry for shared access.
    #[must_use]
    pub fn new(registry: MethodRegistry) -> Self {
        SharedRegistry {
            inner: Arc::new(ArcSwap::from_pointee(registry)),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn load(&self) -> Arc<MethodRegistry> {
        self.inner.load_full()
    }

    /// Replace the registry wholesale, returning the previous snapshot.
    pub fn swap(&self, registry: MethodRegistry) -> Arc<MethodRegistry> {
        let total_methods = registry.len();
        let previous = self.inner.swap(Arc::new(registry));
        info!(
            previous_methods = previous.len(),
            total_methods, "Registry swapped"
        );
        previous
    }

    /// Clone-and-swap: apply `mutate` to a copy of the current registry and
    /// swap the copy in if it succeeds.
    ///
    /// # Errors
    ///
    /// Propagates the closure's error; the live registry is untouched.
    pub fn update<F>(&self, mutate: F) -> Result<(), RegistryError>
    where
        F: FnOnce(&mut MethodRegistry) -> Result<(), RegistryError>,
    {
        let current = self.inner.load_full();
        let mut next = (*current).clone();
        mutate(&mut next)?;
        self.inner.store(Arc::new(next));
        Ok(())
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(MethodRegistry::new())
    }
}
