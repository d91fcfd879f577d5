//! Lock-guarded world handle for drivers and renderers living on different threads.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::{render::RenderSnapshot, world::World};

/// Cloneable handle to a world. Mutation goes through the write lock, so a
/// renderer holding [`SharedWorld::read`] always sees a state between steps.
#[derive(Clone)]
pub struct SharedWorld {
    inner: Arc<RwLock<World>>,
}

impl From<World> for SharedWorld {
    fn from(world: World) -> Self {
        Self::new(world)
    }
}

impl SharedWorld {
    pub fn new(world: World) -> Self {
        Self {
            inner: Arc::new(RwLock::new(world)),
        }
    }

    pub fn step(&self, dt: f32) {
        self.inner.write().step(dt);
    }

    pub fn spawn(&self) -> usize {
        self.inner.write().spawn()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn count(&self) -> usize {
        self.inner.read().count()
    }

    /// Read access for renderers. Steps block until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, World> {
        self.inner.read()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::from_world(&self.inner.read())
    }

    /// Refreshes an existing snapshot under the read lock.
    pub fn sync_snapshot(&self, snapshot: &mut RenderSnapshot) {
        snapshot.sync(&self.inner.read());
    }
}
