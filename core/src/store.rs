// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::event::NewEvent;
use crate::{Error, Event, Result};

/// Persistent storage owning the canonical copy of every event.
///
/// Mutations are serialized by the implementation; callers only ever see snapshots.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Lists all stored events, in no particular order.
    async fn list(&self) -> Result<Vec<Event>>;

    /// Gets an event by its identifier.
    async fn get(&self, id: i64) -> Result<Option<Event>>;

    /// Stores a new event and returns it with its freshly assigned identifier.
    async fn insert(&self, event: NewEvent) -> Result<Event>;

    /// Replaces the stored event carrying the same identifier.
    ///
    /// Fails with [`Error::NotFound`] when no such event exists.
    async fn update(&self, event: &Event) -> Result<()>;

    /// Deletes an event, returning whether it existed.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Releases any resources held by the store.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// An [`EventStore`] kept entirely in memory, mainly for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    events: Vec<Event>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Event>> {
        Ok(self.inner.lock().await.events.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Event>> {
        let inner = self.inner.lock().await;
        Ok(inner.events.iter().find(|e| e.id == id).cloned())
    }

    async fn insert(&self, event: NewEvent) -> Result<Event> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let event = event.with_id(inner.last_id);
        inner.events.push(event.clone());
        Ok(event)
    }

    async fn update(&self, event: &Event) -> Result<()> {
        let mut inner = self.inner.lock().await;
        match inner.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event.clone();
                Ok(())
            }
            None => Err(Error::NotFound(event.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        let before = inner.events.len();
        inner.events.retain(|e| e.id != id);
        Ok(inner.events.len() != before)
    }
}
