// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::fs;

use crate::board::EventBoard;
use crate::countdown::{Countdown, CountdownClock};
use crate::localdb::LocalDb;
use crate::ordering::{arrange, sort_events};
use crate::store::EventStore;
use crate::{Config, Error, Event, EventDraft, EventPatch, Result};

const DB_FILENAME: &str = "tminus.db";

/// tminus application core.
#[derive(Clone)]
pub struct Tminus {
    now: DateTime<Local>,
    config: Config,
    store: Arc<dyn EventStore>,
}

impl Tminus {
    /// Creates a new instance with the given configuration, backed by the local database.
    pub async fn new(mut config: Config) -> Result<Self> {
        config.normalize()?;

        let db = match &config.state_dir {
            Some(state_dir) => {
                prepare(state_dir).await?;
                LocalDb::open(Some(state_dir.join(DB_FILENAME).as_path())).await?
            }
            None => {
                tracing::warn!("no state directory, events will not be persisted");
                LocalDb::open(None).await?
            }
        };

        Ok(Self::with_store(config, Arc::new(db)))
    }

    /// Creates a new instance on top of an arbitrary store.
    pub fn with_store(config: Config, store: Arc<dyn EventStore>) -> Self {
        Self {
            now: Local::now(),
            config,
            store,
        }
    }

    /// The current time in the instance.
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Refresh the current time to now.
    pub fn refresh_now(&mut self) {
        self.now = Local::now();
    }

    /// The configuration in use, after normalization.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates the draft and stores it as a new event.
    pub async fn new_event(&self, draft: EventDraft) -> Result<Event> {
        let new = draft.validate()?;
        let event = self.store.insert(new).await?;
        tracing::info!(id = event.id, name = %event.name, "created event");
        Ok(event)
    }

    /// Get an event by its identifier.
    pub async fn get_event(&self, id: i64) -> Result<Event> {
        self.store.get(id).await?.ok_or(Error::NotFound(id))
    }

    /// List all events, newest first.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let mut events = self.store.list().await?;
        sort_events(&mut events);
        Ok(events)
    }

    /// List the events whose name contains the query, ignoring case, newest first.
    pub async fn search_events(&self, query: &str) -> Result<Vec<Event>> {
        tracing::debug!(query, "searching events");
        let events = self.store.list().await?;
        Ok(arrange(&events, query))
    }

    /// Load every event into a fresh board.
    pub async fn board(&self) -> Result<EventBoard> {
        Ok(EventBoard::new(self.store.list().await?))
    }

    /// Applies the patch to the stored event and returns the result.
    pub async fn update_event(&self, id: i64, patch: EventPatch) -> Result<Event> {
        let mut event = self.get_event(id).await?;
        if patch.is_empty() {
            tracing::debug!(id, "empty patch, nothing to update");
            return Ok(event);
        }

        patch.apply_to(&mut event)?;
        self.store.update(&event).await?;
        tracing::info!(id, "updated event");
        Ok(event)
    }

    /// Deletes the event with the given identifier.
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        match self.store.delete(id).await? {
            true => {
                tracing::info!(id, "deleted event");
                Ok(())
            }
            false => Err(Error::NotFound(id)),
        }
    }

    /// The countdown to the event as of [`Tminus::now`].
    pub fn countdown(&self, event: &Event) -> Countdown {
        event.countdown(&self.now)
    }

    /// Starts a clock counting down to the event, in the local time zone.
    pub fn clock(&self, event: &Event) -> CountdownClock<Local> {
        CountdownClock::start(&self.now, event.instant())
    }

    /// Close the instance, releasing any resources.
    pub async fn close(self) -> Result<()> {
        self.store.close().await
    }
}

impl std::fmt::Debug for Tminus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tminus")
            .field("now", &self.now)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

async fn prepare(state_dir: &std::path::Path) -> Result<()> {
    tracing::info!(path = %state_dir.display(), "ensuring state directory exists");
    fs::create_dir_all(state_dir).await?;
    Ok(())
}
