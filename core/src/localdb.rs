// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod events;

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::event::NewEvent;
use crate::localdb::events::{EventRecord, Events};
use crate::store::EventStore;
use crate::{Error, Event, Result};

/// SQLite-backed [`EventStore`].
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    pub(crate) events: Events,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self> {
        let options = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true)
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            SqliteConnectOptions::new().in_memory(true)
        };

        // every connection to an in-memory database sees its own database, so keep just one
        let max_connections = if filename.is_some() { 4 } else { 1 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await?;

        tracing::debug!("ensuring tables in the database");
        let events = Events::new(pool.clone());
        Ok(LocalDb { pool, events })
    }
}

#[async_trait]
impl EventStore for LocalDb {
    async fn list(&self) -> Result<Vec<Event>> {
        let records = self.events.list().await?;
        let events = records
            .into_iter()
            .filter_map(|record| match record.into_event() {
                Ok(event) => Some(event),
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable event");
                    None
                }
            })
            .collect();
        Ok(events)
    }

    async fn get(&self, id: i64) -> Result<Option<Event>> {
        match self.events.get(id).await? {
            Some(record) => record.into_event().map(Some),
            None => Ok(None),
        }
    }

    async fn insert(&self, event: NewEvent) -> Result<Event> {
        let record = EventRecord::from_new(&event);
        let id = self.events.insert(&record).await?;
        tracing::debug!(id, "inserted event");
        Ok(event.with_id(id))
    }

    async fn update(&self, event: &Event) -> Result<()> {
        let record = EventRecord::from_event(event);
        match self.events.update(&record).await? {
            0 => Err(Error::NotFound(event.id)),
            _ => Ok(()),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.events.delete(id).await? > 0)
    }

    async fn close(&self) -> Result<()> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}
