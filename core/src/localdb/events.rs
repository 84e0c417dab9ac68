// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::datetime::{
    format_stable_date, format_stable_time, parse_stable_date, parse_stable_time,
};
use crate::event::NewEvent;
use crate::{Error, Event};

#[derive(Debug, Clone)]
pub struct Events {
    pool: SqlitePool,
}

impl Events {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new row, returning the assigned id. The id of the record is ignored.
    pub async fn insert(&self, event: &EventRecord) -> Result<i64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO events (name, date, time, notes, location)
VALUES (?, ?, ?, ?, ?);
";

        let result = sqlx::query(SQL)
            .bind(&event.name)
            .bind(&event.date)
            .bind(&event.time)
            .bind(&event.notes)
            .bind(&event.location)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates the row with the same id, returning the number of affected rows.
    pub async fn update(&self, event: &EventRecord) -> Result<u64, sqlx::Error> {
        const SQL: &str = "\
UPDATE events SET
    name     = ?,
    date     = ?,
    time     = ?,
    notes    = ?,
    location = ?
WHERE id = ?;
";

        let result = sqlx::query(SQL)
            .bind(&event.name)
            .bind(&event.date)
            .bind(&event.time)
            .bind(&event.notes)
            .bind(&event.location)
            .bind(event.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn get(&self, id: i64) -> Result<Option<EventRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, date, time, notes, location
FROM events
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list(&self) -> Result<Vec<EventRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, date, time, notes, location
FROM events
ORDER BY date DESC, time DESC, id ASC;
";

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    /// Deletes the row with the given id, returning the number of affected rows.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM events WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events;")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRecord {
    id: i64,
    name: String,
    date: String,
    time: String,
    notes: Option<String>,
    location: String,
}

impl EventRecord {
    pub fn from_new(event: &NewEvent) -> Self {
        Self {
            id: 0,
            name: event.name.clone(),
            date: format_stable_date(event.date),
            time: format_stable_time(event.time),
            notes: event.notes.clone(),
            location: event.location.clone(),
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            date: format_stable_date(event.date),
            time: format_stable_time(event.time),
            notes: event.notes.clone(),
            location: event.location.clone(),
        }
    }

    pub fn into_event(self) -> Result<Event, Error> {
        let date = parse_stable_date(&self.date).ok_or(Error::CorruptRecord(self.id))?;
        let time = parse_stable_time(&self.time).ok_or(Error::CorruptRecord(self.id))?;

        Ok(Event {
            id: self.id,
            name: self.name,
            date,
            time,
            notes: self.notes,
            location: self.location,
        })
    }
}
