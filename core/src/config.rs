// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::de;

use crate::{Error, Result};

/// The name of the tminus application.
pub const APP_NAME: &str = "tminus";

/// Configuration for the tminus application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for storing application state, the event database lives here.
    /// When it resolves to nothing, events are kept in memory.
    pub state_dir: Option<PathBuf>,

    /// Refresh interval of live countdowns.
    pub tick: ConfigTick,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<()> {
        match &self.state_dir {
            Some(a) => {
                let expanded = expand_path(a).map_err(|e| {
                    Error::Config(format!("Failed to expand state directory path: {e}"))
                })?;
                self.state_dir = Some(expanded);
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        Ok(())
    }
}

/// A positive refresh interval, one second unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigTick(Duration);

impl ConfigTick {
    /// Wraps `duration`, which must be at least one millisecond.
    pub fn new(duration: Duration) -> Result<Self> {
        if duration < Duration::milliseconds(1) {
            return Err(Error::Config(format!(
                "Tick must be at least 1ms, got {}ms",
                duration.num_milliseconds()
            )));
        }
        Ok(Self(duration))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    /// The interval as a [`std::time::Duration`], as timers expect it.
    pub fn as_std(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0.num_milliseconds().unsigned_abs())
    }
}

impl Default for ConfigTick {
    fn default() -> Self {
        Self(Duration::seconds(1))
    }
}

impl<'de> serde::Deserialize<'de> for ConfigTick {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TickVisitor;

        impl<'de> de::Visitor<'de> for TickVisitor {
            type Value = ConfigTick;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    r#"a positive duration string like "1s", "500ms", "60m", "24h", "1d", or "HH:MM""#,
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let duration = parse_duration(value).map_err(|e| de::Error::custom(e.to_string()))?;
                ConfigTick::new(duration).map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(TickVisitor)
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn StdError>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn StdError>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn StdError>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn StdError>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s" / "500ms".
fn parse_duration(s: &str) -> Result<Duration, Box<dyn StdError>> {
    let s = s.trim();
    // Try to parse "HH:MM" format
    let duration = if let Some((h, m)) = s.split_once(':') {
        let hours: i64 = h.trim().parse()?;
        let minutes: i64 = m.trim().parse()?;
        hours
            .checked_mul(60)
            .and_then(|x| x.checked_add(minutes))
            .and_then(Duration::try_minutes)
    }
    // Match suffix-based formats, "ms" before "m" and "s"
    else if let Some(rest) = s.strip_suffix("ms") {
        Duration::try_milliseconds(rest.trim().parse()?)
    } else if let Some(rest) = s.strip_suffix("d") {
        Duration::try_days(rest.trim().parse()?)
    } else if let Some(rest) = s.strip_suffix("h") {
        Duration::try_hours(rest.trim().parse()?)
    } else if let Some(rest) = s.strip_suffix("m") {
        Duration::try_minutes(rest.trim().parse()?)
    } else if let Some(rest) = s.strip_suffix("s") {
        Duration::try_seconds(rest.trim().parse()?)
    } else {
        return Err(format!("Invalid duration format: {s}").into());
    };
    duration.ok_or_else(|| format!("Duration out of range: {s}").into())
}
