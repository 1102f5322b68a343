use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A store persisted as one JSON snapshot under a fixed key.
pub trait PersistedStore: Serialize + DeserializeOwned + Default {
    const KEY: &'static str;
    /// Bumped whenever the snapshot shape changes; older snapshots are dropped.
    const VERSION: u32;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FallbackReason {
    #[error("no stored entry")]
    Missing,
    #[error("stored entry is malformed: {0}")]
    Malformed(String),
    #[error("stored entry has version {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("could not read stored entry: {0}")]
    Unreadable(String),
}

/// Result of loading a store: either what was saved, or the default state
/// together with the reason the saved one could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Stored(T),
    Defaulted { value: T, reason: FallbackReason },
}

impl<T> Loaded<T> {
    pub fn into_inner(self) -> T {
        match self {
            Loaded::Stored(value) | Loaded::Defaulted { value, .. } => value,
        }
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Loaded::Stored(_) => None,
            Loaded::Defaulted { reason, .. } => Some(reason),
        }
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    state: &'a T,
}

#[derive(Deserialize)]
struct RawEnvelope {
    version: u32,
    state: serde_json::Value,
}

// ─── Store repo ──────────────────────────────────────────────────────────────

pub struct StoreRepo;

impl StoreRepo {
    /// Load a store, never failing: anything unusable degrades to the default.
    pub fn load<T: PersistedStore>(conn: &Connection) -> Loaded<T> {
        let raw = match Self::get_raw(conn, T::KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("{}: nothing stored yet", T::KEY);
                return Loaded::Defaulted {
                    value: T::default(),
                    reason: FallbackReason::Missing,
                };
            }
            Err(e) => return Self::fallback(FallbackReason::Unreadable(e.to_string())),
        };

        let envelope: RawEnvelope = match serde_json::from_str(&raw) {
            Ok(env) => env,
            Err(e) => return Self::fallback(FallbackReason::Malformed(e.to_string())),
        };

        if envelope.version != T::VERSION {
            return Self::fallback(FallbackReason::VersionMismatch {
                found: envelope.version,
                expected: T::VERSION,
            });
        }

        match serde_json::from_value(envelope.state) {
            Ok(value) => Loaded::Stored(value),
            Err(e) => Self::fallback(FallbackReason::Malformed(e.to_string())),
        }
    }

    fn fallback<T: PersistedStore>(reason: FallbackReason) -> Loaded<T> {
        log::warn!("{}: {}; using defaults", T::KEY, reason);
        Loaded::Defaulted {
            value: T::default(),
            reason,
        }
    }

    pub fn save<T: PersistedStore>(conn: &Connection, store: &T) -> Result<()> {
        let json = serde_json::to_string(&EnvelopeRef {
            version: T::VERSION,
            state: store,
        })?;
        Self::put_raw(conn, T::KEY, &json)
    }

    pub fn get_raw(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn put_raw(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn remove(conn: &Connection, key: &str) -> Result<()> {
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        count: u32,
        label: String,
    }

    impl PersistedStore for Sample {
        const KEY: &'static str = "test-sample";
        const VERSION: u32 = 2;
    }

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_entry_defaults() {
        let loaded = StoreRepo::load::<Sample>(&conn());
        assert_eq!(loaded.fallback_reason(), Some(&FallbackReason::Missing));
        assert_eq!(loaded.into_inner(), Sample::default());
    }

    #[test]
    fn test_save_then_load() {
        let conn = conn();
        let sample = Sample {
            count: 3,
            label: "x".into(),
        };
        StoreRepo::save(&conn, &sample).unwrap();
        assert_eq!(StoreRepo::load::<Sample>(&conn), Loaded::Stored(sample));

        let raw = StoreRepo::get_raw(&conn, Sample::KEY).unwrap().unwrap();
        assert!(raw.contains("\"version\":2"));
    }

    #[test]
    fn test_malformed_json_defaults() {
        let conn = conn();
        StoreRepo::put_raw(&conn, Sample::KEY, "{not json").unwrap();
        let loaded = StoreRepo::load::<Sample>(&conn);
        assert!(matches!(
            loaded.fallback_reason(),
            Some(FallbackReason::Malformed(_))
        ));
        assert_eq!(loaded.into_inner(), Sample::default());
    }

    #[test]
    fn test_wrong_shape_defaults() {
        let conn = conn();
        StoreRepo::put_raw(&conn, Sample::KEY, r#"{"version":2,"state":{"count":"many"}}"#)
            .unwrap();
        let loaded = StoreRepo::load::<Sample>(&conn);
        assert!(matches!(
            loaded.fallback_reason(),
            Some(FallbackReason::Malformed(_))
        ));
    }

    #[test]
    fn test_version_mismatch_defaults() {
        let conn = conn();
        StoreRepo::put_raw(
            &conn,
            Sample::KEY,
            r#"{"version":1,"state":{"count":9,"label":"old"}}"#,
        )
        .unwrap();
        let loaded = StoreRepo::load::<Sample>(&conn);
        assert_eq!(
            loaded.fallback_reason(),
            Some(&FallbackReason::VersionMismatch {
                found: 1,
                expected: 2
            })
        );
        assert_eq!(loaded.into_inner(), Sample::default());
    }

    #[test]
    fn test_unmigrated_database_is_unreadable_not_fatal() {
        let conn = Connection::open_in_memory().unwrap();
        let loaded = StoreRepo::load::<Sample>(&conn);
        assert!(matches!(
            loaded.fallback_reason(),
            Some(FallbackReason::Unreadable(_))
        ));
    }

    #[test]
    fn test_remove() {
        let conn = conn();
        StoreRepo::save(&conn, &Sample::default()).unwrap();
        StoreRepo::remove(&conn, Sample::KEY).unwrap();
        assert!(StoreRepo::get_raw(&conn, Sample::KEY).unwrap().is_none());
    }
}
