//! Persisted key-value store and the reminder sequence built on it.
//!
//! The store holds string keys mapped to JSON values. Reminders live under a
//! single key as a JSON array of `{ "text", "timestamp" }` objects;
//! [`ReminderStore::append`] serializes its read-modify-write so concurrent
//! appends never drop a record.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::{AriaError, Result};

/// String-keyed JSON blob storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>>;
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Volatile in-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries.lock().await.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Store backed by one JSON object file.
///
/// Writes go to a sibling temp file that is then renamed over the original,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<serde_json::Map<String, Value>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(serde_json::Map::new());
            }
            Err(e) => {
                return Err(AriaError::Store(format!(
                    "cannot read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Map::new());
        }
        match serde_json::from_slice(&bytes)? {
            Value::Object(map) => Ok(map),
            other => Err(AriaError::Store(format!(
                "{} holds {} instead of an object",
                self.path.display(),
                json_kind(&other)
            ))),
        }
    }

    async fn write_all(&self, map: serde_json::Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(&Value::Object(map))?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let _guard = self.io_lock.lock().await;
        Ok(self.read_all().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let _guard = self.io_lock.lock().await;
        let mut map = self.read_all().await?;
        map.insert(key.to_owned(), value);
        self.write_all(map).await
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A persisted reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub text: String,
    /// Creation time, Unix epoch milliseconds.
    #[serde(rename = "timestamp")]
    pub created_at: i64,
}

impl Reminder {
    /// New reminder stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// Append-only reminder sequence stored under one key.
#[derive(Clone)]
pub struct ReminderStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    append_lock: Arc<Mutex<()>>,
}

impl ReminderStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All reminders in insertion order.
    pub async fn all(&self) -> Result<Vec<Reminder>> {
        match self.store.get(&self.key).await? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value @ Value::Array(_)) => Ok(serde_json::from_value(value)?),
            Some(other) => Err(AriaError::Store(format!(
                "key {:?} holds {} instead of an array",
                self.key,
                json_kind(&other)
            ))),
        }
    }

    /// Append a reminder and return the new sequence length.
    pub async fn append(&self, reminder: Reminder) -> Result<usize> {
        let _guard = self.append_lock.lock().await;
        let mut reminders = self.all().await?;
        reminders.push(reminder);
        let len = reminders.len();
        self.store
            .set(&self.key, serde_json::to_value(&reminders)?)
            .await?;
        Ok(len)
    }
}

impl std::fmt::Debug for ReminderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReminderStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_reminders() -> ReminderStore {
        ReminderStore::new(Arc::new(MemoryStore::new()), "reminders")
    }

    #[tokio::test]
    async fn append_preserves_order() {
        let store = memory_reminders();
        assert!(store.all().await.expect("all").is_empty());

        store.append(Reminder::new("first")).await.expect("append");
        let len = store.append(Reminder::new("second")).await.expect("append");
        assert_eq!(len, 2);

        let texts: Vec<String> = store
            .all()
            .await
            .expect("all")
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn concurrent_appends_keep_every_record() {
        let store = memory_reminders();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(Reminder::new(format!("r{i}"))).await
            }));
        }
        for handle in handles {
            handle.await.expect("join").expect("append");
        }
        assert_eq!(store.all().await.expect("all").len(), 32);
    }

    #[tokio::test]
    async fn serialized_with_timestamp_field() {
        let backing = Arc::new(MemoryStore::new());
        let store = ReminderStore::new(backing.clone(), "reminders");
        store
            .append(Reminder {
                text: "buy milk".to_owned(),
                created_at: 1_700_000_000_000,
            })
            .await
            .expect("append");

        let raw = backing.get("reminders").await.expect("get");
        assert_eq!(
            raw,
            Some(serde_json::json!([{"text": "buy milk", "timestamp": 1_700_000_000_000_i64}]))
        );
    }

    #[tokio::test]
    async fn non_array_value_is_rejected() {
        let backing = Arc::new(MemoryStore::new());
        backing
            .set("reminders", serde_json::json!({"oops": true}))
            .await
            .expect("set");
        let store = ReminderStore::new(backing, "reminders");
        assert!(matches!(store.all().await, Err(AriaError::Store(_))));
        assert!(store.append(Reminder::new("x")).await.is_err());
    }

    #[tokio::test]
    async fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data").join("store.json");

        {
            let store = ReminderStore::new(Arc::new(JsonFileStore::new(&path)), "reminders");
            store.append(Reminder::new("water plants")).await.expect("append");
        }

        let reopened = ReminderStore::new(Arc::new(JsonFileStore::new(&path)), "reminders");
        let all = reopened.all().await.expect("all");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "water plants");
        assert!(all[0].created_at_utc().is_some());
    }

    #[tokio::test]
    async fn file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("store.json"));
        store.set("a", serde_json::json!(1)).await.expect("set");
        store.set("b", serde_json::json!("two")).await.expect("set");

        assert_eq!(store.get("a").await.expect("get"), Some(serde_json::json!(1)));
        assert_eq!(store.get("missing").await.expect("get"), None);
    }

    #[tokio::test]
    async fn file_store_rejects_non_object_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        std::fs::write(&path, "[1, 2, 3]").expect("write");
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("a").await, Err(AriaError::Store(_))));
    }
}
