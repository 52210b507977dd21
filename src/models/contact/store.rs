use chrono::{SecondsFormat, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::types::{ContactEntry, ContactStatus};
use crate::errors::AppError;
use crate::validate::NewContact;

pub const CONTACTS_FILE: &str = "contacts.json";

/// File-backed list of contact submissions.
///
/// The whole collection lives in one pretty-printed JSON array. Writers are
/// serialized by `write_lock`; the file is swapped in with a rename so readers
/// never see a half-written array.
pub struct ContactStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ContactStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        ContactStore {
            path: data_dir.as_ref().join(CONTACTS_FILE),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, oldest first. A missing or unreadable file reads as empty.
    pub async fn get_all(&self) -> Vec<ContactEntry> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read {}: {e}; treating as empty", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&json) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Malformed {}: {e}; treating as empty", self.path.display());
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Option<ContactEntry> {
        self.get_all().await.into_iter().find(|c| c.id == id)
    }

    /// Append a validated submission and persist the full collection.
    ///
    /// Fails only if the write-back fails; an unreadable history is replaced.
    pub async fn submit(&self, contact: NewContact) -> Result<ContactEntry, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.get_all().await;
        let now = Utc::now();
        let last_id = entries.iter().map(|c| c.id).max().unwrap_or(0);
        let entry = ContactEntry {
            id: next_id(now.timestamp_millis(), last_id),
            name: contact.name,
            email: contact.email,
            message: contact.message,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: ContactStatus::New,
        };

        log::info!(
            "New contact form submission\n  Name: {}\n  Email: {}\n  Message: {}\n  Time: {}",
            entry.name,
            entry.email,
            entry.message,
            entry.timestamp
        );

        entries.push(entry.clone());
        self.write_all(&entries).await?;
        Ok(entry)
    }

    async fn write_all(&self, entries: &[ContactEntry]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

/// Millisecond timestamp ids, bumped past the newest stored id so two
/// submissions in the same millisecond still get distinct ids.
fn next_id(now_millis: i64, last_id: i64) -> i64 {
    now_millis.max(last_id.saturating_add(1))
}
