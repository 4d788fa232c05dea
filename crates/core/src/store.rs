// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flat-file store simulating a remote tracker's database.
//!
//! Layout under the store root:
//!
//! ```text
//! <root>/
//!   .lock              advisory lock held while planning
//!   milestones/<id>.json
//!   issues/<id>.json
//! ```
//!
//! Each record is pretty-printed JSON so the store diffs cleanly. Writes go
//! to a temporary sibling and are renamed into place, so a reader never sees
//! a half-written record. Anything under a kind directory that ends in
//! `.json` must parse; a record that does not is reported, never skipped.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::milestone::Milestone;
use crate::record::{EntityKind, Record};
use crate::tracker::Tracker;

const RECORD_EXT: &str = "json";
const TEMP_EXT: &str = "json.tmp";
const LOCK_FILE_NAME: &str = ".lock";

/// Handle to a store rooted at a directory.
///
/// Creating a handle does no I/O; directories are created on first write.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Store { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding records of `kind`.
    pub fn kind_dir(&self, kind: EntityKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// Path of the file holding record `id` of `kind`.
    pub fn record_path(&self, kind: EntityKind, id: u64) -> PathBuf {
        self.kind_dir(kind).join(format!("{id}.{RECORD_EXT}"))
    }

    /// Returns true if the store root exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Creates the root and per-kind directories if missing.
    pub fn init(&self) -> Result<()> {
        for kind in [EntityKind::Milestone, EntityKind::Issue] {
            fs::create_dir_all(self.kind_dir(kind))?;
        }
        Ok(())
    }

    /// Writes `record` to its own file, replacing any previous version.
    pub fn save<R: Record>(&self, record: &R) -> Result<()> {
        let dir = self.kind_dir(R::KIND);
        fs::create_dir_all(&dir)?;

        let path = self.record_path(R::KIND, record.id());
        let tmp = dir.join(format!("{}.{TEMP_EXT}", record.id()));

        let mut json = serde_json::to_string_pretty(record)?;
        json.push('\n');

        let written = File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(kind = %R::KIND, id = record.id(), path = %path.display(), "saved record");
        Ok(())
    }

    /// Reads every record of type `R`, in ascending id order.
    ///
    /// A missing kind directory yields an empty list.
    pub fn list<R: Record>(&self) -> Result<Vec<R>> {
        let mut records = Vec::new();
        for (id, path) in self.record_files(R::KIND)? {
            let content = fs::read(&path)?;
            let record: R = serde_json::from_slice(&content).map_err(|e| Error::CorruptRecord {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            if record.id() != id {
                return Err(Error::CorruptRecord {
                    path,
                    reason: format!("file name says id {} but record has id {}", id, record.id()),
                });
            }
            records.push(record);
        }
        tracing::debug!(kind = %R::KIND, count = records.len(), "listed records");
        Ok(records)
    }

    /// Highest id stored for `kind`, or 0 if there are none.
    pub fn max_id(&self, kind: EntityKind) -> Result<u64> {
        Ok(self
            .record_files(kind)?
            .last()
            .map(|(id, _)| *id)
            .unwrap_or(0))
    }

    /// Takes the store's advisory write lock without blocking.
    ///
    /// The lock is released when the returned guard is dropped.
    pub fn lock(&self) -> Result<StoreLock> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        file.try_lock_exclusive()
            .map_err(|e| Error::StoreLocked(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "acquired store lock");
        Ok(StoreLock { file, path })
    }

    /// Record files for `kind` sorted by id.
    fn record_files(&self, kind: EntityKind) -> Result<Vec<(u64, PathBuf)>> {
        let dir = self.kind_dir(kind);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXT) {
                continue;
            }
            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|id| *id > 0)
                .ok_or_else(|| Error::CorruptRecord {
                    path: path.clone(),
                    reason: "file name is not a record id".to_string(),
                })?;
            files.push((id, path));
        }
        files.sort_by_key(|(id, _)| *id);
        Ok(files)
    }
}

impl Tracker for Store {
    fn max_id(&self, kind: EntityKind) -> Result<u64> {
        Store::max_id(self, kind)
    }

    fn create_milestone(&mut self, milestone: &Milestone) -> Result<()> {
        self.save(milestone)
    }

    fn create_issue(&mut self, issue: &Issue) -> Result<()> {
        self.save(issue)
    }
}

/// Guard for the store's advisory lock.
#[derive(Debug)]
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), "failed to release store lock: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
