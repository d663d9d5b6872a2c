// ABOUTME: File-backed key-value cache storing one JSON document per key
// ABOUTME: Writes go through a temp file and rename so readers never see partial records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use super::KeyValueCache;
use crate::constants::cache::CACHE_FILE_EXTENSION;
use crate::errors::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Cache persisting each key as `<directory>/<sanitized key>.json`
#[derive(Debug, Clone)]
pub struct FileKeyValueCache {
    directory: PathBuf,
}

impl FileKeyValueCache {
    /// Cache rooted at `directory`; the directory is created on first write
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Root directory
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File path holding `key`
    ///
    /// Characters outside `[A-Za-z0-9_-]` map to `_` so namespaced keys such
    /// as `fitzy:weeklyData` are valid file names on every platform.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.directory
            .join(format!("{stem}.{CACHE_FILE_EXTENSION}"))
    }

    async fn ensure_directory(&self) -> AppResult<()> {
        fs::create_dir_all(&self.directory).await.map_err(|e| {
            AppError::storage(format!(
                "cannot create cache directory {}",
                self.directory.display()
            ))
            .with_source(e)
        })
    }
}

#[async_trait::async_trait]
impl KeyValueCache for FileKeyValueCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("cannot read {}", path.display())).with_source(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        self.ensure_directory().await?;
        let path = self.path_for(key);
        let staging = path.with_extension(format!("{CACHE_FILE_EXTENSION}.tmp"));

        fs::write(&staging, value.as_bytes()).await.map_err(|e| {
            AppError::storage(format!("cannot write {}", staging.display())).with_source(e)
        })?;
        fs::rename(&staging, &path).await.map_err(|e| {
            AppError::storage(format!("cannot replace {}", path.display())).with_source(e)
        })?;

        debug!(path = %path.display(), bytes = value.len(), "Wrote cache file");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("cannot remove {}", path.display())).with_source(e)),
        }
    }

    async fn clear(&self) -> AppResult<()> {
        let mut entries = match fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let mut removed = 0_usize;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == CACHE_FILE_EXTENSION) {
                fs::remove_file(&path).await?;
                removed += 1;
            }
        }
        debug!(directory = %self.directory.display(), removed, "Cleared cache files");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        self.ensure_directory().await?;
        let metadata = fs::metadata(&self.directory).await?;
        if metadata.permissions().readonly() {
            return Err(AppError::storage(format!(
                "cache directory {} is read-only",
                self.directory.display()
            )));
        }
        Ok(())
    }
}
