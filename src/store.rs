//! Persistence for completed analyses
//!
//! Stores are append-only: `save` always creates a new record stamped with
//! the time it was saved. Listing returns the newest record first.

use crate::analysis::AnalysisResult;
use crate::error::StoreError;
use crate::profile::ClientProfile;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SEQ: AtomicU64 = AtomicU64::new(1);

/// A saved analysis: the input profile, its result, and when it was saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub client_name: String,
    pub profile: ClientProfile,
    pub result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(profile: &ClientProfile, result: &AnalysisResult) -> Self {
        let created_at = Utc::now();
        let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("{}-{}", created_at.timestamp_millis(), seq),
            client_name: profile.name.clone(),
            profile: profile.clone(),
            result: result.clone(),
            created_at,
        }
    }
}

/// Destination for completed analyses
pub trait AnalysisStore {
    /// Persist a new record and return it
    fn save(
        &mut self,
        profile: &ClientProfile,
        result: &AnalysisResult,
    ) -> Result<AnalysisRecord, StoreError>;

    /// All records, newest first
    fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError>;

    fn get(&self, id: &str) -> Result<AnalysisRecord, StoreError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<AnalysisRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl AnalysisStore for MemoryStore {
    fn save(
        &mut self,
        profile: &ClientProfile,
        result: &AnalysisResult,
    ) -> Result<AnalysisRecord, StoreError> {
        let record = AnalysisRecord::new(profile, result);
        self.records.insert(0, record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        Ok(self.records.clone())
    }
}

/// Store that appends one JSON record per line to a file
#[derive(Debug, Clone)]
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnalysisStore for JsonLinesStore {
    fn save(
        &mut self,
        profile: &ClientProfile,
        result: &AnalysisResult,
    ) -> Result<AnalysisRecord, StoreError> {
        let record = AnalysisRecord::new(profile, result);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(&record)?)?;
        info!("saved analysis {} for {} to {}", record.id, record.client_name, self.path.display());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str::<AnalysisRecord>(&line)?);
        }
        records.reverse();
        Ok(records)
    }
}
