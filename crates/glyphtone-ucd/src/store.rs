//! Character dataset and the lookup service in front of it.
//!
//! The dataset is a JSON array of [`CharacterRecord`]s written by the fetch
//! tool. [`CharacterService`] loads it lazily: a missing file is not an
//! error and lookups fall back to heuristics. A failed load is retried only
//! once the file's size or modification time changes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;

use crate::error::UcdError;
use crate::fallback;
use crate::record::{BlockMember, CharacterRecord};

/// Seam between the HTTP layer and the metadata source.
pub trait CharacterLookup: Send + Sync {
    /// Metadata for `code`, or `None` if nothing is known about it.
    fn lookup(&self, code: u32) -> Option<CharacterRecord>;

    /// Members of the named block, ordered by code point.
    fn block_members(&self, block: &str) -> Vec<BlockMember>;
}

/// In-memory dataset keyed by code point.
#[derive(Debug, Default)]
pub struct Dataset {
    records: HashMap<u32, CharacterRecord>,
}

impl Dataset {
    pub fn from_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.code, r)).collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, UcdError> {
        let bytes = std::fs::read(path).map_err(|source| UcdError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<CharacterRecord> = serde_json::from_slice(&bytes)?;
        Ok(Self::from_records(records))
    }

    /// Write `records` as the dataset file, creating parent directories.
    pub fn write(path: &Path, records: &[CharacterRecord]) -> Result<(), UcdError> {
        let io_err = |source| UcdError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_vec(records)?;
        std::fs::write(path, json).map_err(io_err)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, code: u32) -> Option<&CharacterRecord> {
        self.records.get(&code)
    }

    pub fn block_members(&self, block: &str) -> Vec<BlockMember> {
        let mut members: Vec<BlockMember> = self
            .records
            .values()
            .filter(|r| r.block == block)
            .map(BlockMember::from)
            .collect();
        members.sort_by_key(|m| m.code);
        members
    }
}

/// Size and modification time of the dataset file; `None` when it is absent.
type FileStamp = Option<(u64, Option<SystemTime>)>;

fn file_stamp(path: &Path) -> FileStamp {
    if path.as_os_str().is_empty() {
        return None;
    }
    std::fs::metadata(path)
        .ok()
        .map(|meta| (meta.len(), meta.modified().ok()))
}

#[derive(Default)]
struct Slot {
    dataset: Option<Arc<Dataset>>,
    /// File state seen by the last failed load.
    failed_at: Option<FileStamp>,
}

/// Dataset-backed lookup with heuristic fallback.
pub struct CharacterService {
    path: PathBuf,
    slot: RwLock<Slot>,
}

impl CharacterService {
    /// Service reading from `path`. Nothing is loaded until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: RwLock::new(Slot::default()),
        }
    }

    /// Service that tries to load `path` immediately.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let service = Self::new(path);
        if service.dataset().is_none() {
            tracing::warn!(
                path = %service.path.display(),
                "character dataset not available, using fallback metadata (run glyphtone-fetch)"
            );
        }
        service
    }

    /// Service over an already built dataset.
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            path: PathBuf::new(),
            slot: RwLock::new(Slot {
                dataset: Some(Arc::new(dataset)),
                failed_at: None,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.read().dataset.is_some()
    }

    /// The loaded dataset, loading it first if that has not succeeded yet
    /// and the file changed since the last attempt.
    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        let stamp = {
            let slot = self.slot.read();
            if let Some(dataset) = slot.dataset.as_ref() {
                return Some(Arc::clone(dataset));
            }
            let stamp = file_stamp(&self.path);
            if slot.failed_at == Some(stamp) {
                return None;
            }
            stamp
        };

        let mut slot = self.slot.write();
        if slot.dataset.is_none() && slot.failed_at != Some(stamp) {
            match self.try_load(stamp) {
                Some(dataset) => {
                    slot.dataset = Some(Arc::new(dataset));
                    slot.failed_at = None;
                }
                None => slot.failed_at = Some(stamp),
            }
        }
        slot.dataset.clone()
    }

    /// Dataset record if present, otherwise the heuristic record.
    pub fn character_info(&self, code: u32) -> CharacterRecord {
        self.dataset()
            .and_then(|dataset| dataset.get(code).cloned())
            .unwrap_or_else(|| fallback::basic_info(code))
    }

    fn try_load(&self, stamp: FileStamp) -> Option<Dataset> {
        if stamp.is_none() {
            return None;
        }
        match Dataset::load(&self.path) {
            Ok(dataset) => {
                tracing::info!(
                    path = %self.path.display(),
                    records = dataset.len(),
                    "character dataset loaded"
                );
                Some(dataset)
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    "failed to load character dataset: {e}"
                );
                None
            }
        }
    }
}

impl CharacterLookup for CharacterService {
    fn lookup(&self, code: u32) -> Option<CharacterRecord> {
        Some(self.character_info(code))
    }

    fn block_members(&self, block: &str) -> Vec<BlockMember> {
        match self.dataset() {
            Some(dataset) => dataset.block_members(block),
            None => {
                tracing::info!(block, "block listing requested without a dataset");
                Vec::new()
            }
        }
    }
}
