// ABOUTME: Load/save/update/reset operations for the concept document
// One JSON file under ~/.genesis-lab, whole-document writes only

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::document::{ConceptDocument, SectionPatch};

/// File name of the persisted snapshot inside the storage root
pub const SNAPSHOT_FILE: &str = "concept.json";

/// Holds the single source of truth for the wizard.
///
/// Mutations replace the in-memory document first; durability is a separate,
/// explicit `persist` call so callers decide when to write.
#[derive(Debug)]
pub struct ConceptStore {
    path: PathBuf,
    document: ConceptDocument,
}

impl ConceptStore {
    /// Default storage root: `~/.genesis-lab`
    pub fn default_root() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".genesis-lab"))
    }

    /// Open the store at the default location, loading any saved snapshot
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Self::default_root()?.join(SNAPSHOT_FILE)))
    }

    /// Open a store backed by the given snapshot path.
    ///
    /// A missing, unreadable, or unparseable snapshot yields the default
    /// document; the failure is logged, never raised.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let document = Self::load_from(&path);
        Self { path, document }
    }

    fn load_from(path: &Path) -> ConceptDocument {
        if !path.exists() {
            return ConceptDocument::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read saved concept from {}: {}", path.display(), e);
                return ConceptDocument::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Failed to parse saved concept, starting fresh: {}", e);
                ConceptDocument::default()
            }
        }
    }

    /// Path of the persisted snapshot
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current in-memory document
    pub fn document(&self) -> &ConceptDocument {
        &self.document
    }

    /// Re-read the snapshot from disk, replacing the in-memory document
    pub fn load(&mut self) -> &ConceptDocument {
        self.document = Self::load_from(&self.path);
        &self.document
    }

    /// Merge a partial section update; unrelated sections are untouched
    pub fn update(&mut self, patch: SectionPatch) -> &ConceptDocument {
        patch.apply(&mut self.document);
        &self.document
    }

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.document.title = title.into();
    }

    /// Record that navigation up to `step_index` is unlocked. Monotonic:
    /// the counter never decreases except through `reset`.
    pub fn mark_step_complete(&mut self, step_index: usize) {
        self.document.highest_step_reached =
            self.document.highest_step_reached.max(step_index);
    }

    /// Replace the document with defaults and erase the persisted snapshot
    pub fn reset(&mut self) -> Result<&ConceptDocument> {
        self.document = ConceptDocument::default();
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove saved concept at {}", self.path.display())
            })?;
        }
        Ok(&self.document)
    }

    /// Serialize and write the full document. No partial writes; repeating
    /// the call with an unchanged document is a harmless no-op.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(&self.document)
            .context("Failed to serialize concept document")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write concept to {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::document::{ThemeMatrixPatch, DEFAULT_TITLE};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, ConceptStore) {
        let dir = TempDir::new().unwrap();
        let store = ConceptStore::open(dir.path().join(SNAPSHOT_FILE));
        (dir, store)
    }

    #[test]
    fn test_missing_snapshot_yields_defaults() {
        let (_dir, store) = temp_store();
        assert_eq!(store.document().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_corrupt_snapshot_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = ConceptStore::open(&path);
        assert_eq!(*store.document(), ConceptDocument::default());
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let (_dir, mut store) = temp_store();
        store.update_title("Ocean Futures");
        store.update(SectionPatch::ThemeMatrix(ThemeMatrixPatch {
            theme: Some("oceans".to_string()),
            ..Default::default()
        }));
        store.mark_step_complete(1);
        store.persist().unwrap();

        let saved = store.document().clone();
        assert_eq!(*store.load(), saved);
    }

    #[test]
    fn test_mark_step_complete_is_monotonic() {
        let (_dir, mut store) = temp_store();
        store.mark_step_complete(4);
        store.mark_step_complete(2);
        assert_eq!(store.document().highest_step_reached, 4);
    }

    #[test]
    fn test_reset_clears_document_and_snapshot() {
        let (_dir, mut store) = temp_store();
        store.update_title("Ocean Futures");
        store.mark_step_complete(5);
        store.persist().unwrap();
        assert!(store.path().exists());

        store.reset().unwrap();
        assert!(!store.path().exists());
        assert_eq!(*store.document(), ConceptDocument::default());
        assert_eq!(*store.load(), ConceptDocument::default());
    }

    #[test]
    fn test_mutation_without_persist_is_not_durable() {
        let (_dir, mut store) = temp_store();
        store.persist().unwrap();
        store.update_title("Ephemeral");
        assert_eq!(store.load().title, DEFAULT_TITLE);
    }
}
