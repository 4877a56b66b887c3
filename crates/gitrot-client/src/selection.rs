//! Durable provider/model selection
//!
//! Remembers the user's last (provider, model) choice across runs. The
//! store is strictly best-effort: a missing, unreadable, or corrupt
//! persisted selection silently degrades to the catalog defaults, and
//! failed writes never surface to the caller. Saves are suppressed until
//! the first load has completed so that a half-initialized caller cannot
//! clobber a previously persisted choice with defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ModelCatalog;

/// A (provider, model) pair chosen by the user.
///
/// Serialized exactly as `{"provider": ..., "model": ...}`; this shape is
/// shared with the hosted frontend's persisted selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Catalog provider identifier
    pub provider: String,
    /// Catalog model identifier
    pub model: String,
}

impl Selection {
    /// Create a selection from identifiers.
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }
}

/// Raw persistence backend for the selection store.
///
/// Implementations move bytes; the store owns validation and fallback.
/// The trait exists so tests can inject failing or in-memory backends.
pub trait SelectionStorage: Send + Sync {
    /// Read the persisted payload, `None` if nothing was ever stored.
    fn read(&self) -> io::Result<Option<String>>;

    /// Persist the payload, replacing any previous one.
    fn write(&self, contents: &str) -> io::Result<()>;
}

/// File-backed [`SelectionStorage`].
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store the selection at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform default location: `<config dir>/gitrot/selection.json`.
    ///
    /// Falls back to the working directory when the platform reports no
    /// config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gitrot")
            .join("selection.json")
    }

    /// The path this storage reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStorage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)
    }
}

/// Stateful selection store.
///
/// Two states: before the first [`load`](Self::load) completes, saves are
/// ignored; afterwards, saves write through to storage. Load always
/// returns a selection that is valid against the given catalog.
pub struct SelectionStore {
    storage: Box<dyn SelectionStorage>,
    loaded: bool,
}

impl SelectionStore {
    /// Create a store over an arbitrary storage backend.
    pub fn new(storage: Box<dyn SelectionStorage>) -> Self {
        Self {
            storage,
            loaded: false,
        }
    }

    /// Create a store over the platform default file location.
    pub fn with_default_path() -> Self {
        Self::new(Box::new(FileStorage::new(FileStorage::default_path())))
    }

    /// Whether the first load has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load the persisted selection, validated against `catalog`.
    ///
    /// Returns the persisted pair when both identifiers are known to the
    /// catalog; otherwise the catalog's fallback chain applies (provider
    /// default model, then catalog default selection). Any storage or
    /// parse failure also yields the default selection. After this call
    /// the store accepts saves, regardless of the load outcome.
    pub fn load(&mut self, catalog: &ModelCatalog) -> Selection {
        // Unblock saves even when the read fails; the caller is
        // initialized either way.
        self.loaded = true;

        let raw = match self.storage.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return catalog.default_selection(),
            Err(e) => {
                debug!(error = %e, "selection storage unreadable, using defaults");
                return catalog.default_selection();
            }
        };

        match serde_json::from_str::<Selection>(&raw) {
            Ok(persisted) => {
                let resolved = catalog.resolve_selection(&persisted.provider, &persisted.model);
                if resolved != persisted {
                    debug!(
                        provider = %persisted.provider,
                        model = %persisted.model,
                        "persisted selection no longer in catalog, corrected to defaults"
                    );
                }
                resolved
            }
            Err(e) => {
                debug!(error = %e, "persisted selection is not valid JSON, using defaults");
                catalog.default_selection()
            }
        }
    }

    /// Persist a selection.
    ///
    /// Ignored until the first load has completed. Write failures are
    /// logged and swallowed; persistence is never worth failing an
    /// operation over.
    pub fn save(&self, selection: &Selection) {
        if !self.loaded {
            debug!("selection save skipped: store not loaded yet");
            return;
        }

        let payload = match serde_json::to_string(selection) {
            Ok(payload) => payload,
            Err(e) => {
                debug!(error = %e, "failed to serialize selection");
                return;
            }
        };

        if let Err(e) = self.storage.write(&payload) {
            debug!(error = %e, "failed to persist selection");
        }
    }
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::{models, providers};
    use std::sync::{Arc, Mutex};

    /// In-memory storage; the inner Arc lets tests inspect writes.
    #[derive(Clone, Default)]
    struct MemoryStorage {
        contents: Arc<Mutex<Option<String>>>,
    }

    impl SelectionStorage for MemoryStorage {
        fn read(&self) -> io::Result<Option<String>> {
            Ok(self.contents.lock().unwrap().clone())
        }

        fn write(&self, contents: &str) -> io::Result<()> {
            *self.contents.lock().unwrap() = Some(contents.to_string());
            Ok(())
        }
    }

    /// Storage where every operation fails.
    struct BrokenStorage;

    impl SelectionStorage for BrokenStorage {
        fn read(&self) -> io::Result<Option<String>> {
            Err(io::Error::other("disk on fire"))
        }

        fn write(&self, _contents: &str) -> io::Result<()> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_selection_wire_shape() {
        let selection = Selection::new("azure_openai", "gpt-4o");
        let json = serde_json::to_string(&selection).unwrap();

        assert_eq!(json, r#"{"provider":"azure_openai","model":"gpt-4o"}"#);
    }

    #[test]
    fn test_save_before_load_is_suppressed() {
        let storage = MemoryStorage::default();
        let store = SelectionStore::new(Box::new(storage.clone()));

        store.save(&Selection::new("google", "gemini-1.5-pro"));

        assert!(!store.is_loaded());
        assert!(storage.contents.lock().unwrap().is_none());
    }

    #[test]
    fn test_load_then_save_round_trips() {
        let catalog = ModelCatalog::builtin();
        let storage = MemoryStorage::default();
        let mut store = SelectionStore::new(Box::new(storage.clone()));

        let initial = store.load(&catalog);
        assert_eq!(initial, catalog.default_selection());

        let choice = Selection::new(providers::GOOGLE, models::GEMINI_1_5_PRO);
        store.save(&choice);

        let mut second = SelectionStore::new(Box::new(storage));
        assert_eq!(second.load(&catalog), choice);
    }

    #[test]
    fn test_load_empty_storage_returns_default() {
        let catalog = ModelCatalog::builtin();
        let mut store = SelectionStore::new(Box::new(MemoryStorage::default()));

        assert_eq!(store.load(&catalog), catalog.default_selection());
        assert!(store.is_loaded());
    }

    #[test]
    fn test_load_corrupt_json_returns_default() {
        let catalog = ModelCatalog::builtin();
        let storage = MemoryStorage::default();
        *storage.contents.lock().unwrap() = Some("{not json".to_string());

        let mut store = SelectionStore::new(Box::new(storage));
        assert_eq!(store.load(&catalog), catalog.default_selection());
    }

    #[test]
    fn test_load_unknown_provider_corrected_to_default() {
        let catalog = ModelCatalog::builtin();
        let storage = MemoryStorage::default();
        *storage.contents.lock().unwrap() =
            Some(r#"{"provider":"retired_provider","model":"gpt-4o"}"#.to_string());

        let mut store = SelectionStore::new(Box::new(storage));
        assert_eq!(store.load(&catalog), catalog.default_selection());
    }

    #[test]
    fn test_load_unknown_model_corrected_to_provider_default() {
        let catalog = ModelCatalog::builtin();
        let storage = MemoryStorage::default();
        *storage.contents.lock().unwrap() =
            Some(r#"{"provider":"google","model":"gemini-0.1-retired"}"#.to_string());

        let mut store = SelectionStore::new(Box::new(storage));
        let selection = store.load(&catalog);

        assert_eq!(selection.provider, providers::GOOGLE);
        assert_eq!(selection.model, models::GEMINI_1_5_FLASH);
    }

    #[test]
    fn test_broken_storage_degrades_to_default() {
        let catalog = ModelCatalog::builtin();
        let mut store = SelectionStore::new(Box::new(BrokenStorage));

        assert_eq!(store.load(&catalog), catalog.default_selection());
        // A failed load still unblocks saves, and a failed save must not panic
        assert!(store.is_loaded());
        store.save(&Selection::new("google", "gemini-1.5-flash"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("selection.json");
        let storage = FileStorage::new(&path);

        // Missing file reads as None, not an error
        assert_eq!(storage.read().unwrap(), None);

        storage
            .write(r#"{"provider":"google","model":"gemini-1.5-flash"}"#)
            .unwrap();
        assert!(path.exists());

        let contents = storage.read().unwrap().unwrap();
        assert!(contents.contains("gemini-1.5-flash"));
    }

    #[test]
    fn test_file_backed_store_persists_across_instances() {
        let catalog = ModelCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");

        let mut store = SelectionStore::new(Box::new(FileStorage::new(&path)));
        store.load(&catalog);
        store.save(&Selection::new(providers::GOOGLE, models::GEMINI_1_5_PRO));

        let mut reopened = SelectionStore::new(Box::new(FileStorage::new(&path)));
        let selection = reopened.load(&catalog);

        assert_eq!(selection.provider, providers::GOOGLE);
        assert_eq!(selection.model, models::GEMINI_1_5_PRO);
    }
}
