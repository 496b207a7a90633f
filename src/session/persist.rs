//! Durable storage of the last selected language.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};

/// Key-value slot holding one language code.
pub trait LanguageStore {
    /// What: Read the stored code, if any.
    fn load(&self) -> Option<String>;

    /// What: Store a code, replacing the previous one.
    ///
    /// Details:
    /// - Failures are logged by the implementation and never surface.
    fn save(&self, code: &str);
}

/// What: Language store backed by a JSON object file.
///
/// Details:
/// - The file holds `{ "<key>": "<code>", ... }`; entries under other keys are
///   preserved on save.
/// - A missing or malformed file reads as empty.
#[derive(Debug, Clone)]
pub struct FileLanguageStore {
    path: PathBuf,
    key: String,
}

impl FileLanguageStore {
    /// What: Store at `path` under entry `key`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Map<String, Value> {
        let Ok(text) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(path = %self.path.display(), "[Persist] State file is not a JSON object, ignoring");
                Map::new()
            }
        }
    }
}

impl LanguageStore for FileLanguageStore {
    fn load(&self) -> Option<String> {
        self.read_object()
            .get(&self.key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
    }

    fn save(&self, code: &str) {
        let mut object = self.read_object();
        object.insert(self.key.clone(), Value::String(code.to_owned()));
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(dir)
        {
            tracing::warn!(path = %dir.display(), error = %e, "[Persist] Failed to create state dir");
            return;
        }
        let text = match serde_json::to_string_pretty(&Value::Object(object)) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "[Persist] Failed to serialize state");
                return;
            }
        };
        match std::fs::write(&self.path, text) {
            Ok(()) => tracing::debug!(code, path = %self.path.display(), "[Persist] Saved language"),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "[Persist] Failed to save language");
            }
        }
    }
}

/// In-process language store.
#[derive(Debug, Default)]
pub struct MemoryLanguageStore {
    code: Mutex<Option<String>>,
}

impl MemoryLanguageStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `code`.
    #[must_use]
    pub fn with(code: &str) -> Self {
        Self {
            code: Mutex::new(Some(code.to_owned())),
        }
    }
}

impl LanguageStore for MemoryLanguageStore {
    fn load(&self) -> Option<String> {
        self.code.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, code: &str) {
        if let Ok(mut guard) = self.code.lock() {
            *guard = Some(code.to_owned());
        }
    }
}
