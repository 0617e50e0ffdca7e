use crate::i18n::Language;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk shape: a single `language` key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct StoredPreference {
    language: Language,
}

/// Persists the selected UI language in a small JSON file.
///
/// Passed explicitly to whoever needs it; there is no process-wide instance.
#[derive(Debug, Clone)]
pub struct LanguageStore {
    path: PathBuf,
}

impl LanguageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored language, or the default when the file is missing or unreadable.
    pub fn load(&self) -> Language {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Language::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read language preference");
                return Language::default();
            }
        };

        match serde_json::from_str::<StoredPreference>(&text) {
            Ok(pref) => pref.language,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt language preference; using default");
                Language::default()
            }
        }
    }

    pub fn save(&self, language: Language) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let body = serde_json::to_string(&StoredPreference { language })?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), %language, "language preference saved");
        Ok(())
    }

    /// Flips the stored language and returns the new value.
    pub fn toggle(&self) -> anyhow::Result<Language> {
        let next = self.load().toggle();
        self.save(next)?;
        Ok(next)
    }
}
