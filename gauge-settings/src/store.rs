// Setting storage

use crate::{Result, Setting, SettingsError};
use std::collections::BTreeMap;

/// Source of settings for searches.
pub trait SettingsStore {
    /// Every stored setting, in any order.
    fn all(&self) -> Result<Vec<Setting>>;

    fn get(&self, id: i64) -> Result<Setting> {
        self.all()?
            .into_iter()
            .find(|setting| setting.id == id)
            .ok_or(SettingsError::NotFound(id))
    }
}

/// In-memory store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: BTreeMap<i64, Setting>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a setting. Fails if the id is taken.
    pub fn insert(&mut self, setting: Setting) -> Result<()> {
        if self.settings.contains_key(&setting.id) {
            return Err(SettingsError::DuplicateId(setting.id));
        }
        self.settings.insert(setting.id, setting);
        Ok(())
    }

    pub fn remove(&mut self, id: i64) -> Result<Setting> {
        self.settings.remove(&id).ok_or(SettingsError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl FromIterator<Setting> for MemoryStore {
    /// Later settings replace earlier ones with the same id.
    fn from_iter<I: IntoIterator<Item = Setting>>(iter: I) -> Self {
        Self {
            settings: iter.into_iter().map(|s| (s.id, s)).collect(),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn all(&self) -> Result<Vec<Setting>> {
        Ok(self.settings.values().cloned().collect())
    }

    fn get(&self, id: i64) -> Result<Setting> {
        self.settings
            .get(&id)
            .cloned()
            .ok_or(SettingsError::NotFound(id))
    }
}
