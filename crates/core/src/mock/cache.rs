use crate::domain::section::{DatasetParams, Section};
use crate::mock::dataset::{self, Dataset};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const DEFAULT_CAPACITY: usize = 256;

type Key = (Section, DatasetParams);

/// Memoizes datasets by `(section, params)`.
///
/// Purely an optimization: pipelines are deterministic, so a cached value is
/// always equal to a fresh one. When the map reaches its capacity it is
/// cleared wholesale.
#[derive(Debug)]
pub struct MemoCache {
    entries: Mutex<HashMap<Key, Arc<Dataset>>>,
    capacity: usize,
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl MemoCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn get_or_generate(&self, section: Section, params: &DatasetParams) -> Arc<Dataset> {
        let key = (section, params.clone());
        if let Some(hit) = self.lock().get(&key) {
            tracing::trace!(%section, company_id = params.company_id, "dataset cache hit");
            return Arc::clone(hit);
        }

        // Generated outside the lock; a concurrent miss on the same key just
        // computes an equal value.
        let fresh = Arc::new(dataset::generate(section, params));

        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            tracing::debug!(capacity = self.capacity, "dataset cache full; clearing");
            entries.clear();
        }
        entries.insert(key, Arc::clone(&fresh));
        fresh
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Key, Arc<Dataset>>> {
        // Entries are immutable once inserted, so a poisoned map is still usable.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::CheckKind;
    use crate::mock::period::DateRange;

    #[test]
    fn returns_shared_value_on_hit() {
        let cache = MemoCache::default();
        let params = DatasetParams::new(1, DateRange::year(1404));
        let a = cache.get_or_generate(Section::BalanceSheet, &params);
        let b = cache.get_or_generate(Section::BalanceSheet, &params);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cached_equals_fresh() {
        let cache = MemoCache::default();
        let params = DatasetParams::new(2, DateRange::new("1402/01/01", "1404/06/30"));
        let section = Section::Checks(CheckKind::Receivable);
        let cached = cache.get_or_generate(section, &params);
        assert_eq!(*cached, dataset::generate(section, &params));
    }

    #[test]
    fn clears_when_full() {
        let cache = MemoCache::with_capacity(2);
        for company_id in 0..3 {
            let params = DatasetParams::new(company_id, DateRange::year(1404));
            cache.get_or_generate(Section::ProfitLoss, &params);
        }
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
