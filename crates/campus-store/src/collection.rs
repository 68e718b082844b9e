//! In-memory copy of one resource collection with its load flags.

use campus_model::{RecordId, Resource, StatusResource};

use crate::error::StoreError;
use crate::lifecycle::LoadState;

/// Records of one collection plus loading and error state.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
    state: LoadState,
    error: Option<StoreError>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Idle,
            error: None,
        }
    }
}

impl<R: Resource> Collection<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget everything, back to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn begin_loading(&mut self) {
        self.state = LoadState::Loading;
        self.error = None;
    }

    /// Replace the whole collection.
    pub(crate) fn loaded(&mut self, records: Vec<R>) {
        self.records = records;
        self.state = LoadState::Ready;
        self.error = None;
    }

    /// A failed load leaves an empty collection rather than stale data.
    pub(crate) fn failed(&mut self, error: StoreError) {
        self.records.clear();
        self.state = LoadState::Errored;
        self.error = Some(error);
    }

    pub fn find(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    /// Drop every record with this id. Returns whether one was removed.
    pub(crate) fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != Some(id));
        self.records.len() != before
    }

    /// Swap in the server's copy of a record, matched by id.
    pub(crate) fn replace(&mut self, record: R) -> bool {
        let Some(id) = record.id() else {
            return false;
        };
        match self.records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }
}

impl<R: StatusResource> Collection<R> {
    /// Patch only the status of the matching record.
    pub(crate) fn set_status(&mut self, id: RecordId, status: &R::Status) -> bool {
        match self.records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(record) => {
                record.set_status(status.clone());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_model::{Fee, FeeStatus};

    fn fees(ids: &[RecordId]) -> Vec<Fee> {
        ids.iter()
            .map(|&id| Fee {
                id: Some(id),
                fee_type: format!("Fee {id}"),
                ..Fee::default()
            })
            .collect()
    }

    #[test]
    fn failed_load_clears_records() {
        let mut collection = Collection::default();
        collection.loaded(fees(&[1, 2]));
        assert!(collection.state().is_ready());

        collection.failed(StoreError::Server {
            status: Some(500),
            message: "Failed to fetch fees data".to_string(),
        });
        assert!(collection.is_empty());
        assert_eq!(collection.state(), LoadState::Errored);
    }

    #[test]
    fn status_patch_touches_one_record() {
        let mut collection = Collection::default();
        collection.loaded(fees(&[1, 2]));

        assert!(collection.set_status(2, &FeeStatus::Paid));
        assert_eq!(collection.find(1).map(|f| &f.status), Some(&FeeStatus::Pending));
        assert_eq!(collection.find(2).map(|f| &f.status), Some(&FeeStatus::Paid));
        assert_eq!(collection.find(2).map(|f| f.fee_type.as_str()), Some("Fee 2"));
        assert!(!collection.set_status(9, &FeeStatus::Paid));
    }

    #[test]
    fn remove_matches_by_id() {
        let mut collection = Collection::default();
        collection.loaded(fees(&[1, 2, 3]));
        assert!(collection.remove(2));
        assert!(!collection.remove(2));
        assert_eq!(collection.len(), 2);
    }
}
