use crate::analysis::PropertyRecord;
use crate::filter::FilterSpec;

/// Keyed collection of analyzed strings.
///
/// Implementations must make every operation atomic with respect to the
/// others: concurrent callers observe a linearizable sequence and never a
/// partially updated catalog.
pub trait CatalogStore: Send + Sync {
    /// Whether a record with exactly this value is stored.
    fn exists(&self, value: &str) -> bool;

    fn exists_by_id(&self, id: &str) -> bool;

    /// Insert or replace under `record.id`.
    ///
    /// No duplicate check: callers that need one must call [`Self::exists`]
    /// first.
    fn add(&self, record: PropertyRecord);

    fn get_by_value(&self, value: &str) -> Option<PropertyRecord>;

    fn get_by_id(&self, id: &str) -> Option<PropertyRecord>;

    fn get_all(&self) -> Vec<PropertyRecord>;

    /// Every record matching `spec`.
    fn get_filtered(&self, spec: &FilterSpec) -> Vec<PropertyRecord>;

    /// Remove the record holding `value`. Returns whether anything was removed.
    fn delete(&self, value: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
