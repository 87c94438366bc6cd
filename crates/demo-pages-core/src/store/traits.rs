//! Store Layer - Core Traits

use crate::error::PagesResult;

/// Host-provided string key-value storage
///
/// Writes are unconditional and untransacted, last write wins.
pub trait KeyValueStore {
    /// Read a value, `None` when absent
    fn get(&self, key: &str) -> PagesResult<Option<String>>;

    /// Overwrite a value
    fn set(&self, key: &str, value: &str) -> PagesResult<()>;

    /// Drop every key
    fn clear(&self) -> PagesResult<()>;
}
