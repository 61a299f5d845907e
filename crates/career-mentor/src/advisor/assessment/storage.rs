use thiserror::Error;

/// Key the materialized profile is stored under. The browser client reads
/// the same key from its local storage, so it must never change casing.
pub const PROFILE_STORAGE_KEY: &str = "userProfile";

/// Errors surfaced by a profile store backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value persistence for serialized profiles. Implementations
/// must tolerate concurrent callers; the service treats every write as
/// last-write-wins.
pub trait ProfileStore: Send + Sync {
    /// Fetch the raw payload stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace whatever is stored under `key` with `value`.
    fn put(&self, key: &str, value: String) -> Result<(), StoreError>;
}
