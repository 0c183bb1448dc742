//! High score persistence
//!
//! A single best score, persisted best-effort. Storage failures never reach
//! gameplay: loads fall back to 0, saves are logged and dropped by the
//! session.

use std::fmt;

/// Why a store could not read or write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No storage backend (private browsing, no window, ...)
    Unavailable,
    /// Backend refused the write (quota, permissions)
    WriteFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "storage unavailable"),
            StoreError::WriteFailed(reason) => write!(f, "storage write failed: {}", reason),
        }
    }
}

impl std::error::Error for StoreError {}

/// Somewhere the best score can be kept between sessions
pub trait HighScoreStore {
    /// Raw stored value, `Ok(None)` if nothing was ever saved
    fn read(&self) -> Result<Option<String>, StoreError>;

    fn write(&mut self, value: &str) -> Result<(), StoreError>;

    /// Stored high score; missing, malformed or unreadable data reads as 0
    fn load(&self) -> u64 {
        match self.read() {
            Ok(Some(raw)) => parse_stored(&raw),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("Could not read high score: {}", e);
                0
            }
        }
    }

    fn save(&mut self, value: u64) -> Result<(), StoreError> {
        self.write(&value.to_string())
    }
}

/// Parse a stored high score. Anything that is not a non-negative number is 0.
pub fn parse_stored(raw: &str) -> u64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    if let Ok(value) = raw.parse::<u64>() {
        return value;
    }
    // Older saves may hold a float such as "12.0"
    match serde_json::from_str::<f64>(raw) {
        Ok(v) if v.is_finite() && v >= 0.0 => v.floor() as u64,
        _ => 0,
    }
}

/// In-process store (tests, native builds)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Simulate a backend that refuses writes
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
            fail_writes: false,
        }
    }

    /// Store whose writes always fail
    pub fn failing() -> Self {
        Self {
            value: None,
            fail_writes: true,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed("quota exceeded".to_string()));
        }
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key, shared with earlier releases of the game
    const STORAGE_KEY: &'static str = "appleHighscore";
}

/// The page's LocalStorage, if the browser allows it
#[cfg(target_arch = "wasm32")]
pub(crate) fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or(StoreError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(Self::STORAGE_KEY)
            .map_err(|_| StoreError::Unavailable)
    }

    fn write(&mut self, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(Self::STORAGE_KEY, value)
            .map_err(|e| StoreError::WriteFailed(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that is always down
    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn read(&self) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn write(&mut self, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_parse_stored() {
        assert_eq!(parse_stored("42"), 42);
        assert_eq!(parse_stored(" 7\n"), 7);
        assert_eq!(parse_stored("12.0"), 12);
        assert_eq!(parse_stored(""), 0);
        assert_eq!(parse_stored("NaN"), 0);
        assert_eq!(parse_stored("-5"), 0);
        assert_eq!(parse_stored("banana"), 0);
    }

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), 0);
        store.save(99).expect("memory write");
        assert_eq!(store.raw(), Some("99"));
        assert_eq!(store.load(), 99);
    }

    #[test]
    fn test_malformed_reads_as_zero() {
        assert_eq!(MemoryStore::with_raw("{\"oops\":1}").load(), 0);
    }

    #[test]
    fn test_broken_store_reads_zero() {
        let mut store = BrokenStore;
        assert_eq!(store.load(), 0);
        assert_eq!(store.save(5), Err(StoreError::Unavailable));
    }

    #[test]
    fn test_failed_write_reports_error() {
        let mut store = MemoryStore::failing();
        let err = store.save(1).expect_err("write refused");
        assert_eq!(err.to_string(), "storage write failed: quota exceeded");
    }
}
