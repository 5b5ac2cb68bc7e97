//! # Mapping Table Module
//!
//! The keyed mapping table and its load/lookup entry points.
//!
//! [`MappingDatabase`] is a plain owned value: the hosting subsystem decides
//! where it lives and who may write to it. Loads insert or overwrite entries
//! and never remove unrelated ones; the last definition for an identity wins.
//! For the common load-once-then-query-concurrently lifecycle,
//! [`SharedMappingDatabase`] wraps the table in a read-write lock so loads
//! take exclusive access and lookups can proceed in parallel.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use super::parser;
use super::record::{DeviceIdentity, MappingRecord};
use crate::config::DatabaseConfig;

/// Mapping table keyed by device identity.
///
/// # Examples
///
/// ```
/// use gamepad_remap::db::{DeviceIdentity, MappingDatabase};
///
/// let mut db = MappingDatabase::new("Windows");
/// let loaded = db.load_from_str(
///     "03000000000000000000045e0000028e,Pad,platform:Windows,a:b0",
/// );
/// assert!(loaded);
/// assert!(db.lookup(DeviceIdentity::new(0x45e, 0x28e)).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct MappingDatabase {
    /// The `platform:<tag>` token a line must carry to be accepted.
    platform_needle: String,
    mappings: HashMap<DeviceIdentity, MappingRecord>,
}

impl MappingDatabase {
    /// Creates an empty database accepting mappings for the given platform tag.
    #[must_use]
    pub fn new(platform: &str) -> Self {
        Self {
            platform_needle: format!("platform:{platform}"),
            mappings: HashMap::new(),
        }
    }

    /// Creates an empty database from a [`DatabaseConfig`].
    ///
    /// Only the platform tag is taken from the config; loading the configured
    /// file path stays the caller's decision.
    #[must_use]
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(&config.platform)
    }

    /// Loads mapping lines from a file, inserting or overwriting entries.
    ///
    /// Returns `true` iff at least one line was accepted. An empty path or an
    /// unreadable file returns `false` without touching the table. Individual
    /// malformed lines are skipped silently.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return false;
        }
        match fs::read_to_string(path) {
            Ok(text) => self.load_from_str(&text),
            Err(error) => {
                warn!("Failed to read mapping database {}: {}", path.display(), error);
                false
            }
        }
    }

    /// Loads mapping lines from an in-memory string, inserting or
    /// overwriting entries.
    ///
    /// Same semantics as [`load_from_file`](Self::load_from_file): `true` iff
    /// at least one line was accepted, `false` for empty input.
    pub fn load_from_str(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        let mut accepted: usize = 0;
        let mut skipped: usize = 0;
        for line in text.lines() {
            match parser::parse_line(line, &self.platform_needle) {
                Some(parsed) => {
                    debug!(
                        "Accepted mapping '{}' for {:04x}:{:04x}",
                        parsed.name, parsed.identity.vendor_id, parsed.identity.product_id
                    );
                    self.mappings.insert(parsed.identity, parsed.record);
                    accepted += 1;
                }
                None => skipped += 1,
            }
        }

        debug!(
            "Mapping database load finished: {} accepted, {} skipped, {} total entries",
            accepted,
            skipped,
            self.mappings.len()
        );
        accepted > 0
    }

    /// Returns a copy of the record for the given identity, if one is loaded.
    ///
    /// A miss is a normal case (unmapped or generic device), not an error.
    #[must_use]
    pub fn lookup(&self, identity: DeviceIdentity) -> Option<MappingRecord> {
        self.mappings.get(&identity).cloned()
    }

    /// Number of loaded mapping entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if no mappings are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Cloneable, thread-safe handle to a [`MappingDatabase`].
///
/// Loads take the write lock; lookups take the read lock. This makes the
/// single-writer / multiple-reader discipline explicit instead of leaving
/// concurrent load+lookup as a data race.
///
/// # Examples
///
/// ```
/// use gamepad_remap::db::{DeviceIdentity, SharedMappingDatabase};
///
/// let db = SharedMappingDatabase::new("Windows");
/// db.load_from_str("03000000000000000000045e0000028e,Pad,platform:Windows,a:b0");
///
/// let reader = db.clone();
/// assert!(reader.lookup(DeviceIdentity::new(0x45e, 0x28e)).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SharedMappingDatabase {
    inner: Arc<RwLock<MappingDatabase>>,
}

impl SharedMappingDatabase {
    /// Creates an empty shared database for the given platform tag.
    #[must_use]
    pub fn new(platform: &str) -> Self {
        Self::from_database(MappingDatabase::new(platform))
    }

    /// Wraps an already-populated database.
    #[must_use]
    pub fn from_database(database: MappingDatabase) -> Self {
        Self {
            inner: Arc::new(RwLock::new(database)),
        }
    }

    /// Loads mapping lines from a file under the write lock.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> bool {
        self.write().load_from_file(path)
    }

    /// Loads mapping lines from an in-memory string under the write lock.
    pub fn load_from_str(&self, text: &str) -> bool {
        self.write().load_from_str(text)
    }

    /// Returns a copy of the record for the given identity, if one is loaded.
    #[must_use]
    pub fn lookup(&self, identity: DeviceIdentity) -> Option<MappingRecord> {
        self.read().lookup(identity)
    }

    /// Number of loaded mapping entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no mappings are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The table is plain data and stays consistent line-by-line, so a
    // poisoned lock is recovered rather than propagated.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, MappingDatabase> {
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MappingDatabase> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::record::{AxisSlot, ButtonSlot};

    const LINE_A: &str = "03000000000000000000045e0000028e,Pad A,platform:Windows,a:b0,b:b1,leftx:a0,lefty:a1";
    const LINE_B: &str = "03000000000000000000045e0000028e,Pad A rev2,platform:Windows,a:b2";

    fn identity() -> DeviceIdentity {
        DeviceIdentity::new(0x45e, 0x28e)
    }

    // ==================== Load Tests ====================

    #[test]
    fn test_load_empty_string_returns_false() {
        let mut db = MappingDatabase::new("Windows");
        assert!(!db.load_from_str(""));
        assert!(db.is_empty());
    }

    #[test]
    fn test_load_minimal_line() {
        let mut db = MappingDatabase::new("Windows");
        assert!(db.load_from_str(LINE_A));
        assert_eq!(db.len(), 1);

        let record = db.lookup(identity()).unwrap();
        assert_eq!(record.buttons[ButtonSlot::A.index()], Some(0));
        assert_eq!(record.buttons[ButtonSlot::B.index()], Some(1));
        assert_eq!(record.axes[AxisSlot::LeftX.index()].source, Some(0));
        assert_eq!(record.axes[AxisSlot::LeftY.index()].source, Some(1));
    }

    #[test]
    fn test_load_skips_comments_and_other_platforms() {
        let mut db = MappingDatabase::new("Windows");
        let text = format!(
            "# community mapping database\n\n{}\nbadguid,Linux Pad,platform:Linux,a:b0\n",
            LINE_A
        );
        assert!(db.load_from_str(&text));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_load_all_lines_rejected_returns_false() {
        let mut db = MappingDatabase::new("Windows");
        let text = "# only comments here\n\n# nothing to load\n";
        assert!(!db.load_from_str(text));
        assert!(db.is_empty());
    }

    #[test]
    fn test_load_overwrites_same_identity() {
        let mut db = MappingDatabase::new("Windows");
        assert!(db.load_from_str(LINE_A));
        assert!(db.load_from_str(LINE_B));
        assert_eq!(db.len(), 1);

        // Overwrite, not merge: the earlier b/leftx/lefty mappings are gone.
        let record = db.lookup(identity()).unwrap();
        assert_eq!(record.buttons[ButtonSlot::A.index()], Some(2));
        assert_eq!(record.buttons[ButtonSlot::B.index()], None);
        assert_eq!(record.axes[AxisSlot::LeftX.index()].source, None);
    }

    #[test]
    fn test_load_keeps_unrelated_entries() {
        let mut db = MappingDatabase::new("Windows");
        assert!(db.load_from_str(LINE_A));
        assert!(db.load_from_str(
            "0300000000000000000000ab000000cd,Pad B,platform:Windows,a:b3"
        ));
        assert_eq!(db.len(), 2);
        assert!(db.lookup(identity()).is_some());
        assert!(db.lookup(DeviceIdentity::new(0xab, 0xcd)).is_some());
    }

    #[test]
    fn test_load_zero_identity_inserted() {
        let mut db = MappingDatabase::new("Windows");
        assert!(db.load_from_str("shortguid,No Identity Pad,platform:Windows,a:b0"));
        let record = db.lookup(DeviceIdentity::ZERO).unwrap();
        assert_eq!(record.buttons[ButtonSlot::A.index()], Some(0));
    }

    // ==================== File Load Tests ====================

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# header comment").unwrap();
        writeln!(temp_file, "{}", LINE_A).unwrap();
        temp_file.flush().unwrap();

        let mut db = MappingDatabase::new("Windows");
        assert!(db.load_from_file(temp_file.path()));
        assert!(db.lookup(identity()).is_some());
    }

    #[test]
    fn test_load_from_nonexistent_file_returns_false() {
        let mut db = MappingDatabase::new("Windows");
        assert!(!db.load_from_file("/nonexistent/path/gamecontrollerdb.txt"));
        assert!(db.is_empty());
    }

    #[test]
    fn test_load_from_empty_path_returns_false() {
        let mut db = MappingDatabase::new("Windows");
        assert!(!db.load_from_file(""));
        assert!(db.is_empty());
    }

    #[test]
    fn test_load_from_empty_file_returns_false() {
        use tempfile::NamedTempFile;

        let temp_file = NamedTempFile::new().unwrap();
        let mut db = MappingDatabase::new("Windows");
        assert!(!db.load_from_file(temp_file.path()));
        assert!(db.is_empty());
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_miss_is_none() {
        let db = MappingDatabase::new("Windows");
        assert_eq!(db.lookup(identity()), None);
    }

    #[test]
    fn test_lookup_returns_copy() {
        let mut db = MappingDatabase::new("Windows");
        db.load_from_str(LINE_A);

        let mut copy = db.lookup(identity()).unwrap();
        copy.buttons[ButtonSlot::A.index()] = Some(9);

        // The table entry is unchanged by mutating the returned copy.
        let fresh = db.lookup(identity()).unwrap();
        assert_eq!(fresh.buttons[ButtonSlot::A.index()], Some(0));
    }

    #[test]
    fn test_lookup_structurally_equal_to_parsed() {
        let mut db = MappingDatabase::new("Windows");
        db.load_from_str(LINE_A);

        let parsed = crate::db::parser::parse_line(LINE_A, "platform:Windows").unwrap();
        assert_eq!(db.lookup(identity()).unwrap(), parsed.record);
    }

    // ==================== Shared Handle Tests ====================

    #[test]
    fn test_shared_load_visible_through_clone() {
        let db = SharedMappingDatabase::new("Windows");
        let reader = db.clone();

        assert!(db.load_from_str(LINE_A));
        assert_eq!(reader.len(), 1);
        assert!(reader.lookup(identity()).is_some());
    }

    #[test]
    fn test_shared_empty_lookup() {
        let db = SharedMappingDatabase::new("Windows");
        assert!(db.is_empty());
        assert_eq!(db.lookup(identity()), None);
    }

    #[test]
    fn test_shared_from_database() {
        let mut owned = MappingDatabase::new("Windows");
        owned.load_from_str(LINE_A);

        let db = SharedMappingDatabase::from_database(owned);
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_shared_concurrent_lookups() {
        use std::thread;

        let db = SharedMappingDatabase::new("Windows");
        db.load_from_str(LINE_A);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = db.clone();
                thread::spawn(move || reader.lookup(identity()).is_some())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
