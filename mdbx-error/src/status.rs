//! The registry of known engine status codes.
//!
//! The table is fixed at compile time and indexed once on first use. Lookups
//! never fail: a code the table does not know simply resolves to `None`, which
//! is how codes introduced by newer engine releases show up.

use crate::abi;
use crate::Category;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Revision of the status table. Bumped whenever an entry is added.
pub const REGISTRY_VERSION: u32 = 1;

/// A single registered status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusEntry {
    code: i32,
    name: &'static str,
    reason: &'static str,
    category: Category,
}

impl StatusEntry {
    const fn new(code: i32, name: &'static str, reason: &'static str, category: Category) -> Self {
        Self {
            code,
            name,
            reason,
            category,
        }
    }

    /// The numeric code as returned by the engine
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The stable machine identifier, e.g. `BUSY`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The human-readable description
    pub fn reason_phrase(&self) -> &'static str {
        self.reason
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_success(&self) -> bool {
        self.code == abi::SUCCESS
    }
}

/// Renders the reason phrase.
impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason)
    }
}

use Category::*;

/// Every known status, in the order the engine documents them.
static TABLE: [StatusEntry; 37] = [
    StatusEntry::new(abi::SUCCESS, "OK", "OK", Success),
    StatusEntry::new(abi::EINVAL, "EINVAL", "Invalid Parameter", Generic),
    StatusEntry::new(abi::EACCESS, "EACCES", "Access Denied", Generic),
    StatusEntry::new(abi::ENODATA, "ENODATA", "Handle EOF", Generic),
    StatusEntry::new(abi::ENOMEM, "ENOMEM", "Out of Memory", Generic),
    StatusEntry::new(abi::EROFS, "EROFS", "File Read Only", Generic),
    StatusEntry::new(abi::ENOSYS, "ENOSYS", "Not Supported", Generic),
    StatusEntry::new(abi::EIO, "EIO", "Write Fault", Generic),
    StatusEntry::new(abi::EPERM, "EPERM", "Invalid Function", Generic),
    StatusEntry::new(abi::EINTR, "EINTR", "Cancelled", Generic),
    StatusEntry::new(abi::KEYEXIST, "KEYEXIST", "key/data pair already exists", Presence),
    StatusEntry::new(abi::NOTFOUND, "NOTFOUND", "key/data pair not found (EOF)", Presence),
    StatusEntry::new(
        abi::PAGE_NOTFOUND,
        "PAGE_NOTFOUND",
        "Requested page not found - this usually indicates corruption",
        Integrity,
    ),
    StatusEntry::new(abi::CORRUPTED, "CORRUPTED", "Located page was wrong type", Integrity),
    StatusEntry::new(
        abi::PANIC,
        "PANIC",
        "Update of meta page failed or environment had fatal error",
        Integrity,
    ),
    StatusEntry::new(
        abi::VERSION_MISMATCH,
        "VERSION_MISMATCH",
        "DB file version mismatch with libmdbx",
        Integrity,
    ),
    StatusEntry::new(abi::INVALID, "INVALID", "File is not a valid MDBX file", Integrity),
    StatusEntry::new(abi::MAP_FULL, "MAP_FULL", "Environment mapsize reached", ResourceExhausted),
    StatusEntry::new(abi::DBS_FULL, "DBS_FULL", "Environment maxdbs reached", ResourceExhausted),
    StatusEntry::new(
        abi::READERS_FULL,
        "READERS_FULL",
        "Environment maxreaders reached",
        ResourceExhausted,
    ),
    StatusEntry::new(
        abi::TXN_FULL,
        "TXN_FULL",
        "Transaction has too many dirty pages",
        ResourceExhausted,
    ),
    StatusEntry::new(
        abi::CURSOR_FULL,
        "CURSOR_FULL",
        "Cursor stack too deep - internal error",
        ResourceExhausted,
    ),
    StatusEntry::new(
        abi::PAGE_FULL,
        "PAGE_FULL",
        "Page has not enough space - internal error",
        ResourceExhausted,
    ),
    StatusEntry::new(
        abi::MAP_RESIZED,
        "MAP_RESIZED",
        "Database contents grew beyond environment mapsize",
        Concurrency,
    ),
    StatusEntry::new(
        abi::INCOMPATIBLE,
        "INCOMPATIBLE",
        "Operation and DB incompatible, or DB type changed",
        Concurrency,
    ),
    StatusEntry::new(
        abi::BAD_RSLOT,
        "BAD_RSLOT",
        "Invalid reuse of reader locktable slot",
        Concurrency,
    ),
    StatusEntry::new(
        abi::BAD_TXN,
        "BAD_TXN",
        "Transaction must abort, has a child, or is invalid",
        Concurrency,
    ),
    StatusEntry::new(
        abi::BAD_VALSIZE,
        "BAD_VALSIZE",
        "Unsupported size of key/DB name/data, or wrong DUPFIXED size",
        Misuse,
    ),
    StatusEntry::new(
        abi::BAD_DBI,
        "BAD_DBI",
        "The specified DBI was changed unexpectedly",
        Misuse,
    ),
    StatusEntry::new(
        abi::PROBLEM,
        "PROBLEM",
        "Unexpected problem - Transaction should abort",
        Misuse,
    ),
    StatusEntry::new(abi::BUSY, "BUSY", "Another write transaction is running", Concurrency),
    StatusEntry::new(
        abi::EMULTIVAL,
        "EMULTIVAL",
        "A put or replace was called for a key that has more than one associated value",
        Misuse,
    ),
    StatusEntry::new(
        abi::EBADSIGN,
        "BAD_SIGNATURE",
        "Bad signature of a runtime object: memory corruption, double-free, or ABI version mismatch",
        Integrity,
    ),
    StatusEntry::new(
        abi::WANNA_RECOVERY,
        "WANNA_RECOVERY",
        "Database should be recovered, but this could not be done automatically right now",
        Integrity,
    ),
    StatusEntry::new(
        abi::EKEYMISMATCH,
        "KEY_MISMATCH",
        "The given key value is mismatched to the current cursor position",
        Misuse,
    ),
    StatusEntry::new(
        abi::TOO_LARGE,
        "TOO_LARGE",
        "Database is too large for current system, e.g. could not be mapped into RAM",
        ResourceExhausted,
    ),
    StatusEntry::new(
        abi::THREAD_MISMATCH,
        "THREAD_MISMATCH",
        "A thread has attempted to use an object it does not own",
        Concurrency,
    ),
];

static GLOBAL: LazyLock<StatusRegistry> = LazyLock::new(|| StatusRegistry::from_table(&TABLE));

/// Read-only mapping from status code to [`StatusEntry`].
///
/// # Example
///
/// ```rust
/// use mdbx_error::{abi, StatusRegistry};
///
/// let busy = StatusRegistry::global().lookup(abi::BUSY).unwrap();
/// assert_eq!(busy.name(), "BUSY");
/// assert!(StatusRegistry::global().lookup(123_456).is_none());
/// ```
#[derive(Debug)]
pub struct StatusRegistry {
    entries: &'static [StatusEntry],
    by_code: HashMap<i32, usize>,
}

impl StatusRegistry {
    fn from_table(entries: &'static [StatusEntry]) -> Self {
        let mut by_code = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let prev = by_code.insert(entry.code, i);
            debug_assert!(prev.is_none(), "duplicate status code {}", entry.code);
        }
        Self { entries, by_code }
    }

    /// The process-wide registry
    pub fn global() -> &'static StatusRegistry {
        &GLOBAL
    }

    /// Resolve a code. Unregistered codes yield `None`.
    pub fn lookup(&self, code: i32) -> Option<StatusEntry> {
        self.by_code.get(&code).map(|&i| self.entries[i])
    }

    /// Resolve a canonical name, e.g. `"TXN_FULL"`
    pub fn by_name(&self, name: &str) -> Option<StatusEntry> {
        self.entries.iter().find(|e| e.name == name).copied()
    }

    /// All entries in table order
    pub fn entries(&self) -> impl Iterator<Item = &StatusEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn version(&self) -> u32 {
        REGISTRY_VERSION
    }
}

/// Shorthand for `StatusRegistry::global().lookup(code)`
pub fn lookup(code: i32) -> Option<StatusEntry> {
    StatusRegistry::global().lookup(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const CANONICAL: [&str; 36] = [
        "EINVAL",
        "EACCES",
        "ENODATA",
        "ENOMEM",
        "EROFS",
        "ENOSYS",
        "EIO",
        "EPERM",
        "EINTR",
        "KEYEXIST",
        "NOTFOUND",
        "PAGE_NOTFOUND",
        "CORRUPTED",
        "PANIC",
        "VERSION_MISMATCH",
        "INVALID",
        "BAD_SIGNATURE",
        "WANNA_RECOVERY",
        "MAP_FULL",
        "DBS_FULL",
        "READERS_FULL",
        "TXN_FULL",
        "CURSOR_FULL",
        "PAGE_FULL",
        "TOO_LARGE",
        "MAP_RESIZED",
        "INCOMPATIBLE",
        "BAD_RSLOT",
        "BAD_TXN",
        "BUSY",
        "THREAD_MISMATCH",
        "BAD_VALSIZE",
        "BAD_DBI",
        "PROBLEM",
        "EMULTIVAL",
        "KEY_MISMATCH",
    ];

    #[test]
    fn test_lookup_round_trip() {
        let registry = StatusRegistry::global();
        for entry in registry.entries() {
            assert_eq!(registry.lookup(entry.code()), Some(*entry));
        }
    }

    #[test]
    fn test_codes_unique() {
        let codes: HashSet<i32> = TABLE.iter().map(|e| e.code).collect();
        assert_eq!(codes.len(), TABLE.len());
        let names: HashSet<&str> = TABLE.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), TABLE.len());
    }

    #[test]
    fn test_table_contents() {
        let registry = StatusRegistry::global();
        assert_eq!(registry.len(), CANONICAL.len() + 1);
        for name in CANONICAL {
            let entry = registry.by_name(name).unwrap_or_else(|| panic!("missing {}", name));
            assert!(!entry.is_success());
            assert!(!entry.reason_phrase().is_empty());
        }
    }

    #[test]
    fn test_ok_sentinel() {
        let ok = lookup(0).unwrap();
        assert_eq!(ok.name(), "OK");
        assert_eq!(ok.reason_phrase(), "OK");
        assert_eq!(ok.category(), Category::Success);
        assert!(ok.is_success());
    }

    #[test]
    fn test_unknown_code() {
        assert!(lookup(99999).is_none());
        assert!(lookup(i32::MIN).is_none());
        assert!(lookup(-30789).is_none());
    }

    #[test]
    fn test_busy_reason() {
        let busy = lookup(abi::BUSY).unwrap();
        assert_eq!(busy.to_string(), "Another write transaction is running");
        assert_eq!(busy.category(), Category::Concurrency);
    }

    #[test]
    fn test_categories() {
        let registry = StatusRegistry::global();
        let cat = |name| registry.by_name(name).unwrap().category();
        assert_eq!(cat("ENOMEM"), Category::Generic);
        assert_eq!(cat("NOTFOUND"), Category::Presence);
        assert_eq!(cat("WANNA_RECOVERY"), Category::Integrity);
        assert_eq!(cat("TOO_LARGE"), Category::ResourceExhausted);
        assert_eq!(cat("MAP_RESIZED"), Category::Concurrency);
        assert_eq!(cat("KEY_MISMATCH"), Category::Misuse);
    }

    #[test]
    fn test_by_name_is_exact() {
        let registry = StatusRegistry::global();
        assert!(registry.by_name("busy").is_none());
        assert!(registry.by_name("").is_none());
    }

    #[test]
    fn test_serialize_entry() {
        let entry = lookup(abi::TXN_FULL).unwrap();
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["name"], "TXN_FULL");
        assert_eq!(json["code"], abi::TXN_FULL);
        assert_eq!(json["category"], "resource_exhausted");
    }
}
