//! Status categories

use serde::Serialize;
use std::fmt;

/// The broad class a status code belongs to.
///
/// Categories are attached to every registered entry so callers can decide
/// how to react to a failure without matching on individual codes. Nothing in
/// this crate acts on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Category {
    /// The `OK` sentinel
    Success,

    /// OS-level failures (permissions, disk, memory)
    Generic,

    /// A key was missing or already present
    Presence,

    /// The database or a runtime object is damaged
    Integrity,

    /// A configured limit was reached
    ResourceExhausted,

    /// Contention or a stale handle
    Concurrency,

    /// The engine was called incorrectly
    Misuse,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Success,
        Category::Generic,
        Category::Presence,
        Category::Integrity,
        Category::ResourceExhausted,
        Category::Concurrency,
        Category::Misuse,
    ];

    /// Returns the category as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Generic => "generic",
            Category::Presence => "presence",
            Category::Integrity => "integrity",
            Category::ResourceExhausted => "resource_exhausted",
            Category::Concurrency => "concurrency",
            Category::Misuse => "misuse",
        }
    }

    /// Short advice for code that receives a failure of this category
    pub fn guidance(&self) -> &'static str {
        match self {
            Category::Success => "no action needed",
            Category::Generic => "not retryable without an external fix",
            Category::Presence => "expected in some call patterns, not necessarily fatal",
            Category::Integrity => "fatal to the handle, run recovery outside the binding",
            Category::ResourceExhausted => "shrink the operation, raise limits, or fail",
            Category::Concurrency => "retry after backoff or after reopening the handle",
            Category::Misuse => "programming error, surface it",
        }
    }

    /// Whether a failure of this category may succeed when retried as-is
    pub fn is_retryable(&self) -> bool {
        matches!(self, Category::Concurrency)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::ResourceExhausted.to_string(), "resource_exhausted");
        assert_eq!(Category::Presence.to_string(), "presence");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Category::Concurrency.is_retryable());
        assert!(!Category::Integrity.is_retryable());
        assert!(!Category::Misuse.is_retryable());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("misuse".parse::<Category>(), Ok(Category::Misuse));
        assert_eq!("Concurrency".parse::<Category>(), Ok(Category::Concurrency));
        assert!("bogus".parse::<Category>().is_err());
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&Category::ResourceExhausted).unwrap();
        assert_eq!(json, "\"resource_exhausted\"");
    }
}
