//! The error value surfaced for failed engine calls

use crate::{abi, lookup, Category, StatusEntry};
use std::fmt;

/// A failed engine call.
///
/// Carries the message supplied by the calling wrapper and, usually, the
/// status code the engine returned. The formatted message resolves the code
/// against the [`StatusRegistry`](crate::StatusRegistry) every time it is
/// requested:
///
/// - `"<message>,rc:<NAME>"` when the code is registered
/// - `"<message>,rc:<code>"` when it is not
/// - `"<message>"` when no code was supplied
///
/// Operation and context are debugging aids. They show up in `Debug` output
/// and never change the formatted message.
///
/// # Example
///
/// ```rust
/// use mdbx_error::{abi, EngineError};
///
/// let err = EngineError::with_code("put failed", abi::KEYEXIST)
///     .with_operation("txn::put")
///     .with_context("dbi", "2");
///
/// assert_eq!(err.error_message(), "put failed,rc:KEYEXIST");
/// assert_eq!(err.code(), Some(abi::KEYEXIST));
/// assert!(err.is_key_exist());
/// ```
pub struct EngineError {
    message: String,
    code: Option<i32>,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl EngineError {
    /// Create an error with no status code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Create an error for a status code returned by the engine
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::new(message)
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// The message as supplied, without the status suffix
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The raw status code, if one was supplied
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// The registered entry for the code, if any
    pub fn status(&self) -> Option<StatusEntry> {
        self.code.and_then(lookup)
    }

    pub fn category(&self) -> Option<Category> {
        self.status().map(|s| s.category())
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Some(abi::NOTFOUND)
    }

    pub fn is_key_exist(&self) -> bool {
        self.code == Some(abi::KEYEXIST)
    }

    /// The message with the resolved status appended
    pub fn error_message(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Set the operation that failed.
    ///
    /// A previously set operation is moved to context as "called".
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the underlying error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

// =============================================================================
// Display - the formatted message
// =============================================================================

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        match self.code {
            None => Ok(()),
            Some(code) => match lookup(code) {
                Some(entry) => write!(f, ",rc:{}", entry.name()),
                None => write!(f, ",rc:{}", code),
            },
        }
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)?;
        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }
        writeln!(f)?;

        if let Some(status) = self.status() {
            writeln!(f)?;
            writeln!(f, "    Status: {} ({}): {}", status.name(), status.code(), status)?;
            writeln!(f, "    Category: {}", status.category())?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
