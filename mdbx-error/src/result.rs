//! Helpers for turning engine return codes into `Result`s

use crate::{abi, EngineError, Result};

/// Convert an engine return code into a `Result`.
///
/// `0` is success; anything else becomes an [`EngineError`] carrying
/// `message` and the code.
pub fn check(rc: i32, message: impl Into<String>) -> Result<()> {
    if rc == abi::SUCCESS {
        return Ok(());
    }
    let err = EngineError::with_code(message, rc);
    tracing::debug!(rc, status = ?err.status().map(|s| s.name()), "{}", err);
    Err(err)
}

/// Extension methods on engine results.
pub trait ResultExt<T> {
    /// Treat `NOTFOUND` as an absent value rather than a failure.
    ///
    /// Every other error is passed through unchanged.
    fn optional(self) -> Result<Option<T>>;
}

impl<T> ResultExt<T> for Result<T> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(rc: i32) -> Result<&'static str> {
        check(rc, "get failed").map(|()| "value")
    }

    #[test]
    fn test_check_success() {
        assert!(check(abi::SUCCESS, "noop").is_ok());
    }

    #[test]
    fn test_check_failure() {
        let err = check(abi::BUSY, "begin failed").unwrap_err();
        assert_eq!(err.code(), Some(abi::BUSY));
        assert_eq!(err.error_message(), "begin failed,rc:BUSY");
    }

    #[test]
    fn test_check_unknown_code() {
        let err = check(-31000, "future failure").unwrap_err();
        assert_eq!(err.error_message(), "future failure,rc:-31000");
    }

    #[test]
    fn test_optional() {
        assert_eq!(get(abi::SUCCESS).optional().unwrap(), Some("value"));
        assert_eq!(get(abi::NOTFOUND).optional().unwrap(), None);

        let err = get(abi::CORRUPTED).optional().unwrap_err();
        assert_eq!(err.error_message(), "get failed,rc:CORRUPTED");
    }
}
