//! # mdbx-error
//!
//! Status-code translation for libmdbx bindings.
//!
//! ## Design
//!
//! - **StatusRegistry**: a fixed table mapping engine codes to a canonical name,
//!   a reason phrase and a [`Category`]
//! - **EngineError**: a message plus the code the engine returned, formatted as
//!   `"<message>,rc:<NAME>"` (or the decimal code when unregistered)
//! - **check / ResultExt**: glue for wrappers that call into the engine
//!
//! ## Usage
//!
//! ```rust
//! use mdbx_error::{abi, check, lookup, ResultExt};
//!
//! fn get(rc: i32) -> mdbx_error::Result<Option<Vec<u8>>> {
//!     check(rc, "get failed").map(|()| b"value".to_vec()).optional()
//! }
//!
//! assert_eq!(get(abi::NOTFOUND).unwrap(), None);
//! assert_eq!(get(abi::BUSY).unwrap_err().to_string(), "get failed,rc:BUSY");
//! assert_eq!(lookup(abi::BUSY).unwrap().reason_phrase(), "Another write transaction is running");
//! ```
//!
//! ## Principles
//!
//! - Unknown codes are expected; lookup returns `None` and formatting falls
//!   back to the number
//! - Categories describe, they never drive retries inside this crate
//! - Errors are fully built at construction and never mutated afterwards

pub mod abi;
mod category;
mod error;
mod result;
mod status;

pub use category::Category;
pub use error::EngineError;
pub use result::{check, ResultExt};
pub use status::{lookup, StatusEntry, StatusRegistry, REGISTRY_VERSION};

/// Result type alias using EngineError
pub type Result<T> = std::result::Result<T, EngineError>;
