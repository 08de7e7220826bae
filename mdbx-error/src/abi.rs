//! Raw status codes from the libmdbx ABI.
//!
//! Engine-specific codes are the same on every platform. The generic codes
//! alias the host's errno values (or Win32 error codes on Windows), so they
//! are selected per target.

pub const SUCCESS: i32 = 0;

// =============================================================================
// Engine-specific codes
// =============================================================================

pub const KEYEXIST: i32 = -30799;
pub const NOTFOUND: i32 = -30798;
pub const PAGE_NOTFOUND: i32 = -30797;
pub const CORRUPTED: i32 = -30796;
pub const PANIC: i32 = -30795;
pub const VERSION_MISMATCH: i32 = -30794;
pub const INVALID: i32 = -30793;
pub const MAP_FULL: i32 = -30792;
pub const DBS_FULL: i32 = -30791;
pub const READERS_FULL: i32 = -30790;
pub const TXN_FULL: i32 = -30788;
pub const CURSOR_FULL: i32 = -30787;
pub const PAGE_FULL: i32 = -30786;
pub const MAP_RESIZED: i32 = -30785;
pub const INCOMPATIBLE: i32 = -30784;
pub const BAD_RSLOT: i32 = -30783;
pub const BAD_TXN: i32 = -30782;
pub const BAD_VALSIZE: i32 = -30781;
pub const BAD_DBI: i32 = -30780;
pub const PROBLEM: i32 = -30779;
pub const BUSY: i32 = -30778;
pub const EMULTIVAL: i32 = -30421;
pub const EBADSIGN: i32 = -30420;
pub const WANNA_RECOVERY: i32 = -30419;
pub const EKEYMISMATCH: i32 = -30418;
pub const TOO_LARGE: i32 = -30417;
pub const THREAD_MISMATCH: i32 = -30416;

// =============================================================================
// Generic codes (OS aliases)
// =============================================================================

#[cfg(windows)]
mod os {
    pub const EINVAL: i32 = 87; // ERROR_INVALID_PARAMETER
    pub const EACCESS: i32 = 5; // ERROR_ACCESS_DENIED
    pub const ENODATA: i32 = 38; // ERROR_HANDLE_EOF
    pub const ENOMEM: i32 = 14; // ERROR_OUTOFMEMORY
    pub const EROFS: i32 = 6009; // ERROR_FILE_READ_ONLY
    pub const ENOSYS: i32 = 50; // ERROR_NOT_SUPPORTED
    pub const EIO: i32 = 29; // ERROR_WRITE_FAULT
    pub const EPERM: i32 = 1; // ERROR_INVALID_FUNCTION
    pub const EINTR: i32 = 1223; // ERROR_CANCELLED
}

#[cfg(all(not(windows), target_vendor = "apple"))]
mod os {
    pub const EINVAL: i32 = 22;
    pub const EACCESS: i32 = 13;
    pub const ENODATA: i32 = 96;
    pub const ENOMEM: i32 = 12;
    pub const EROFS: i32 = 30;
    pub const ENOSYS: i32 = 78;
    pub const EIO: i32 = 5;
    pub const EPERM: i32 = 1;
    pub const EINTR: i32 = 4;
}

#[cfg(all(not(windows), not(target_vendor = "apple")))]
mod os {
    pub const EINVAL: i32 = 22;
    pub const EACCESS: i32 = 13;
    pub const ENODATA: i32 = 61;
    pub const ENOMEM: i32 = 12;
    pub const EROFS: i32 = 30;
    pub const ENOSYS: i32 = 38;
    pub const EIO: i32 = 5;
    pub const EPERM: i32 = 1;
    pub const EINTR: i32 = 4;
}

pub use os::*;
