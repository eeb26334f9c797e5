//! Exit code constants for the broom CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, invalid policy/config)
//! - 2: I/O failure during setup (unreadable config or request file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid retention policy.
pub const USER_ERROR: i32 = 1;

/// I/O failure while loading configuration or a request file.
pub const IO_FAILURE: i32 = 2;
