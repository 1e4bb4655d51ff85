//! Exit code constants for the stencil CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, malformed --set pair)
//! - 2: Config failure (unparseable or invalid config file)
//! - 3: I/O failure (missing template, unwritable destination)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a malformed --set pair.
pub const USER_ERROR: i32 = 1;

/// Config failure: the config file could not be parsed or validated.
pub const CONFIG_FAILURE: i32 = 2;

/// I/O failure: the template could not be read or the output written.
pub const IO_FAILURE: i32 = 3;
