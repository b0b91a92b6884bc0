//! Exit code constants for the fieldcheck CLI.
//!
//! - 0: Success (every record valid)
//! - 1: User error (bad args, unreadable or invalid schema/record file)
//! - 2: Validation failure (at least one record has violations)
//! - 3: Configuration defect (unknown check, unsupported field kind)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unreadable input files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: one or more records violated their rules.
pub const VALIDATION_FAILURE: i32 = 2;

/// Configuration defect: a rule or field kind cannot be interpreted.
pub const CONFIGURATION_DEFECT: i32 = 3;
