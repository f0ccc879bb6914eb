//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Computation failed (division by zero)
pub const COMPUTE: i32 = 2;

/// Command line usage error (clap reports these itself with the same code)
pub const USAGE: i32 = 2;
