//! Stable exit codes for `canonical` commands.

/// Every action passed validation.
pub const OK: i32 = 0;
/// Input could not be read or parsed.
pub const INVALID: i32 = 1;
/// An action failed validation.
pub const REJECTED: i32 = 2;
