//! Structural validation for actions and reducer definitions.
//!
//! - **[`core`]**: the two validators and the untyped [`Value`] they inspect. Pure and
//!   deterministic.
//! - **[`io`]**: reading recorded action logs from disk.
//!
//! [`check`] ties the two together for the `canonical` binary.

pub mod check;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::action::validate_action;
pub use crate::core::reducer::validate_reducer;
pub use crate::core::value::{Handler, Instance, Map, Value};
pub use crate::error::{ActionField, ValidationError};
