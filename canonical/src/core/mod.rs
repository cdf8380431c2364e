//! Pure shape checks for actions and reducer definitions.
//!
//! Core modules are free of I/O and logging. They take an in-memory [`value::Value`]
//! and return the first violation found.

pub mod action;
pub mod reducer;
pub mod value;
