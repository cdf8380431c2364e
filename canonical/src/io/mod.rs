//! Filesystem access for `canonical` commands.

pub mod action_log;
