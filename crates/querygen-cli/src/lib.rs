//! querygen CLI library.
//!
//! This crate provides the command implementations behind the `querygen`
//! binary: definition-document loading plus the `generate`, `validate`, and
//! `list` commands.

pub mod commands;
pub mod input;
