//! Stack memory shared by both phases of a calculation
//!
//! This module provides the core storage abstractions:
//! - [`entry`]: Tagged stack element ([`entry::Entry`]) and the [`entry::Operator`] set
//! - [`stack`]: Vec-backed LIFO [`stack::Stack`]
//!
//! # Ownership
//!
//! Each translation or evaluation owns a private stack for its whole run.
//! Nothing is shared between calls, so a failed run cannot leave entries
//! behind for the next one.

pub mod entry;
pub mod stack;
