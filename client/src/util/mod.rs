//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, dialogs, locale
//! formatting) and routing rules from page logic to improve reuse and
//! testability.

pub mod dialog;
pub mod guard;
pub mod storage;
pub mod time;
