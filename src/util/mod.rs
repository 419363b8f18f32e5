//! Utility helpers shared across navigator and theme modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from navigation
//! logic to improve reuse and testability.

pub mod dark_mode;
pub mod debounce;
#[cfg(feature = "browser")]
pub mod page_shell;
pub mod viewport;
