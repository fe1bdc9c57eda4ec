//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing decisions, browser file handling and
//! display formatting from page and component logic so they stay testable
//! without a DOM.

pub mod format;
pub mod guard;
pub mod route;
pub mod upload;
