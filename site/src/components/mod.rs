//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and project cards. Each instance owns its
//! own signals, timers, and listeners; nothing is shared between instances.

pub mod header;
pub mod project_card;
