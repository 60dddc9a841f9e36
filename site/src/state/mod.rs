//! Per-component UI state.
//!
//! DESIGN
//! ======
//! Each model is a plain value owned by one component instance through an
//! `RwSignal`. Timers and listeners live in the components; these types only
//! decide what a tick or an event does, so they can be tested without a browser.

pub mod carousel;
pub mod flip;
pub mod menu;
