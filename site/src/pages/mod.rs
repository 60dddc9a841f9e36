//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the catalog for its route and delegates rendering details
//! to `components`.

pub mod category;
pub mod home;
pub mod not_found;
