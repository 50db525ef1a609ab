//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. The app has a single functional screen;
//! routing is the navigation host's concern.

pub mod generator;
