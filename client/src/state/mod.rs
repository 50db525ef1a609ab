//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs wrapped in `RwSignal` context at the app
//! root, so components stay thin and the structs stay unit-testable
//! without a browser.

pub mod session;
