//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the brief editor and result viewer while reading and
//! writing the session state provided via context in `app.rs`.

pub mod brief_form;
pub mod result_tabs;
