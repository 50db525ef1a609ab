//! Networking modules for the generation service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the single HTTP call this client makes. The wire schema
//! itself lives in the shared `content` crate so serde round-trips stay
//! lossless across the client/server boundary.

pub mod api;
