//! Common utilities for the Plinth layout engine.
//!
//! This crate provides shared infrastructure used by all Plinth components:
//! - **Warning System** - deduplicated, colored terminal output for layouts
//!   that succeed but are probably not what the caller meant

pub mod warning;
