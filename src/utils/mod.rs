//! Utilities for tier_schema
//!
//! This module provides utility functions used across the library.

pub mod logging;
pub mod naming;

// Re-export key utility functions
pub use naming::{constraint_name, format_name, index_name, is_safe_identifier};
