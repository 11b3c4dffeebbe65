//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and interpolation helpers
//! - Monotonic clocks for frame-driven animation
//! - Handle collections for subscriber storage
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod time;
pub mod logging;
