//! Utility modules.

/// Date/time serialization helpers for registrar timestamps.
pub mod datetime;

/// Log sanitization utilities to keep secrets and large bodies out of logs.
pub mod log_sanitizer;
