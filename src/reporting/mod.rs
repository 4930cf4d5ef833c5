//! Structured logging and diagnostics
//!
//! This module handles logger initialization and the structured
//! log entries emitted across the submission lifecycle.

pub mod logging;
