//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Validation result model (Citation, Finding, ValidationReport)
//! - Rendering functions for different output formats
//! - Cited path resolution
//! - Strict text reading and line counting
//! - Run-level error types

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
