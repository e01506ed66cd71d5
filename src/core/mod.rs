//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The intermediate document model (FileRecord, tokens, styled runs)
//! - The error taxonomy for a conversion run
//! - The extension -> language hint table
//! - Path normalization utilities
//! - The token category -> presentation style table

pub mod error;
pub mod language;
pub mod model;
pub mod paths;
pub mod style;
