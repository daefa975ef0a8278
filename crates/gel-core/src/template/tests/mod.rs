//! Tests for the template compiler
//!
//! Organized by pipeline stage, with shared helpers.

use super::*;

// Test helper functions
mod helpers;

mod document;
mod header;
