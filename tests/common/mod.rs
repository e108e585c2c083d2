//! Common test utilities for apigen CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated project directory with helpers to run the binary
//! - A fake generator script standing in for `openapi-generator-cli`

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
