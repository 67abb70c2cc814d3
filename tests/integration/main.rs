//! Cross-layer integration tests for Pingboard
//!
//! Tests that verify correct interaction between multiple crates.
