//! Integration tests for Layer 3: Runtime
//!
//! Tests for loading board files and scene serialization.

mod loading;
mod serialization;
