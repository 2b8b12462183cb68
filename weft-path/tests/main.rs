//! Consolidated integration tests for weft-path.
