//! Consolidated integration tests for weft-core.

mod kinds;
mod values;
