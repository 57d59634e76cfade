//! Test utilities for Slipway unit tests.
//!
//! Only compiled for tests; provides snapshot and settings builders for
//! common mapping scenarios.

pub mod fixtures;
