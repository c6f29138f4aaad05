//! Tests for the run module

mod test_utils;
mod discovery_tests;
mod settings_tests;
