//! Tests for the aligner module

mod overlap_tests;
mod crop_tests;
