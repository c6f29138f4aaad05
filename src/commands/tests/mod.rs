//! Tests for the command layer
