//! Unit tests for the persisted document format.

mod roundtrip_tests;
