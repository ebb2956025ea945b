//! Fixtures for the log-collector configuration tests.

fixtures_core::fixture_paths!(pub(crate));
