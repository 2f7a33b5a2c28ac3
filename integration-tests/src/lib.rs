//! Shared fixtures for the Strand integration tests.

pub mod fixtures;
