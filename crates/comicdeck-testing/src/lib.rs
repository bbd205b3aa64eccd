//! Testing infrastructure for comicdeck integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `FakeCatalog`: in-process HTTP server standing in for `/api/comics`
//! - `fixtures`: sample comics and their JSON encoding
//! - `TestWorld`: isolated data directory + CLI invocation with a fake backend

pub mod fixtures;
pub mod server;
pub mod world;

pub use server::{FakeCatalog, FakeResponse, RecordedRequest};
pub use world::TestWorld;
