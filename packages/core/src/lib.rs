// Library root — exposes internal modules for integration tests in `tests/`.
// Production entry point remains `src/main.rs`.

pub mod error;
pub mod pipeline;
pub mod services;
pub mod session;
pub mod store;
pub mod vacancy;

// These modules are only needed by the binary.
// Declared pub so integration tests can reach them if needed, but they
// contain no logic of interest to tests.
pub mod cli;
pub mod config;
pub mod logging;
