//! Front end for the `zod-openapi-migrate` binary.
//!
//! The engine lives in `zmig-core`; this crate owns everything between the
//! command line and the engine:
//! - Argument parsing (`args`)
//! - The optional JSON configuration file (`config`)
//! - Console reporting (`reporter`)
//! - Tracing subscriber setup (`tracing_config`)

pub mod args;
pub mod config;
pub mod reporter;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod reporter_tests;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
