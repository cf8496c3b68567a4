//! Strider Harness: load, run, verify, and render planning tasks.
//!
//! The harness drives the search crate through a fixed pipeline
//! (`load_instance` → `search` → `replay_to_goal` → report) and owns the
//! instance text format.
//!
//! The harness does NOT implement search or verification logic; it
//! delegates to `strider_search` and `strider_kernel`. Worlds provide
//! domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod loader;
pub mod render;
pub mod runner;
pub mod worlds;

pub use config::{ConfigError, RunConfig};
pub use loader::{load_instance, parse_instance, LoadError};
pub use runner::{run, run_all, run_file, RunError, RunReport, Verification};
