//! OS-level adapters for prehook.
//!
//! Implements the ports defined in `prehook-core`:
//! - [`GitRepoResolver`] checks hook repositories out at a pinned revision
//!   into a local cache and reads their manifest
//! - [`ProcessHookExecutor`] spawns hook commands, captures their output and
//!   enforces a timeout with graceful shutdown

#![deny(unsafe_code)]

mod executor;
pub mod process;
mod repo;

pub use executor::ProcessHookExecutor;
pub use repo::GitRepoResolver;
