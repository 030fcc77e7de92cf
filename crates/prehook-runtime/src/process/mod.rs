//! Process lifecycle helpers for hook commands.

mod shutdown;

pub use shutdown::{SHUTDOWN_GRACE, kill_process_group, shutdown_child};
