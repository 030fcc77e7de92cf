//! Sample-config command handler.

use prehook_core::sample_config;

/// Print a starter configuration to stdout.
pub fn execute() {
    print!("{}", sample_config());
}
