//! # Thread Utilities

use std::thread;

/// The search list of environment variables that Rayon uses to control parallelism.
#[cfg(feature = "rayon")]
const RAYON_VARS: &[&str] = &["RAYON_NUM_THREADS", "RAYON_RS_NUM_CPUS"];

/// Get the max parallelism available.
///
/// When `rayon` is enabled, will scan over `RAYON_VARS` first.
///
/// Never returns 0; platforms that report no parallelism count as 1.
pub fn est_max_parallelism() -> usize {
    #[cfg(feature = "rayon")]
    for name in RAYON_VARS {
        if let Some(n @ 1..) = std::env::var(name).ok().and_then(|s| s.parse::<usize>().ok()) {
            return n;
        }
    }

    thread::available_parallelism().map_or(1, |n| n.get())
}
