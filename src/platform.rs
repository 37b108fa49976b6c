//! Platform probes: physical memory and Java runtime autodetection.

use std::path::PathBuf;

use sysinfo::System;

const RUNTIME_EXE: &str = if cfg!(windows) { "java.exe" } else { "java" };

/// Total physical memory in MiB.
pub fn total_memory_mib() -> u64 {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.total_memory() / (1024 * 1024)
}

/// Autodetect the Java runtime executable: JAVA_HOME first, then PATH.
/// Falls back to the bare executable name and lets the OS resolve it.
pub fn default_runtime() -> PathBuf {
    if let Ok(home) = std::env::var("JAVA_HOME") {
        let candidate = PathBuf::from(home).join("bin").join(RUNTIME_EXE);
        if candidate.is_file() {
            return candidate;
        }
    }

    if let Some(path) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&path) {
            let candidate = dir.join(RUNTIME_EXE);
            if candidate.is_file() {
                return candidate;
            }
        }
    }

    PathBuf::from(RUNTIME_EXE)
}
