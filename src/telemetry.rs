//! Process-level collaborators (§10.5): memory reporting. Wall-clock
//! timing is read directly from `std::time::Instant` at the call site in
//! [`crate::cli`] and needs no module of its own. Neither of these
//! influences solver behavior — they are read only after `solve()`
//! returns.

/// Reads the process's resident set size from `/proc/self/status`'s
/// `VmRSS` line, matching the original source's Linux probe. Returns
/// `None` on any other platform, or if the line cannot be found or parsed.
#[cfg(target_os = "linux")]
pub fn memory_used_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    status.lines().find_map(|line| {
        line.strip_prefix("VmRSS:")
            .and_then(|rest| rest.trim().split_whitespace().next())
            .and_then(|kb| kb.parse().ok())
    })
}

#[cfg(not(target_os = "linux"))]
pub fn memory_used_kb() -> Option<u64> {
    None
}
