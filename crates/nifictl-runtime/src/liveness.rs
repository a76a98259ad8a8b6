//! OS-level process liveness probe.

/// Check whether a PID currently corresponds to a signalable process.
///
/// Sends the null signal, which performs the permission and existence
/// checks without delivering anything. `ESRCH` means no such process;
/// any other error (typically `EPERM`) means the process exists but is
/// owned by another principal, which still counts as alive. No elevated
/// privileges are needed.
#[cfg(unix)]
pub fn pid_exists(pid: u32) -> bool {
    use nix::sys::signal;
    use nix::unistd::Pid;

    match signal::kill(Pid::from_raw(pid as i32), None) {
        Ok(()) => true,
        Err(nix::errno::Errno::ESRCH) => false,
        Err(_) => true,
    }
}

#[cfg(not(unix))]
pub fn pid_exists(_pid: u32) -> bool {
    false // Not implemented on non-Unix
}
