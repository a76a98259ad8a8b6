//! Bounded wait loops for startup readiness and shutdown.
//!
//! Both loops return `PollOutcome::TimedOut` as a soft verdict; callers
//! surface a warning and re-check final state instead of aborting.

use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::{debug, info, warn};

use nifictl_core::ports::{HealthProbe, ProcessInspector};
use nifictl_core::state::PollOutcome;

/// Poll the health endpoint until it answers or `timeout` elapses.
///
/// Each failed probe (connection refused, request timeout, non-2xx) is
/// followed by a `poll_interval` pause before the retry.
pub async fn wait_until_ready(
    probe: &dyn HealthProbe,
    timeout: Duration,
    poll_interval: Duration,
) -> PollOutcome {
    info!("waiting up to {}s for the API to answer", timeout.as_secs());
    let started = Instant::now();

    loop {
        if probe.check().await {
            info!("API is answering after {:.1}s", started.elapsed().as_secs_f64());
            return PollOutcome::Ready;
        }
        if started.elapsed() >= timeout {
            warn!("API did not answer within {}s", timeout.as_secs());
            return PollOutcome::TimedOut;
        }
        sleep(poll_interval).await;
    }
}

/// Poll OS liveness until the daemon's process disappears or `timeout`
/// elapses. The handle is re-resolved on every iteration.
pub async fn wait_until_stopped(
    inspector: &dyn ProcessInspector,
    timeout: Duration,
    poll_interval: Duration,
) -> PollOutcome {
    let started = Instant::now();

    loop {
        let handle = inspector.locate();
        if !inspector.is_alive(&handle) {
            debug!("process gone after {:.1}s", started.elapsed().as_secs_f64());
            return PollOutcome::Ready;
        }
        if started.elapsed() >= timeout {
            warn!("process still alive after {}s", timeout.as_secs());
            return PollOutcome::TimedOut;
        }
        sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use nifictl_core::state::ProcessHandle;

    /// Probe that answers `true` once `ready_after` checks have happened.
    struct CountdownProbe {
        checks: AtomicUsize,
        ready_after: usize,
    }

    #[async_trait]
    impl HealthProbe for CountdownProbe {
        async fn check(&self) -> bool {
            self.checks.fetch_add(1, Ordering::SeqCst) + 1 >= self.ready_after
        }
    }

    struct AlwaysAlive;

    impl ProcessInspector for AlwaysAlive {
        fn locate(&self) -> ProcessHandle {
            ProcessHandle::ProcessScan(1)
        }

        fn is_alive(&self, handle: &ProcessHandle) -> bool {
            !handle.is_none()
        }
    }

    #[tokio::test]
    async fn ready_endpoint_ends_the_wait() {
        let probe = CountdownProbe {
            checks: AtomicUsize::new(0),
            ready_after: 3,
        };

        let outcome = wait_until_ready(
            &probe,
            Duration::from_secs(5),
            Duration::from_millis(10),
        )
        .await;

        assert_eq!(outcome, PollOutcome::Ready);
        assert_eq!(probe.checks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn never_ready_endpoint_times_out_near_deadline() {
        let probe = CountdownProbe {
            checks: AtomicUsize::new(0),
            ready_after: usize::MAX,
        };

        let started = Instant::now();
        let outcome = wait_until_ready(
            &probe,
            Duration::from_millis(250),
            Duration::from_millis(50),
        )
        .await;
        let elapsed = started.elapsed();

        assert_eq!(outcome, PollOutcome::TimedOut);
        // Bounded: approximately the timeout, give or take one interval,
        // never an indefinite hang.
        assert!(elapsed >= Duration::from_millis(250));
        assert!(elapsed < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn surviving_process_times_out_the_stop_wait() {
        let outcome = wait_until_stopped(
            &AlwaysAlive,
            Duration::from_millis(100),
            Duration::from_millis(20),
        )
        .await;

        assert_eq!(outcome, PollOutcome::TimedOut);
    }
}
