// ============================================================================
// Scoped Timer
// Wall-clock measurement released when the guard leaves scope
// ============================================================================

use std::time::{Duration, Instant};

/// Measures the time between its construction and drop.
///
/// On drop the elapsed time is written into the caller's slot and logged.
///
/// # Example
/// ```
/// use posit_dsp_bench::engine::ScopedTimer;
/// use std::time::Duration;
///
/// let mut elapsed = Duration::ZERO;
/// {
///     let _timer = ScopedTimer::start("work", &mut elapsed);
///     std::thread::sleep(Duration::from_millis(1));
/// }
/// assert!(elapsed >= Duration::from_millis(1));
/// ```
#[must_use = "the timer measures until it is dropped"]
pub struct ScopedTimer<'a> {
    label: &'static str,
    start: Instant,
    slot: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn start(label: &'static str, slot: &'a mut Duration) -> Self {
        Self {
            label,
            start: Instant::now(),
            slot,
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        *self.slot = self.start.elapsed();
        tracing::debug!("{} took {} microseconds", self.label, self.slot.as_micros());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_on_drop() {
        let mut elapsed = Duration::ZERO;
        {
            let _timer = ScopedTimer::start("sleep", &mut elapsed);
            std::thread::sleep(Duration::from_millis(2));
        }
        assert!(elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn test_overwrites_previous_value() {
        let mut elapsed = Duration::from_secs(3600);
        drop(ScopedTimer::start("noop", &mut elapsed));
        assert!(elapsed < Duration::from_secs(3600));
    }
}
