use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Bookkeeping for `Logger::time`/`Logger::time_end`. Auto-generated
/// labels are kept on a stack so a label-less `time_end` stops the most
/// recently started label-less timer.
#[derive(Debug, Clone, Default)]
pub(crate) struct TimerTracker {
    timers: BTreeMap<String, Instant>,
    sequence: Vec<String>,
}

impl TimerTracker {
    /// Start tracking. Returns the label under which the timer runs,
    /// synthesizing `timer_<n>` when none is given.
    pub(crate) fn start(&mut self, label: Option<String>) -> String {
        let label = match label {
            Some(label) => label,
            None => {
                let label = format!("timer_{}", self.timers.len());
                self.sequence.push(label.clone());
                label
            }
        };

        self.timers.insert(label.clone(), Instant::now());
        label
    }

    /// Stop a timer and return its label and elapsed time. A label-less
    /// call pops the auto-label stack; an untracked label returns `None`.
    pub(crate) fn stop(&mut self, label: Option<String>) -> Option<(String, Duration)> {
        let label = match label {
            Some(label) => label,
            None => self.sequence.pop()?,
        };

        let started_at = self.timers.remove(&label)?;
        Some((label, started_at.elapsed()))
    }
}

/// `480ms` under a second, `2.50s` from there on.
pub(crate) fn format_span(span: Duration) -> String {
    let millis = span.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.2}s", millis as f64 / 1000.0)
    }
}
