use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

lazy_static::lazy_static! {
    static ref GLOBAL: InteractiveContext = InteractiveContext::new();
}

/// Shared "was the previous write interactive" flag backing the
/// single-line-redraw protocol. Every logger in a process normally shares
/// the global context, which is what couples an interactive logger's
/// erase behavior to whatever was written last, by any logger. Tests can
/// construct an isolated context instead.
#[derive(Clone)]
pub struct InteractiveContext {
    previous_was_interactive: Arc<AtomicBool>,
}

impl InteractiveContext {
    pub fn new() -> Self {
        Self {
            previous_was_interactive: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The process-lifetime context every logger uses unless told
    /// otherwise.
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    pub(crate) fn previous_was_interactive(&self) -> bool {
        self.previous_was_interactive.load(Ordering::Relaxed)
    }

    pub(crate) fn set_previous_interactive(&self, interactive: bool) {
        self.previous_was_interactive
            .store(interactive, Ordering::Relaxed);
    }
}

impl Default for InteractiveContext {
    fn default() -> Self {
        Self::new()
    }
}
