//! Reporter forwarding pipeline events to `tracing`.

use tracing::{debug, error, info, warn};

use crate::domain::report::{EventKind, ScrapeEvent, ScrapeReporter};

/// Logs each [`ScrapeEvent`] at the level of its [`EventKind`].
///
/// | kind          | level  |
/// |---------------|--------|
/// | transport     | ERROR  |
/// | persistence   | ERROR  |
/// | structural    | WARN   |
/// | progress      | INFO (per-entry progress at DEBUG) |
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ScrapeReporter for TracingReporter {
    fn report(&self, event: ScrapeEvent) {
        match event.kind() {
            EventKind::Transport | EventKind::Persistence => error!("{}", event),
            EventKind::Structural => warn!("{}", event),
            EventKind::Progress => match event {
                ScrapeEvent::EntryResolved { .. } => debug!("{}", event),
                _ => info!("{}", event),
            },
        }
    }
}
