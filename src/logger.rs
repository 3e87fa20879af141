//! Advisory diagnostics.
//!
//! Advisory messages tell the user about class names that were removed from
//! a generated type. They never fail a build. With `silent` set they are
//! discarded entirely.

/// Destination for advisory messages.
pub trait AdvisorySink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Sink that forwards to `log::warn!` unless silenced.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryLogger {
    silent: bool,
}

impl AdvisoryLogger {
    pub fn new(silent: bool) -> Self {
        Self { silent }
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

impl AdvisorySink for AdvisoryLogger {
    fn warn(&self, message: &str) {
        if self.silent {
            return;
        }
        log::warn!(target: "recss", "{}", message);
    }
}

/// Report names dropped for colliding with reserved words.
pub fn report_keyword_collisions(sink: &dyn AdvisorySink, file_name: &str, keywords: &[String]) {
    if keywords.is_empty() {
        return;
    }
    sink.warn(&format!(
        "{} has classNames that are ReasonML keywords:",
        file_name
    ));
    sink.warn(
        &keywords
            .iter()
            .map(|keyword| format!("  - {}", keyword))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    sink.warn("They are removed from the module definition.");
}
