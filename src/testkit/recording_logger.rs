use crate::logger::AdvisorySink;
use std::sync::{Arc, Mutex};

/// Advisory sink that keeps every message for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("Lock poisoned").clone()
    }
}

impl AdvisorySink for RecordingLogger {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("Lock poisoned")
            .push(message.to_string());
    }
}
