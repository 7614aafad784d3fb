use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "gemini_client", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "gemini_client", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "gemini_client", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "gemini_client", "{}", message);
    }
}
