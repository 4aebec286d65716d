use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards planner log events to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Planner -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Planner -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Planner -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Planner -- ", "{}", message);
    }
}
