use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Gateway -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Gateway -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Gateway -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Gateway -- ", "{}", message);
    }
}
