use log::info;

/// Component-tagged activity logging for workflow telemetry.
pub struct ActivityLog {
    component: &'static str,
}

impl ActivityLog {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.component, message);
    }
}
