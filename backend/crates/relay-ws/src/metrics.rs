use metrics::{counter, gauge, histogram};

/// Metrics collector for WebSocket operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "relay_ws",
        }
    }

    /// Record new connection established
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record connection closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    /// Record frame received from a client (ignored by the relay)
    pub fn message_received(&self, message_type: &str) {
        counter!(format!("{}.messages.received", self.prefix)).increment(1);
        counter!(format!(
            "{}.messages.received.{}",
            self.prefix, message_type
        ))
        .increment(1);
    }

    /// Record the outcome of one broadcast
    pub fn broadcast_completed(&self, targets: usize, delivered: usize) {
        counter!(format!("{}.broadcasts", self.prefix)).increment(1);
        counter!(format!("{}.messages.sent", self.prefix)).increment(delivered as u64);
        counter!(format!("{}.messages.skipped", self.prefix))
            .increment(targets.saturating_sub(delivered) as u64);
        histogram!(format!("{}.broadcast.fanout", self.prefix)).record(delivered as f64);
        if targets == 0 {
            counter!(format!("{}.broadcasts.lost", self.prefix)).increment(1);
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
