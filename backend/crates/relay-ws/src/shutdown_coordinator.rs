use crate::ShutdownGuard;

use std::sync::Arc;

use tokio::sync::watch;

/// Tells the HTTP server and every connection task to stop.
///
/// The flag is a `watch` value rather than an event, so a guard taken after
/// `shutdown()` (a client mid-upgrade, say) still sees it.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    stopping: Arc<watch::Sender<bool>>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (stopping, _) = watch::channel(false);
        Self {
            stopping: Arc::new(stopping),
        }
    }

    /// Flip the flag; idempotent
    pub fn shutdown(&self) {
        log::info!("Shutdown requested, closing relay connections");
        self.stopping.send_replace(true);
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard::new(self.stopping.subscribe())
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
