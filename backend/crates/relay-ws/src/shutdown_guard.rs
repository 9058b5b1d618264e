use tokio::sync::watch;

/// Per-task view of the shutdown flag
pub struct ShutdownGuard {
    stopping: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub(crate) fn new(stopping: watch::Receiver<bool>) -> Self {
        Self { stopping }
    }

    /// Resolves once shutdown is requested or the coordinator is dropped
    pub async fn wait(&mut self) {
        let _ = self.stopping.wait_for(|stopping| *stopping).await;
    }
}
