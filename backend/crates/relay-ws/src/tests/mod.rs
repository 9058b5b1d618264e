
use axum::extract::ws::Message;
use tokio::sync::mpsc;

/// Sender/receiver pair standing in for a connection's outgoing buffer
pub(crate) fn outgoing_channel(capacity: usize) -> (mpsc::Sender<Message>, mpsc::Receiver<Message>) {
    mpsc::channel(capacity)
}
