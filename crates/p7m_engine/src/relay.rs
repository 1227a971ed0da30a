use std::sync::mpsc;

use crate::EngineEvent;

/// Destination for events produced by background work.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);

    fn post_status(&self, text: &str) {
        self.emit(EngineEvent::Status(text.to_string()));
    }
}

/// Producer half of the relay. Unbounded; sends never block.
#[derive(Debug, Clone)]
pub struct StatusRelay {
    tx: mpsc::Sender<EngineEvent>,
}

impl ProgressSink for StatusRelay {
    fn emit(&self, event: EngineEvent) {
        // The receiver only goes away when the UI is shutting down.
        let _ = self.tx.send(event);
    }
}

/// Consumer half of the relay, owned by the UI thread.
#[derive(Debug)]
pub struct RelayReceiver {
    rx: mpsc::Receiver<EngineEvent>,
}

impl RelayReceiver {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.rx.try_recv().ok()
    }

    /// Everything queued right now, oldest first. Never waits.
    pub fn drain(&self) -> Vec<EngineEvent> {
        self.rx.try_iter().collect()
    }
}

pub fn channel() -> (StatusRelay, RelayReceiver) {
    let (tx, rx) = mpsc::channel();
    (StatusRelay { tx }, RelayReceiver { rx })
}
