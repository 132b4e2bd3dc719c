use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

/// The pending removal of one marker.
///
/// Dropping this does not cancel the timer; call [`ScheduledRemoval::cancel`].
#[derive(Debug)]
pub struct ScheduledRemoval {
    marker_id: Uuid,
    handle: JoinHandle<()>,
}

impl ScheduledRemoval {
    /// Run `on_expire` once `delay` has elapsed. Must be called inside a tokio runtime.
    pub fn spawn<F>(marker_id: Uuid, delay: Duration, on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_expire();
        });
        Self {
            marker_id,
            handle,
        }
    }

    pub fn marker_id(&self) -> Uuid {
        self.marker_id
    }

    /// Abort the timer. A removal that already fired is unaffected.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
