//! Mount surface for markers.
//!
//! The handler only sees [`MarkerSurface`]. [`MarkerBoard`] is the shared,
//! observable list the desktop UI renders from.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use uuid::Uuid;

use super::error::EffectError;
use crate::state::Marker;

/// Somewhere markers can be attached and detached by identity.
pub trait MarkerSurface: Send + Sync + 'static {
    /// Insert `marker` as the last child.
    fn append(&self, marker: Marker) -> Result<(), EffectError>;
    /// Detach the marker with `id`, returning it if it was attached.
    fn remove(&self, id: Uuid) -> Option<Marker>;
    fn contains(&self, id: Uuid) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct BoardInner {
    markers: Vec<Marker>,
    detached: bool,
}

/// Ordered, shared marker list. Clones point at the same board.
#[derive(Clone)]
pub struct MarkerBoard {
    inner: Arc<Mutex<BoardInner>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Default for MarkerBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerBoard {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(Mutex::new(BoardInner {
                markers: Vec::new(),
                detached: false,
            })),
            revision: Arc::new(revision),
        }
    }

    // A panic mid-update cannot leave the Vec inconsistent, so poison is ignored.
    fn lock(&self) -> MutexGuard<'_, BoardInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    /// Current markers, oldest first.
    pub fn snapshot(&self) -> Vec<Marker> {
        self.lock().markers.clone()
    }

    /// Receiver whose value advances on every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Tear the board down: drop all markers and refuse new ones.
    pub fn detach(&self) {
        {
            let mut inner = self.lock();
            inner.detached = true;
            inner.markers.clear();
        }
        self.bump();
    }

    #[cfg(test)]
    pub fn is_detached(&self) -> bool {
        self.lock().detached
    }
}

impl MarkerSurface for MarkerBoard {
    fn append(&self, marker: Marker) -> Result<(), EffectError> {
        {
            let mut inner = self.lock();
            if inner.detached {
                return Err(EffectError::SurfaceDetached);
            }
            inner.markers.push(marker);
        }
        self.bump();
        Ok(())
    }

    fn remove(&self, id: Uuid) -> Option<Marker> {
        let removed = {
            let mut inner = self.lock();
            let index = inner.markers.iter().position(|m| m.id == id)?;
            inner.markers.remove(index)
        };
        self.bump();
        Some(removed)
    }

    fn contains(&self, id: Uuid) -> bool {
        self.lock().markers.iter().any(|m| m.id == id)
    }

    fn len(&self) -> usize {
        self.lock().markers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClickPoint;

    fn marker_at(x: f64) -> Marker {
        Marker::new(ClickPoint::new(x, x))
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let board = MarkerBoard::new();
        let first = marker_at(1.0);
        let second = marker_at(2.0);
        board.append(first.clone()).unwrap();
        board.append(second.clone()).unwrap();
        let ids: Vec<Uuid> = board.snapshot().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_remove_is_by_identity() {
        let board = MarkerBoard::new();
        let a = marker_at(1.0);
        let b = marker_at(2.0);
        let c = marker_at(3.0);
        for m in [&a, &b, &c] {
            board.append(m.clone()).unwrap();
        }

        assert_eq!(board.remove(b.id).map(|m| m.id), Some(b.id));
        assert!(board.contains(a.id));
        assert!(!board.contains(b.id));
        assert!(board.contains(c.id));
        assert!(board.remove(b.id).is_none());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let board = MarkerBoard::new();
        let view = board.clone();
        board.append(marker_at(5.0)).unwrap();
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_detached_board_rejects_markers() {
        let board = MarkerBoard::new();
        board.append(marker_at(1.0)).unwrap();
        board.detach();
        assert!(board.is_detached());
        assert!(board.is_empty());
        assert_eq!(board.append(marker_at(2.0)), Err(EffectError::SurfaceDetached));
    }

    #[test]
    fn test_revision_advances_on_mutation() {
        let board = MarkerBoard::new();
        let rx = board.subscribe();
        let m = marker_at(1.0);
        board.append(m.clone()).unwrap();
        assert_eq!(*rx.borrow(), 1);
        board.remove(m.id);
        assert_eq!(*rx.borrow(), 2);
        board.remove(m.id);
        assert_eq!(*rx.borrow(), 2);
    }
}
