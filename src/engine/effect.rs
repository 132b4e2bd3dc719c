//! Click effect handler
//!
//! Turns each click into one short-lived marker on a [`MarkerSurface`]:
//! 1. Build the marker centered on the click, tagged `circle`
//! 2. Give it a random color and greeting, then tag it `flex`
//! 3. Append it to the surface
//! 4. Schedule its removal after [`MARKER_LIFETIME_MS`]
//!
//! Each removal is a [`ScheduledRemoval`] kept in a registry keyed by marker id,
//! so [`ClickEffectHandler::clear_all`] can cancel every pending timer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use uuid::Uuid;

use super::error::EffectError;
use super::lifecycle::ScheduledRemoval;
use super::palette::{random_color, random_label};
use super::surface::MarkerSurface;
use crate::constants::MARKER_LIFETIME_MS;
use crate::state::{ClickPoint, Marker, STYLE_CIRCLE, STYLE_FLEX};

type PendingRemovals = Arc<Mutex<HashMap<Uuid, ScheduledRemoval>>>;

fn lock_pending(pending: &Mutex<HashMap<Uuid, ScheduledRemoval>>) -> MutexGuard<'_, HashMap<Uuid, ScheduledRemoval>> {
    pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct ClickEffectHandler<S: MarkerSurface> {
    surface: Arc<S>,
    rng: Mutex<Box<dyn RngCore + Send>>,
    lifetime: Duration,
    pending: PendingRemovals,
}

impl<S: MarkerSurface> ClickEffectHandler<S> {
    /// Handler over `surface` with an OS-seeded generator.
    pub fn new(surface: Arc<S>) -> Self {
        Self::with_rng(surface, StdRng::from_os_rng())
    }

    pub fn with_rng<R>(surface: Arc<S>, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            surface,
            rng: Mutex::new(Box::new(rng)),
            lifetime: Duration::from_millis(MARKER_LIFETIME_MS),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Spawn one marker for a click and schedule its removal.
    ///
    /// Must run inside a tokio runtime. Returns the new marker's id.
    pub fn on_click(&self, point: ClickPoint) -> Result<Uuid, EffectError> {
        if !point.is_finite() {
            return Err(EffectError::InvalidClick {
                x: point.client_x,
                y: point.client_y,
            });
        }

        let mut marker = Marker::new(point);
        marker.add_class(STYLE_CIRCLE);
        {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            marker.color = random_color(&mut **rng);
            marker.label = random_label(&mut **rng).to_string();
        }
        marker.add_class(STYLE_FLEX);

        let marker_id = marker.id;
        tracing::debug!(
            %marker_id,
            left = marker.position.left,
            top = marker.position.top,
            color = %marker.color,
            label = %marker.label,
            "spawning click marker"
        );
        self.surface.append(marker)?;

        let surface = Arc::clone(&self.surface);
        let pending = Arc::clone(&self.pending);
        // Registry stays locked until the entry is in; the timer removes it on expiry.
        let mut registry = lock_pending(&self.pending);
        let removal = ScheduledRemoval::spawn(marker_id, self.lifetime, move || {
            lock_pending(&pending).remove(&marker_id);
            if surface.remove(marker_id).is_some() {
                tracing::debug!(%marker_id, "click marker expired");
            }
        });
        registry.insert(marker_id, removal);

        Ok(marker_id)
    }

    /// Cancel every pending removal and detach the markers they owned.
    ///
    /// Returns how many markers were detached.
    pub fn clear_all(&self) -> usize {
        let drained: Vec<ScheduledRemoval> = lock_pending(&self.pending)
            .drain()
            .map(|(_, removal)| removal)
            .collect();

        let mut cleared = Vec::with_capacity(drained.len());
        for removal in drained {
            removal.cancel();
            if let Some(marker) = self.surface.remove(removal.marker_id()) {
                cleared.push(marker);
            }
        }

        match serde_json::to_string(&cleared) {
            Ok(dump) => tracing::debug!(markers = %dump, "cleared marker dump"),
            Err(err) => tracing::warn!(%err, "failed to serialize cleared markers"),
        }
        tracing::info!(cleared = cleared.len(), "cleared click markers");
        cleared.len()
    }

    /// Markers whose removal has not fired yet.
    pub fn pending_removals(&self) -> usize {
        lock_pending(&self.pending)
            .values()
            .filter(|removal| !removal.is_finished())
            .count()
    }
}
