//! Simulated delivery tracking.
//!
//! A placed order walks `confirmed → preparing → delivery → delivered`, one
//! step per interval. The walk runs as a spawned task owned by a
//! [`TrackingSession`]; dropping or cancelling the session stops it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use savor_store::TrackingSettings;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::models::{OrderStatus, StepState};

/// What the tracking page renders
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrackingSnapshot {
    pub status: OrderStatus,
    pub progress: u8,
}

impl From<OrderStatus> for TrackingSnapshot {
    fn from(status: OrderStatus) -> Self {
        Self {
            status,
            progress: status.progress(),
        }
    }
}

impl TrackingSnapshot {
    /// Stepper entries in display order
    pub fn steps(&self) -> Vec<(OrderStatus, StepState)> {
        OrderStatus::SEQUENCE
            .iter()
            .map(|step| (*step, self.status.step_state(*step)))
            .collect()
    }
}

/// Starts tracking sessions with a fixed transition interval
#[derive(Debug, Clone)]
pub struct OrderTracker {
    interval: Duration,
}

impl OrderTracker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Begin tracking at `confirmed`. Must be called inside a tokio runtime.
    pub fn start(&self, order_id: impl Into<String>) -> TrackingSession {
        let order_id = order_id.into();
        let (tx, rx) = watch::channel(TrackingSnapshot::from(OrderStatus::Confirmed));
        let cancelled = Arc::new(Mutex::new(false));

        info!(order_id = %order_id, interval = ?self.interval, "order tracking started");

        let handle = tokio::spawn(run_sequence(
            order_id.clone(),
            self.interval,
            Arc::clone(&cancelled),
            tx,
        ));

        TrackingSession {
            order_id,
            cancelled,
            updates: rx,
            handle: Some(handle),
        }
    }
}

impl From<&TrackingSettings> for OrderTracker {
    fn from(settings: &TrackingSettings) -> Self {
        Self::new(settings.status_interval())
    }
}

impl Default for OrderTracker {
    fn default() -> Self {
        Self::from(&TrackingSettings::default())
    }
}

/// A running (or finished) status walk for one order.
///
/// Observers either poll [`status`](Self::status) or watch the channel from
/// [`subscribe`](Self::subscribe), which closes once the walk ends.
#[derive(Debug)]
pub struct TrackingSession {
    order_id: String,
    cancelled: Arc<Mutex<bool>>,
    updates: watch::Receiver<TrackingSnapshot>,
    handle: Option<JoinHandle<()>>,
}

impl TrackingSession {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn snapshot(&self) -> TrackingSnapshot {
        *self.updates.borrow()
    }

    pub fn status(&self) -> OrderStatus {
        self.snapshot().status
    }

    pub fn progress(&self) -> u8 {
        self.snapshot().progress
    }

    pub fn subscribe(&self) -> watch::Receiver<TrackingSnapshot> {
        self.updates.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        *lock(&self.cancelled)
    }

    /// Stop the pending transition. Once this returns no further status is
    /// published. Safe to call any number of times.
    pub fn cancel(&mut self) {
        {
            let mut cancelled = lock(&self.cancelled);
            if *cancelled {
                return;
            }
            *cancelled = true;
        }

        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        debug!(order_id = %self.order_id, status = ?self.status(), "order tracking cancelled");
    }
}

impl Drop for TrackingSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_sequence(
    order_id: String,
    interval: Duration,
    cancelled: Arc<Mutex<bool>>,
    tx: watch::Sender<TrackingSnapshot>,
) {
    let mut status = OrderStatus::Confirmed;

    while let Some(next) = status.next() {
        tokio::time::sleep(interval).await;

        if !publish(&cancelled, &tx, next) {
            return;
        }
        status = next;
        info!(order_id = %order_id, status = ?status, progress = status.progress(), "order status advanced");
    }

    debug!(order_id = %order_id, "order tracking finished");
}

/// Publish under the cancellation lock so a transition either lands before
/// `cancel` returns or not at all.
fn publish(cancelled: &Mutex<bool>, tx: &watch::Sender<TrackingSnapshot>, status: OrderStatus) -> bool {
    let cancelled = lock(cancelled);
    if *cancelled {
        return false;
    }
    tx.send_replace(TrackingSnapshot::from(status));
    true
}

fn lock(flag: &Mutex<bool>) -> MutexGuard<'_, bool> {
    flag.lock().unwrap_or_else(PoisonError::into_inner)
}
