// Refresh scheduler - Owns the periodic/manual aggregation lifecycle
use crate::application::fleet_service::FleetService;
use crate::domain::snapshot::FleetSnapshot;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;

/// Read-only view of the published snapshot. `None` until the first cycle
/// settles; consumers treat that as a loading state, not an error.
pub type SnapshotView = watch::Receiver<Option<Arc<FleetSnapshot>>>;

/// Idle/Fetching state machine around the fleet service. The scheduler is
/// the single writer of the snapshot cell; everyone else holds a
/// [`SnapshotView`]. Each settled cycle replaces the published snapshot
/// wholesale, so readers never observe a mix of two cycles.
pub struct RefreshScheduler {
    fleet: FleetService,
    publisher: watch::Sender<Option<Arc<FleetSnapshot>>>,
    fetching: AtomicBool,
    torn_down: AtomicBool,
    teardown: Notify,
}

impl RefreshScheduler {
    pub fn new(fleet: FleetService) -> (Arc<Self>, SnapshotView) {
        let (publisher, view) = watch::channel(None);
        let scheduler = Arc::new(Self {
            fleet,
            publisher,
            fetching: AtomicBool::new(false),
            torn_down: AtomicBool::new(false),
            teardown: Notify::new(),
        });
        (scheduler, view)
    }

    /// Starts one aggregation cycle. A no-op while a cycle is already in
    /// flight: the in-flight cycle runs to completion and the duplicate
    /// trigger is dropped, so two cycles can never race to publish.
    pub fn trigger(self: &Arc<Self>) {
        if self.torn_down.load(Ordering::SeqCst) {
            return;
        }
        if self.fetching.swap(true, Ordering::SeqCst) {
            tracing::debug!("refresh already in flight, ignoring trigger");
            return;
        }

        let scheduler = Arc::clone(self);
        tokio::spawn(async move {
            let snapshot = scheduler.fleet.aggregate().await;
            if scheduler.torn_down.load(Ordering::SeqCst) {
                tracing::debug!("torn down mid-cycle, discarding snapshot");
            } else {
                scheduler.publisher.send_replace(Some(Arc::new(snapshot)));
            }
            scheduler.fetching.store(false, Ordering::SeqCst);
        });
    }

    /// Spawns the periodic refresh loop: one cycle immediately, then one per
    /// `period`, until [`RefreshScheduler::shutdown`] is called.
    pub fn run(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if self.torn_down.load(Ordering::SeqCst) {
                            break;
                        }
                        self.trigger();
                    }
                    _ = self.teardown.notified() => break,
                }
            }
            tracing::info!("refresh loop stopped");
        })
    }

    /// Tears the scheduler down. The timer loop exits; an in-flight cycle is
    /// left to finish but its snapshot is discarded, never published.
    pub fn shutdown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
        self.teardown.notify_waiters();
    }
}
