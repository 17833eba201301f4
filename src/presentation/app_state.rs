// Application state for HTTP handlers
use crate::application::refresh_scheduler::{RefreshScheduler, SnapshotView};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<RefreshScheduler>,
    pub snapshot: SnapshotView,
}
