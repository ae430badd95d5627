//! Dashboard state and the host running optimistic stage toggles against the API.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use painttracker::{
    model::stage::Stage,
    tracker::toggle::{self, Reconcile, StageGateway, ToggleOutcome, TrackerHost, TrackerState},
};
use uuid::Uuid;

use crate::client::util::api::{self, ApiError};

/// Handle to the dashboard's [`TrackerState`], cheap to copy into event handlers
#[derive(Clone, Copy, PartialEq)]
pub struct TrackerStore {
    pub state: Signal<TrackerState>,
    /// False until the first dashboard fetch finished
    pub loaded: Signal<bool>,
}

impl TrackerStore {
    pub fn new(state: Signal<TrackerState>, loaded: Signal<bool>) -> Self {
        Self { state, loaded }
    }

    /// Re-fetches the dashboard tree, keeping the current tree on failure
    pub async fn refresh(self) {
        let mut state = self.state;
        let mut loaded = self.loaded;

        match api::get_dashboard().await {
            Ok(tree) => state.with_mut(|state| state.replace_tree(tree)),
            Err(e) => {
                tracing::error!("Failed to fetch dashboard: {}", e);
                state.with_mut(|state| state.refresh_failed());
            }
        }

        loaded.set(true);
    }

    /// Runs a toggle to completion
    pub async fn toggle(self, mini_id: Uuid, stage: Stage, value: bool) -> ToggleOutcome {
        toggle::toggle_stage(&self, mini_id, stage, value).await
    }

    pub fn set_error(self, error: impl Into<String>) {
        let mut state = self.state;
        state.with_mut(|state| state.set_error(error));
    }

    pub fn clear_error(self) {
        let mut state = self.state;
        state.with_mut(|state| state.clear_error());
    }
}

impl StageGateway for TrackerStore {
    type Error = ApiError;

    async fn update_stage(&self, mini_id: Uuid, stage: Stage, value: bool) -> Result<(), ApiError> {
        api::toggle_stage(mini_id, stage, value).await.map(|_| ())
    }
}

impl TrackerHost for TrackerStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut TrackerState) -> R) -> R {
        let mut state = self.state;
        state.with_mut(f)
    }

    fn reconcile(&self, command: Reconcile) {
        match command {
            Reconcile::Refetch => {
                let store = *self;
                dioxus::core::spawn_forever(async move { store.refresh().await });
            }
        }
    }
}

/// Provides the tracker store to the dashboard and loads the tree
pub fn use_tracker_provider() -> TrackerStore {
    let state = use_signal(TrackerState::default);
    let loaded = use_signal(|| false);
    let store = use_context_provider(|| TrackerStore::new(state, loaded));

    use_future(move || async move { store.refresh().await });

    store
}

pub fn use_tracker() -> TrackerStore {
    use_context::<TrackerStore>()
}
