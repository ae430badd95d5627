//! Optimistic stage toggling with rollback.
//!
//! A toggle is applied to the local [`TrackerState`] immediately, then one update request per
//! affected stage is sent through a [`StageGateway`] in progression order. The first failing
//! request stops the sequence and the tree is restored from the snapshot taken before the
//! optimistic change. While a toggle is in flight none of its affected `(mini, stage)` pairs can
//! be toggled again.

use std::{collections::HashSet, fmt::Display};

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use uuid::Uuid;

use crate::{
    model::{dashboard::DashboardTree, stage::Stage},
    tracker::cascade::{affected_stages, apply_cascade},
};

/// Message shown to the user when a toggle had to be rolled back.
pub const STAGE_UPDATE_FAILED: &str = "Stage update failed";

/// Message shown to the user when the dashboard could not be fetched.
pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard";

/// A `(mini, stage)` pair touched by a toggle currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingKey {
    pub mini_id: Uuid,
    pub stage: Stage,
}

/// Why a toggle was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRejected {
    /// One of the affected stages of the mini already has a toggle in flight.
    Pending,
    /// No mini with the requested id exists in the tree.
    UnknownMini,
}

/// A toggle that has been optimistically applied but not yet confirmed.
#[derive(Debug, Clone)]
pub struct PendingToggle {
    pub mini_id: Uuid,
    pub stage: Stage,
    pub value: bool,
    /// Stages to send to the server, in progression order.
    pub affected: &'static [Stage],
    snapshot: DashboardTree,
}

impl PendingToggle {
    fn keys(&self) -> impl Iterator<Item = PendingKey> + '_ {
        self.affected.iter().map(|stage| PendingKey {
            mini_id: self.mini_id,
            stage: *stage,
        })
    }
}

/// Follow up requested from the host once a toggle settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Re-fetch the dashboard tree from the server and replace the local copy.
    Refetch,
}

/// Result of [`toggle_stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A toggle touching one of the affected stages was already in flight, nothing happened.
    Blocked,
    /// The mini is not part of the tracked tree, nothing happened.
    UnknownMini,
    /// Every stage update was accepted.
    Confirmed,
    /// An update failed and the tree was restored to its state before the toggle.
    RolledBack { failed_stage: Stage },
}

/// Local dashboard state of the tracker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    tree: DashboardTree,
    pending: HashSet<PendingKey>,
    error: Option<String>,
}

impl TrackerState {
    pub fn new(tree: DashboardTree) -> Self {
        Self {
            tree,
            ..Default::default()
        }
    }

    pub fn tree(&self) -> &DashboardTree {
        &self.tree
    }

    /// Replaces the tree with a freshly fetched one, keeping pending toggles and the error.
    pub fn replace_tree(&mut self, tree: DashboardTree) {
        self.tree = tree;
    }

    pub fn is_pending(&self, mini_id: Uuid, stage: Stage) -> bool {
        self.pending.contains(&PendingKey { mini_id, stage })
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Records a failed dashboard fetch. An error already on display is kept.
    pub fn refresh_failed(&mut self) {
        if self.error.is_none() {
            self.error = Some(DASHBOARD_LOAD_FAILED.to_string());
        }
    }

    /// Starts a toggle: snapshots the tree, marks every affected pair pending and applies the
    /// cascade locally.
    ///
    /// Nothing changes when the toggle is rejected. Any previous error is cleared when the toggle
    /// starts.
    pub fn begin_toggle(
        &mut self,
        mini_id: Uuid,
        stage: Stage,
        value: bool,
        now: DateTime<Utc>,
    ) -> Result<PendingToggle, ToggleRejected> {
        let affected = affected_stages(stage, value);

        if affected
            .iter()
            .any(|stage| self.is_pending(mini_id, *stage))
        {
            return Err(ToggleRejected::Pending);
        }

        if self.tree.find_mini(mini_id).is_none() {
            return Err(ToggleRejected::UnknownMini);
        }

        let snapshot = self.tree.clone();

        if let Some(mini) = self.tree.find_mini_mut(mini_id) {
            apply_cascade(mini, stage, value, now);
        }

        let toggle = PendingToggle {
            mini_id,
            stage,
            value,
            affected,
            snapshot,
        };

        self.pending.extend(toggle.keys());
        self.error = None;

        Ok(toggle)
    }

    /// Settles a toggle whose updates were all accepted.
    pub fn confirm(&mut self, toggle: PendingToggle) -> Reconcile {
        for key in toggle.keys() {
            self.pending.remove(&key);
        }

        Reconcile::Refetch
    }

    /// Settles a failed toggle by restoring the tree snapshot taken when it started.
    pub fn roll_back(&mut self, toggle: PendingToggle, error: impl Into<String>) -> Reconcile {
        for key in toggle.keys() {
            self.pending.remove(&key);
        }

        self.tree = toggle.snapshot;
        self.error = Some(error.into());

        Reconcile::Refetch
    }
}

/// Sends single stage updates to the server.
#[allow(async_fn_in_trait)]
pub trait StageGateway {
    type Error: Display;

    /// Sets exactly one stage of a mini on the server.
    async fn update_stage(&self, mini_id: Uuid, stage: Stage, value: bool)
        -> Result<(), Self::Error>;
}

/// Owner of a [`TrackerState`] able to run toggles against a server.
pub trait TrackerHost: StageGateway {
    /// Runs `f` with exclusive access to the tracker state.
    ///
    /// The borrow must not be held across an await point.
    fn with_state<R>(&self, f: impl FnOnce(&mut TrackerState) -> R) -> R;

    /// Time used for newly completed stages.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Handles the follow up of a settled toggle.
    fn reconcile(&self, command: Reconcile);
}

/// Toggles a stage of a mini optimistically, cascading to related stages.
///
/// Update requests are sent one at a time in progression order. On the first failure the
/// remaining requests are skipped, the tree is restored and [`STAGE_UPDATE_FAILED`] is set as
/// the state error. The host is asked to reconcile once the toggle settles either way.
pub async fn toggle_stage<H: TrackerHost>(
    host: &H,
    mini_id: Uuid,
    stage: Stage,
    value: bool,
) -> ToggleOutcome {
    let now = host.now();

    let toggle = match host.with_state(|state| state.begin_toggle(mini_id, stage, value, now)) {
        Ok(toggle) => toggle,
        Err(ToggleRejected::Pending) => {
            tracing::debug!("Toggle of {stage} on mini {mini_id} already in flight");

            return ToggleOutcome::Blocked;
        }
        Err(ToggleRejected::UnknownMini) => {
            tracing::warn!("Attempted to toggle {stage} on unknown mini {mini_id}");

            return ToggleOutcome::UnknownMini;
        }
    };

    for affected in toggle.affected {
        if let Err(e) = host.update_stage(mini_id, *affected, value).await {
            tracing::error!("Failed to set {affected} to {value} on mini {mini_id}: {e}");

            let command = host.with_state(|state| state.roll_back(toggle, STAGE_UPDATE_FAILED));
            host.reconcile(command);

            return ToggleOutcome::RolledBack {
                failed_stage: *affected,
            };
        }
    }

    let command = host.with_state(|state| state.confirm(toggle));
    host.reconcile(command);

    ToggleOutcome::Confirmed
}
