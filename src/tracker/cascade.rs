//! Stage cascade rules.
//!
//! Completing a stage completes every earlier stage, since a mini cannot be painted without
//! having been assembled and primed. Undoing a stage undoes every later stage. All stages in
//! the affected range are driven to the requested value.

use chrono::{DateTime, Utc};

use crate::model::{mini::MiniDto, stage::Stage};

/// Stages affected by setting `stage` to `value`, in progression order.
///
/// - `value == true`: `[Assembled ..= stage]`
/// - `value == false`: `[stage ..= Photographed]`
pub fn affected_stages(stage: Stage, value: bool) -> &'static [Stage] {
    let all: &'static [Stage] = &Stage::ALL;
    let index = stage.index();

    if value {
        &all[..=index]
    } else {
        &all[index..]
    }
}

/// Sets a single stage, keeping the completion timestamp of an already complete stage.
///
/// `now` is only used when the stage transitions from incomplete to complete.
pub fn apply_stage(mini: &mut MiniDto, stage: Stage, value: bool, now: DateTime<Utc>) {
    if value {
        if !mini.stage(stage) {
            mini.set_stage(stage, Some(now));
        }
    } else {
        mini.set_stage(stage, None);
    }
}

/// Applies the cascade for setting `stage` to `value` and returns the affected stages.
///
/// Every stage newly completed by this call shares the same `now` timestamp.
pub fn apply_cascade(
    mini: &mut MiniDto,
    stage: Stage,
    value: bool,
    now: DateTime<Utc>,
) -> &'static [Stage] {
    let affected = affected_stages(stage, value);

    for stage in affected {
        apply_stage(mini, *stage, value, now);
    }

    affected
}
