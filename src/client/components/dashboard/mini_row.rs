use dioxus::prelude::*;
use dioxus_logger::tracing;
use painttracker::{
    model::{mini::MiniDto, stage::Stage},
    tracker::{progress::mini_progress, toggle::ToggleOutcome},
};

use crate::client::{
    components::dashboard::{use_modal, Modal},
    store::tracker::use_tracker,
    util::{api::RecordKind, format::format_percent, tags::tags_to_text},
};

/// A mini with one checkbox per stage, disabled while a toggle of that stage is in flight
#[component]
pub fn MiniRow(mini: MiniDto) -> Element {
    let store = use_tracker();
    let mut modal = use_modal();

    let id = mini.id;
    let percent = format_percent(mini_progress(&mini));
    let tags = mini.tags.clone().unwrap_or_default();
    let edit = Modal::Mini {
        id: Some(id),
        name: mini.name.clone(),
        squad_id: mini.squad_id,
        description: mini.description.clone().unwrap_or_default(),
        tags_text: tags_to_text(mini.tags.as_deref()),
    };
    let delete = Modal::Delete {
        kind: RecordKind::Mini,
        id,
        name: mini.name.clone(),
    };

    rsx! {
        div { class: "flex flex-wrap items-center justify-between gap-2 py-2",
            div { class: "min-w-48",
                p { class: "font-medium", "{mini.name}" }
                if let Some(description) = &mini.description {
                    p { class: "text-xs opacity-70", "{description}" }
                }
                if !tags.is_empty() {
                    div { class: "flex flex-wrap gap-1 mt-1",
                        for tag in tags {
                            span { class: "badge badge-outline badge-sm", "{tag}" }
                        }
                    }
                }
            }
            div { class: "flex flex-wrap items-center gap-3",
                for stage in Stage::ALL {
                    StageCheckbox {
                        key: "{stage}",
                        mini_id: id,
                        stage,
                        checked: mini.stage(stage),
                        pending: store.state.read().is_pending(id, stage),
                    }
                }
                span { class: "badge badge-neutral w-14", "{percent}" }
                button {
                    class: "btn btn-xs btn-ghost",
                    onclick: move |_| modal.set(Some(edit.clone())),
                    "Edit"
                }
                button {
                    class: "btn btn-xs btn-ghost text-error",
                    onclick: move |_| modal.set(Some(delete.clone())),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn StageCheckbox(mini_id: uuid::Uuid, stage: Stage, checked: bool, pending: bool) -> Element {
    let store = use_tracker();

    rsx! {
        label { class: "label cursor-pointer gap-1 text-xs",
            input {
                r#type: "checkbox",
                class: "checkbox checkbox-sm checkbox-primary",
                checked,
                disabled: pending,
                onchange: move |_| {
                    spawn(async move {
                        let outcome = store.toggle(mini_id, stage, !checked).await;
                        if let ToggleOutcome::RolledBack { failed_stage } = outcome {
                            tracing::error!("Failed to update {} of mini {}", failed_stage, mini_id);
                        }
                    });
                },
            }
            "{stage.label()}"
        }
    }
}
