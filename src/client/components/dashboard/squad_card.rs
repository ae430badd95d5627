use dioxus::prelude::*;
use painttracker::{model::dashboard::SquadNode, tracker::progress::ProgressSummary};

use crate::client::{
    components::dashboard::{use_modal, MiniRow, Modal},
    util::{api::RecordKind, format::format_summary},
};

#[component]
pub fn SquadCard(squad: SquadNode) -> Element {
    let mut modal = use_modal();
    let summary = ProgressSummary::of_squad(&squad);

    let id = squad.id;
    let army_id = squad.army_id;
    let edit_name = squad.name.clone();
    let delete_name = squad.name.clone();

    rsx! {
        div { class: "rounded-box border border-base-300 bg-base-100 p-4",
            div { class: "flex flex-wrap items-center justify-between gap-2 mb-2",
                div {
                    h3 { class: "font-semibold", "{squad.name}" }
                    p { class: "text-sm opacity-80", "{format_summary(&summary)}" }
                }
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-xs btn-primary",
                        onclick: move |_| modal.set(Some(Modal::Mini {
                            id: None,
                            name: String::new(),
                            squad_id: id,
                            description: String::new(),
                            tags_text: String::new(),
                        })),
                        "Add Mini"
                    }
                    button {
                        class: "btn btn-xs btn-ghost",
                        onclick: move |_| modal.set(Some(Modal::Squad {
                            id: Some(id),
                            name: edit_name.clone(),
                            army_id,
                        })),
                        "Edit"
                    }
                    button {
                        class: "btn btn-xs btn-ghost text-error",
                        onclick: move |_| modal.set(Some(Modal::Delete {
                            kind: RecordKind::Squad,
                            id,
                            name: delete_name.clone(),
                        })),
                        "Delete"
                    }
                }
            }
            if squad.minis.is_empty() {
                p { class: "opacity-60 text-sm", "No minis in this squad." }
            } else {
                div { class: "flex flex-col divide-y divide-base-300",
                    for mini in squad.minis.iter().cloned() {
                        MiniRow { key: "{mini.id}", mini }
                    }
                }
            }
        }
    }
}
