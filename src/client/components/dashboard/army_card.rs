use dioxus::prelude::*;
use painttracker::{model::dashboard::ArmyNode, tracker::progress::ProgressSummary};

use crate::client::{
    components::dashboard::{use_modal, Modal, SquadCard},
    util::{api::RecordKind, format::format_summary},
};

#[component]
pub fn ArmyCard(army: ArmyNode) -> Element {
    let mut modal = use_modal();
    let summary = ProgressSummary::of_army(&army);

    let id = army.id;
    let name = army.name.clone();
    let edit_name = army.name.clone();
    let delete_name = army.name.clone();

    rsx! {
        div { class: "card bg-base-200 shadow-md",
            div { class: "card-body gap-4",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    div {
                        h2 { class: "card-title", "{name}" }
                        p { class: "text-sm opacity-80", "{format_summary(&summary)}" }
                    }
                    div { class: "flex gap-2",
                        button {
                            class: "btn btn-sm btn-primary",
                            onclick: move |_| modal.set(Some(Modal::Squad {
                                id: None,
                                name: String::new(),
                                army_id: id,
                            })),
                            "Add Squad"
                        }
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| modal.set(Some(Modal::Army {
                                id: Some(id),
                                name: edit_name.clone(),
                            })),
                            "Edit"
                        }
                        button {
                            class: "btn btn-sm btn-ghost text-error",
                            onclick: move |_| modal.set(Some(Modal::Delete {
                                kind: RecordKind::Army,
                                id,
                                name: delete_name.clone(),
                            })),
                            "Delete"
                        }
                    }
                }
                if army.squads.is_empty() {
                    p { class: "opacity-60", "No squads in this army." }
                }
                for squad in army.squads.iter().cloned() {
                    SquadCard { key: "{squad.id}", squad }
                }
            }
        }
    }
}
