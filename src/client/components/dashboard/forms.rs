//! Create and edit forms for armies, squads and minis.
//!
//! Each form saves through the API, refreshes the dashboard tree and closes. A failed save keeps
//! the form open with the server's message.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use painttracker::model::{
    army::{CreateArmyDto, UpdateArmyDto},
    mini::{CreateMiniDto, UpdateMiniDto},
    squad::{CreateSquadDto, UpdateSquadDto},
};
use uuid::Uuid;

use crate::client::{
    components::dashboard::use_modal,
    store::tracker::{use_tracker, TrackerStore},
    util::{
        api::{self, ApiError},
        tags::parse_tags,
    },
};

/// Shared save handling: refresh and close on success, show the error otherwise
async fn finish_save<T>(
    result: Result<T, ApiError>,
    store: TrackerStore,
    mut modal: Signal<Option<super::Modal>>,
    mut error: Signal<Option<String>>,
    mut saving: Signal<bool>,
) {
    match result {
        Ok(_) => {
            store.refresh().await;
            modal.set(None);
        }
        Err(e) => {
            tracing::error!("Failed to save: {}", e);
            error.set(Some(e.message));
            saving.set(false);
        }
    }
}

fn optional_text(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[component]
fn FormModal(title: String, #[props(!optional)] error: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "font-bold text-lg mb-4", "{title}" }
                if let Some(error) = error {
                    div { role: "alert", class: "alert alert-error mb-4", "{error}" }
                }
                {children}
            }
        }
    }
}

#[component]
fn FormActions(saving: bool) -> Element {
    let mut modal = use_modal();

    rsx! {
        div { class: "modal-action",
            button {
                r#type: "button",
                class: "btn",
                disabled: saving,
                onclick: move |_| modal.set(None),
                "Cancel"
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: saving,
                if saving { "Saving..." } else { "Save" }
            }
        }
    }
}

#[component]
pub fn ArmyForm(#[props(!optional)] id: Option<Uuid>, name: String) -> Element {
    let store = use_tracker();
    let modal = use_modal();
    let mut name = use_signal(|| name);
    let error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let title = if id.is_some() { "Edit Army" } else { "New Army" }.to_string();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        saving.set(true);

        spawn(async move {
            let name = name();
            let result = match id {
                Some(id) => api::update_army(id, &UpdateArmyDto { name }).await,
                None => api::create_army(&CreateArmyDto { name }).await,
            };

            finish_save(result, store, modal, error, saving).await;
        });
    };

    rsx! {
        FormModal { title, error: error(),
            form { class: "flex flex-col gap-2", onsubmit: submit,
                label { class: "label", "Name" }
                input {
                    class: "input w-full",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                FormActions { saving: saving() }
            }
        }
    }
}

#[component]
pub fn SquadForm(#[props(!optional)] id: Option<Uuid>, name: String, army_id: Uuid) -> Element {
    let store = use_tracker();
    let modal = use_modal();
    let mut name = use_signal(|| name);
    let mut army_id = use_signal(|| army_id);
    let error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let armies: Vec<(Uuid, String)> = store
        .state
        .read()
        .tree()
        .armies
        .iter()
        .map(|army| (army.id, army.name.clone()))
        .collect();

    let title = if id.is_some() { "Edit Squad" } else { "New Squad" }.to_string();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        saving.set(true);

        spawn(async move {
            let name = name();
            let army_id = army_id().to_string();
            let result = match id {
                Some(id) => {
                    let body = UpdateSquadDto {
                        name,
                        army_id: Some(army_id),
                    };
                    api::update_squad(id, &body).await
                }
                None => api::create_squad(&CreateSquadDto { name, army_id }).await,
            };

            finish_save(result, store, modal, error, saving).await;
        });
    };

    rsx! {
        FormModal { title, error: error(),
            form { class: "flex flex-col gap-2", onsubmit: submit,
                label { class: "label", "Name" }
                input {
                    class: "input w-full",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                label { class: "label", "Army" }
                select {
                    class: "select w-full",
                    onchange: move |e| {
                        if let Ok(id) = e.value().parse() {
                            army_id.set(id);
                        }
                    },
                    for (id, army_name) in armies {
                        option {
                            value: "{id}",
                            selected: id == army_id(),
                            "{army_name}"
                        }
                    }
                }
                FormActions { saving: saving() }
            }
        }
    }
}

#[component]
pub fn MiniForm(
    #[props(!optional)] id: Option<Uuid>,
    name: String,
    squad_id: Uuid,
    description: String,
    tags_text: String,
) -> Element {
    let store = use_tracker();
    let modal = use_modal();
    let mut name = use_signal(|| name);
    let mut squad_id = use_signal(|| squad_id);
    let mut description = use_signal(|| description);
    let mut tags_text = use_signal(|| tags_text);
    let error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let squads: Vec<(Uuid, String)> = store
        .state
        .read()
        .tree()
        .armies
        .iter()
        .flat_map(|army| {
            army.squads
                .iter()
                .map(move |squad| (squad.id, format!("{} / {}", army.name, squad.name)))
        })
        .collect();

    let title = if id.is_some() { "Edit Mini" } else { "New Mini" }.to_string();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        saving.set(true);

        spawn(async move {
            let name = name();
            let squad_id = squad_id().to_string();
            let description = optional_text(&description());
            let tags = parse_tags(&tags_text());
            let result = match id {
                Some(id) => {
                    let body = UpdateMiniDto {
                        name,
                        squad_id: Some(squad_id),
                        description,
                        tags,
                    };
                    api::update_mini(id, &body).await
                }
                None => {
                    let body = CreateMiniDto {
                        name,
                        squad_id,
                        description,
                        tags,
                    };
                    api::create_mini(&body).await
                }
            };

            finish_save(result, store, modal, error, saving).await;
        });
    };

    rsx! {
        FormModal { title, error: error(),
            form { class: "flex flex-col gap-2", onsubmit: submit,
                label { class: "label", "Name" }
                input {
                    class: "input w-full",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                label { class: "label", "Army / Squad" }
                select {
                    class: "select w-full",
                    onchange: move |e| {
                        if let Ok(id) = e.value().parse() {
                            squad_id.set(id);
                        }
                    },
                    for (id, label) in squads {
                        option {
                            value: "{id}",
                            selected: id == squad_id(),
                            "{label}"
                        }
                    }
                }
                label { class: "label", "Description (optional)" }
                textarea {
                    class: "textarea w-full",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
                label { class: "label", "Tags (optional, comma-separated)" }
                input {
                    class: "input w-full",
                    value: "{tags_text}",
                    oninput: move |e| tags_text.set(e.value()),
                }
                FormActions { saving: saving() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::optional_text;

    #[test]
    fn blank_description_is_omitted() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" Big choppa "), Some("Big choppa".to_string()));
    }
}
