use dioxus::prelude::*;
use dioxus_logger::tracing;
use uuid::Uuid;

use crate::client::{
    components::dashboard::use_modal,
    store::tracker::use_tracker,
    util::api::{self, RecordKind},
};

#[component]
pub fn DeleteDialog(kind: RecordKind, id: Uuid, name: String) -> Element {
    let store = use_tracker();
    let mut modal = use_modal();
    let mut deleting = use_signal(|| false);

    let confirm = move |_| {
        deleting.set(true);

        spawn(async move {
            match api::delete(kind, id).await {
                Ok(_) => store.refresh().await,
                Err(e) => {
                    tracing::error!("Failed to delete {} {}: {}", kind.label(), id, e);
                    store.set_error(e.message);
                }
            }

            modal.set(None);
        });
    };

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "font-bold text-lg", "Confirm Delete" }
                p { class: "py-4",
                    "Delete {kind.label()} {name}? This cannot be undone."
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        disabled: deleting(),
                        onclick: move |_| modal.set(None),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        disabled: deleting(),
                        onclick: confirm,
                        "Delete"
                    }
                }
            }
        }
    }
}
