use dioxus::prelude::*;

use crate::client::components::dashboard::{use_modal, Modal};

#[component]
pub fn EmptyState() -> Element {
    let mut modal = use_modal();

    rsx! {
        div { class: "flex flex-col items-center gap-4 py-16",
            p { class: "text-lg opacity-80", "No armies yet." }
            button {
                class: "btn btn-primary",
                onclick: move |_| modal.set(Some(Modal::new_army())),
                "Create your first army"
            }
        }
    }
}
