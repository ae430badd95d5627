use dioxus::prelude::*;

use crate::client::store::tracker::use_tracker;

#[component]
pub fn ErrorBanner() -> Element {
    let store = use_tracker();
    let error = store.state.read().error().map(str::to_string);

    rsx! {
        if let Some(error) = error {
            div { role: "alert", class: "alert alert-error flex justify-between",
                span { "{error}" }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| store.clear_error(),
                    "Dismiss"
                }
            }
        }
    }
}
