use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        document::Title { "Not found | PaintTracker" }
        Page {
            class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-2xl font-bold", "404 Not Found" }
            p { class: "opacity-70", "/{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
        }
    }
}
