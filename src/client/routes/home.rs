use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route, store::user::UserState};

#[component]
pub fn Home() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx! {
        document::Title { "PaintTracker" }
        document::Meta {
            name: "description",
            content: "Track assembly, priming, painting, basing and photography of your miniature armies."
        }
        Page {
            class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 text-center max-w-xl",
                h1 { class: "text-4xl font-bold", "PaintTracker" }
                p { class: "opacity-80",
                    "Organize your miniatures into armies and squads and tick off every stage from assembly to the final photo."
                }
                if state.user.is_some() {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary",
                        "Go to dashboard"
                    }
                } else if state.fetched {
                    a { href: "/api/auth/login",
                        button {
                            class: "btn btn-primary flex gap-2",
                            Icon { width: 16, height: 16, icon: FaGoogle }
                            "Sign in with Google"
                        }
                    }
                }
            }
        }
    }
}
