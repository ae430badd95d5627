use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{components::PaintTrackerTitle, router::Route, store::user::UserState};

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                PaintTrackerTitle {}
            }
            div {
                class: "navbar-end flex gap-2",
                if state.user.is_some() {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-ghost",
                        "Dashboard"
                    }
                    a { href: "/api/auth/logout",
                        button {
                            class: "btn btn-outline flex gap-2",
                            Icon { width: 16, height: 16, icon: FaRightFromBracket }
                            "Sign out"
                        }
                    }
                } else if state.fetched {
                    a { href: "/api/auth/login",
                        button {
                            class: "btn btn-primary flex gap-2",
                            Icon { width: 16, height: 16, icon: FaGoogle }
                            "Sign in"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
