use dioxus::prelude::*;

use crate::client::{
    components::{
        dashboard::{ArmyCard, DashboardHeader, EmptyState, ErrorBanner, Modal, ModalHost},
        Page,
    },
    store::{tracker::use_tracker_provider, user::UserState},
};

#[component]
pub fn Dashboard() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx! {
        document::Title { "Dashboard | PaintTracker" }
        Page {
            if state.user.is_some() {
                TrackerDashboard {}
            } else if state.fetched {
                div { class: "flex flex-col items-center gap-4 py-16",
                    p { "Sign in to track your collection." }
                    a { href: "/api/auth/login", class: "btn btn-primary", "Sign in" }
                }
            } else {
                Loading {}
            }
        }
    }
}

#[component]
fn TrackerDashboard() -> Element {
    let store = use_tracker_provider();
    use_context_provider(|| Signal::new(None::<Modal>));

    let armies = store.state.read().tree().armies.clone();

    rsx! {
        div { class: "flex flex-col gap-4 max-w-5xl mx-auto",
            DashboardHeader {}
            ErrorBanner {}
            if !(store.loaded)() {
                Loading {}
            } else if armies.is_empty() {
                EmptyState {}
            } else {
                for army in armies {
                    ArmyCard { key: "{army.id}", army }
                }
            }
        }
        ModalHost {}
    }
}

#[component]
fn Loading() -> Element {
    rsx! {
        div { class: "flex justify-center py-16",
            span { class: "loading loading-spinner loading-lg" }
        }
    }
}
