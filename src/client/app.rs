use dioxus::prelude::*;

use crate::client::{
    router::Route,
    store::user::{fetch_user, UserState},
};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Resolve the signed in user once per page load
    use_future(move || async move {
        let user = fetch_user().await;
        user_state.set(UserState {
            user,
            fetched: true,
        });
    });

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        Router::<Route> {}
    }
}
