use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFileCsv, FaFileCode, FaPlus};
use dioxus_free_icons::Icon;
use painttracker::tracker::progress::ProgressSummary;

use crate::client::{
    components::dashboard::{use_modal, Modal},
    store::tracker::use_tracker,
    util::format::format_percent,
};

/// Overall progress and collection wide actions
#[component]
pub fn DashboardHeader() -> Element {
    let store = use_tracker();
    let mut modal = use_modal();
    let summary = ProgressSummary::of_tree(store.state.read().tree());

    rsx! {
        div { class: "flex flex-wrap items-center justify-between gap-4 sticky top-[64px] bg-base-100 py-4 z-[5]",
            div {
                h1 { class: "text-2xl font-bold", "PaintTracker" }
                p { class: "text-sm opacity-80",
                    "{summary.done}/{summary.total} minis fully done • {format_percent(summary.progress)} overall"
                }
                progress {
                    class: "progress progress-primary w-64",
                    value: "{summary.percent()}",
                    max: "100",
                }
            }
            div { class: "flex flex-wrap gap-2",
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| modal.set(Some(Modal::new_army())),
                    Icon { width: 16, height: 16, icon: FaPlus }
                    "Add Army"
                }
                a { class: "btn btn-outline flex gap-2", href: "/api/export?format=json",
                    Icon { width: 16, height: 16, icon: FaFileCode }
                    "Export JSON"
                }
                a { class: "btn btn-outline flex gap-2", href: "/api/export?format=csv",
                    Icon { width: 16, height: 16, icon: FaFileCsv }
                    "Export CSV"
                }
            }
        }
    }
}
