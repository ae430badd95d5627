//! Dashboard components: summary header, army and squad cards, mini rows with stage toggles,
//! and the modal forms editing the collection.

pub mod army_card;
pub mod delete_dialog;
pub mod empty_state;
pub mod error_banner;
pub mod forms;
pub mod header;
pub mod mini_row;
pub mod squad_card;

use dioxus::prelude::*;
use uuid::Uuid;

use crate::client::util::api::RecordKind;

pub use army_card::ArmyCard;
pub use delete_dialog::DeleteDialog;
pub use empty_state::EmptyState;
pub use error_banner::ErrorBanner;
pub use forms::{ArmyForm, MiniForm, SquadForm};
pub use header::DashboardHeader;
pub use mini_row::MiniRow;
pub use squad_card::SquadCard;

/// The modal currently open on the dashboard, `id: None` means creating a new record
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Army {
        id: Option<Uuid>,
        name: String,
    },
    Squad {
        id: Option<Uuid>,
        name: String,
        army_id: Uuid,
    },
    Mini {
        id: Option<Uuid>,
        name: String,
        squad_id: Uuid,
        description: String,
        tags_text: String,
    },
    Delete {
        kind: RecordKind,
        id: Uuid,
        name: String,
    },
}

impl Modal {
    pub fn new_army() -> Self {
        Modal::Army {
            id: None,
            name: String::new(),
        }
    }
}

pub fn use_modal() -> Signal<Option<Modal>> {
    use_context::<Signal<Option<Modal>>>()
}

/// Renders whichever modal is open
#[component]
pub fn ModalHost() -> Element {
    let modal = use_modal();

    match modal() {
        Some(Modal::Army { id, name }) => rsx! { ArmyForm { id, name } },
        Some(Modal::Squad { id, name, army_id }) => rsx! { SquadForm { id, name, army_id } },
        Some(Modal::Mini {
            id,
            name,
            squad_id,
            description,
            tags_text,
        }) => rsx! { MiniForm { id, name, squad_id, description, tags_text } },
        Some(Modal::Delete { kind, id, name }) => rsx! { DeleteDialog { kind, id, name } },
        None => rsx! {},
    }
}
