use dioxus_logger::tracing;
use painttracker::model::user::UserDto;

use crate::client::util::api;

/// The signed in user, `fetched` is false until the first lookup finished
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

/// Looks up the signed in user, `None` when signed out or on failure
pub async fn fetch_user() -> Option<UserDto> {
    match api::get_user().await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to fetch user: {}", e);
            None
        }
    }
}
