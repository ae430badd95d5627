use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    // Get or create a user based upon the subject reported by the OAuth provider
    //
    // The stored email follows the provider, it is updated whenever the reported one changes.
    //
    // # Returns
    // - `i32`: The ID of the user that was found or created
    // - [`Error`]: An error if there is an issue with the database
    pub async fn get_or_create_user(
        &self,
        subject: &str,
        email: Option<String>,
    ) -> Result<i32, Error> {
        let user_repository = UserRepository::new(self.db);

        if let Some(user) = user_repository.get_by_subject(subject).await? {
            if user.email != email {
                user_repository.update_email(user.id, email).await?;
            }

            return Ok(user.id);
        }

        let new_user = user_repository.create(subject, email).await?;

        Ok(new_user.id)
    }
}
