//! Central role guard run at the entry of every role-restricted operation.

use sea_orm::ConnectionTrait;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
};

pub struct AuthGuard<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthGuard<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the acting user and checks it holds one of the accepted roles.
    ///
    /// # Arguments
    /// - `user_id`: Principal performing the operation
    /// - `roles`: Roles the operation accepts
    ///
    /// # Returns
    /// - `Ok(User)`: The acting user
    /// - `Err(AppError::NotFound)`: No user with that id
    /// - `Err(AppError::AuthErr)`: The user's role is not accepted
    pub async fn require(&self, user_id: i32, roles: &[Role]) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !roles.contains(&user.role) {
            return Err(AuthError::RoleMismatch {
                user_id,
                required: roles.to_vec(),
                actual: user.role,
            }
            .into());
        }

        Ok(user)
    }
}
