use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{dto::ErrorDto, model::user::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The acting user does not hold any of the roles the operation accepts.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User {user_id} has role {actual} but one of {} is required", format_roles(.required))]
    RoleMismatch {
        /// User performing the operation
        user_id: i32,
        /// Roles accepted by the operation
        required: Vec<Role>,
        /// Role the user actually holds
        actual: Role,
    },
}

fn format_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join("|")
}

/// Converts authorization errors into HTTP responses.
///
/// Role mismatches are business rule violations and share the 400 status used for
/// every other rejected request.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::RoleMismatch { ref required, .. } => {
                tracing::debug!("{}", self);

                let message = match required.as_slice() {
                    [role] => format!("Only {} users can perform this action", role.as_str()),
                    _ => "You are not allowed to perform this action".to_string(),
                };

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}
