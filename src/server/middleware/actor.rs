use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::{auth::AuthError, AppError};

/// Header carrying the authenticated user's ID, set by the upstream auth layer.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// ID of the user performing the request.
///
/// Mutating handlers pass it explicitly to the services, which record it as the
/// creator of assignments and operators and as the performer of audit entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub String);

impl Actor {
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor_id = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingActor(ACTOR_HEADER))?;

        Ok(Actor(actor_id.to_string()))
    }
}
