use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, StatusCode},
};
use std::sync::Arc;
use tracing::Span;

use crate::domain::models::auth::Claims;
use crate::domain::models::member::ROLE_ADMIN;
use crate::state::AppState;

/// Verified bearer-token identity for any authenticated caller.
pub struct AuthMember(pub Claims);

/// Same, but rejects with 403 unless the token carries the admin role.
pub struct AdminMember(pub Claims);

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.to_string())
}

impl<S> FromRequestParts<S> for AuthMember
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state
            .auth_service
            .verify_token(&token)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        Span::current().record("member_id", &claims.sub);

        Ok(AuthMember(claims))
    }
}

impl<S> FromRequestParts<S> for AdminMember
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthMember(claims) = AuthMember::from_request_parts(parts, state).await?;

        if claims.role != ROLE_ADMIN {
            return Err(StatusCode::FORBIDDEN);
        }

        Ok(AdminMember(claims))
    }
}
