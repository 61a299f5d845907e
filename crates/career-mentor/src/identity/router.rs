use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::navigation::NavigationTarget;

use super::{
    IdentityError, IdentityGateway, POST_LOGIN_DESTINATION, POST_SIGNUP_DESTINATION,
};

/// Router builder exposing HTTP endpoints for accounts and sessions.
pub fn auth_router<G>(gateway: Arc<G>) -> Router
where
    G: IdentityGateway + 'static,
{
    Router::new()
        .route("/api/v1/auth/signup", post(signup_handler::<G>))
        .route("/api/v1/auth/login", post(login_handler::<G>))
        .route("/api/v1/auth/session", get(session_handler::<G>))
        .with_state(gateway)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CredentialsRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

pub(crate) async fn signup_handler<G>(
    State(gateway): State<Arc<G>>,
    axum::Json(request): axum::Json<CredentialsRequest>,
) -> Response
where
    G: IdentityGateway + 'static,
{
    match gateway.register(&request.email, &request.password) {
        Ok(account) => {
            let payload = json!({
                "account": account,
                "destination": POST_SIGNUP_DESTINATION.path(),
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => identity_error_response(error),
    }
}

pub(crate) async fn login_handler<G>(
    State(gateway): State<Arc<G>>,
    axum::Json(request): axum::Json<CredentialsRequest>,
) -> Response
where
    G: IdentityGateway + 'static,
{
    match gateway.sign_in(&request.email, &request.password) {
        Ok(session) => {
            let payload = json!({
                "session": session,
                "destination": POST_LOGIN_DESTINATION.path(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => identity_error_response(error),
    }
}

pub(crate) async fn session_handler<G>(State(gateway): State<Arc<G>>) -> Response
where
    G: IdentityGateway + 'static,
{
    match gateway.current_session() {
        Ok(Some(session)) => {
            let payload = json!({
                "authenticated": true,
                "session": session,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(None) => {
            let payload = json!({
                "authenticated": false,
                "destination": NavigationTarget::Login.path(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => identity_error_response(error),
    }
}

fn identity_error_response(error: IdentityError) -> Response {
    let status = match &error {
        IdentityError::WeakPassword => StatusCode::UNPROCESSABLE_ENTITY,
        IdentityError::EmailTaken => StatusCode::CONFLICT,
        IdentityError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        IdentityError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
