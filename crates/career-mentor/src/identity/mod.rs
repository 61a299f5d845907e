//! Identity provider seam for sign-up, sign-in, and session checks.
//!
//! The concrete provider sits behind [`IdentityGateway`] and is handed to
//! whoever needs it at construction time, never reached through a
//! process-wide handle, so tests can substitute a fake.

pub mod router;

use serde::Serialize;
use thiserror::Error;

use crate::navigation::NavigationTarget;

pub use router::auth_router;

/// Where the client is sent after a successful registration.
pub const POST_SIGNUP_DESTINATION: NavigationTarget = NavigationTarget::Login;

/// Where the client is sent after a successful sign-in.
pub const POST_LOGIN_DESTINATION: NavigationTarget = NavigationTarget::Profile;

/// An authenticated identity as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
}

/// Errors surfaced by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Password should be at least 6 characters")]
    WeakPassword,
    #[error("Email already in use")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Client handle for the identity provider.
pub trait IdentityGateway: Send + Sync {
    /// Create an account and return its identity. Registration alone does
    /// not start a session; the client is routed to the login page next.
    fn register(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError>;

    /// Exchange credentials for a session.
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError>;

    /// The session currently attached to this client, if any.
    fn current_session(&self) -> Result<Option<AuthSession>, IdentityError>;
}
