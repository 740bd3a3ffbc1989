//! Demo auth endpoints
//!
//! The backend's login/register routes are a placeholder: plaintext
//! passwords, non-cryptographic token. Good enough to gate the demo
//! dashboard, nothing more.

use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}

fn session_from(value: &serde_json::Value) -> Result<AuthSession, String> {
    Ok(AuthSession {
        token: super::take_field(value, "token")?,
        user: super::take_field(value, "user")?,
    })
}

pub async fn login(identifier: &str, password: &str) -> Result<AuthSession, String> {
    let value = super::post(
        "/login",
        json!({ "identifier": identifier, "password": password }),
    )
    .await?;
    session_from(&value)
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthSession, String> {
    let value = super::post(
        "/register",
        json!({ "name": name, "email": email, "password": password }),
    )
    .await?;
    session_from(&value)
}
