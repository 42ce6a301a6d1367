// SPDX-License-Identifier: MPL-2.0
//! Administrator authentication against the hosted identity provider.
//!
//! Sign-in is a two-step flow:
//! 1. `accounts:signInWithPassword` exchanges credentials for an identity
//!    token.
//! 2. The `admins/{uid}` role document is read with that token; the account
//!    is an administrator only when the document exists and `isAdmin` is
//!    `true`.
//!
//! A signed-in account without the role is rejected with
//! [`AuthError::NotAdmin`]; the token is simply dropped, which is all
//! sign-out means for a stateless REST session.

use super::firestore::{self, Value};
use super::Backend;
use crate::error::{AuthError, BackendError};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;

const SIGN_IN_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";
const SIGN_UP_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts:signUp";

/// A signed-in administrator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    /// Bearer token for role-gated reads. Dropped on sign-out.
    id_token: String,
}

impl AdminUser {
    #[must_use]
    pub fn id_token(&self) -> &str {
        &self.id_token
    }
}

#[cfg(test)]
impl AdminUser {
    /// Builds a session without a network round trip.
    pub(crate) fn for_tests(uid: &str, email: &str, display_name: Option<&str>) -> Self {
        Self {
            uid: uid.to_string(),
            email: email.to_string(),
            display_name: display_name.map(str::to_string),
            id_token: "test-token".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    id_token: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Extracts the provider error code from a failed response body.
fn provider_code(body: &str) -> AuthError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => AuthError::from_code(&parsed.error.message),
        Err(_) => AuthError::Provider(body.trim().to_string()),
    }
}

async fn password_request(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    email: &str,
    password: &str,
) -> Result<SignInResponse, AuthError> {
    let response = client
        .post(url)
        .query(&[("key", api_key)])
        .json(&serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        }))
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;

    if !response.status().is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        return Err(provider_code(&body));
    }

    response
        .json::<SignInResponse>()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))
}

/// Whether a role document grants administrator rights.
#[must_use]
pub fn is_admin_document(document: &firestore::Document) -> bool {
    document.field("isAdmin").as_bool() == Some(true)
}

/// Reads the role document for `uid`.
///
/// Any failure (missing document, denied read, network) counts as "not an
/// administrator" rather than an error, matching the storefront's behavior.
pub async fn check_admin_status(backend: &Backend, uid: &str, id_token: &str) -> bool {
    let url = backend.document_url("admins", uid);
    match firestore::fetch_document(backend.client(), &url, Some(id_token)).await {
        Ok(document) => is_admin_document(&document),
        Err(_) => false,
    }
}

/// Signs in and verifies the administrator role.
pub async fn sign_in_admin(
    backend: &Backend,
    email: &str,
    password: &str,
) -> Result<AdminUser, AuthError> {
    let session = password_request(
        backend.client(),
        SIGN_IN_URL,
        backend.api_key(),
        email,
        password,
    )
    .await?;

    if !check_admin_status(backend, &session.local_id, &session.id_token).await {
        // Dropping the token is the client-side sign-out.
        return Err(AuthError::NotAdmin);
    }

    Ok(AdminUser {
        uid: session.local_id,
        email: session.email,
        display_name: session.display_name.filter(|n| !n.is_empty()),
        id_token: session.id_token,
    })
}

/// Creates an administrator account and its role document.
///
/// Initial-setup utility: registers the account with the identity provider,
/// then writes `admins/{uid}` with `isAdmin: true` and a creation timestamp.
pub async fn create_admin_user(
    backend: &Backend,
    email: &str,
    password: &str,
) -> Result<AdminUser, AuthError> {
    let session = password_request(
        backend.client(),
        SIGN_UP_URL,
        backend.api_key(),
        email,
        password,
    )
    .await?;

    let fields = admin_document_fields(&session.email);
    let url = backend.document_url("admins", &session.local_id);
    firestore::patch_document(backend.client(), &url, &session.id_token, fields)
        .await
        .map_err(|e: BackendError| AuthError::Network(e.to_string()))?;

    Ok(AdminUser {
        uid: session.local_id,
        email: session.email,
        display_name: session.display_name.filter(|n| !n.is_empty()),
        id_token: session.id_token,
    })
}

/// Fields written to a fresh role document.
fn admin_document_fields(email: &str) -> HashMap<String, Value> {
    HashMap::from([
        ("email".to_string(), Value::from_string(email)),
        ("isAdmin".to_string(), Value::from_bool(true)),
        ("createdAt".to_string(), Value::from_timestamp(Utc::now())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::firestore::Document;

    #[test]
    fn provider_code_parses_error_body() {
        let body = r#"{"error":{"code":400,"message":"INVALID_PASSWORD","errors":[]}}"#;
        assert_eq!(provider_code(body), AuthError::InvalidCredentials);
    }

    #[test]
    fn provider_code_keeps_unparseable_body() {
        let err = provider_code("upstream proxy error");
        assert!(matches!(err, AuthError::Provider(msg) if msg == "upstream proxy error"));
    }

    #[test]
    fn is_admin_document_requires_true_flag() {
        let granted: Document = serde_json::from_value(serde_json::json!({
            "fields": { "isAdmin": { "booleanValue": true } }
        }))
        .unwrap();
        assert!(is_admin_document(&granted));

        let revoked: Document = serde_json::from_value(serde_json::json!({
            "fields": { "isAdmin": { "booleanValue": false } }
        }))
        .unwrap();
        assert!(!is_admin_document(&revoked));

        assert!(!is_admin_document(&Document::default()));
    }

    #[test]
    fn admin_document_fields_carry_role_and_timestamp() {
        let fields = admin_document_fields("admin@santis.cl");
        assert_eq!(
            fields.get("email").and_then(|v| v.as_str()),
            Some("admin@santis.cl")
        );
        assert_eq!(fields.get("isAdmin").and_then(Value::as_bool), Some(true));
        assert!(fields
            .get("createdAt")
            .and_then(Value::as_timestamp)
            .is_some());
    }
}
