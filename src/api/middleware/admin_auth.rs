//! HTTP Basic authentication for the admin API.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::{error::AppError, state::AppState};

type HmacSha256 = Hmac<Sha256>;

/// Username and password accepted by the admin endpoints.
///
/// Only HMAC-SHA256 tags of the configured values are kept, under a key drawn
/// once per process. [`AdminCredentials::verify`] tags the supplied values
/// and checks them with [`Mac::verify_slice`], so the comparison runs in
/// constant time whatever the input lengths.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    key: [u8; 32],
    username_tag: Vec<u8>,
    password_tag: Vec<u8>,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl AsRef<str>) -> Self {
        let username = username.into();
        let key: [u8; 32] = rand::random();

        Self {
            username_tag: tag(&key, &username).finalize().into_bytes().to_vec(),
            password_tag: tag(&key, password.as_ref())
                .finalize()
                .into_bytes()
                .to_vec(),
            username,
            key,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Checks a username/password pair.
    ///
    /// Both halves are always checked, so timing does not reveal which one
    /// mismatched.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = tag(&self.key, username)
            .verify_slice(&self.username_tag)
            .is_ok();
        let pass_ok = tag(&self.key, password)
            .verify_slice(&self.password_tag)
            .is_ok();
        user_ok & pass_ok
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

fn tag(key: &[u8], value: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(value.as_bytes());
    mac
}

/// Rejects requests without valid admin Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic` if the header is
/// missing, malformed, or carries the wrong credentials.
///
/// # Example
///
/// ```rust,ignore
/// let admin = Router::new()
///     .route("/admin/books", get(list_books_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if !st
        .admin
        .verify(&username, password.as_deref().unwrap_or_default())
    {
        tracing::warn!(username = %username, "Rejected admin credentials");
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Invalid credentials"}),
        ));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
