use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::AppError;
use crate::state::AppState;

type HmacSha256 = Hmac<Sha256>;

/// bcrypt work factor for stored passwords.
pub const PASSWORD_COST: u32 = 10;

// ---------------------------------------------------------------------------
// Passwords
// ---------------------------------------------------------------------------

/// bcrypt hash (`$2b$...`) of `password`. CPU-bound at the default cost;
/// call from a blocking context.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    hash_password_with_cost(password, PASSWORD_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> anyhow::Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// False for a wrong password and for anything that is not a bcrypt hash.
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Issues and checks `base64url(claims).base64url(hmac)` bearer tokens.
#[derive(Clone)]
pub struct TokenSigner {
    key: Vec<u8>,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(key: impl Into<Vec<u8>>, ttl_days: u32) -> Self {
        Self {
            key: key.into(),
            ttl: Duration::days(i64::from(ttl_days)),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.key).expect("infallible: HMAC accepts keys of any length")
    }

    pub fn issue(&self, account_id: &str) -> String {
        self.issue_at(account_id, Utc::now())
    }

    pub fn issue_at(&self, account_id: &str, now: DateTime<Utc>) -> String {
        let claims = Claims {
            sub: account_id.to_string(),
            exp: (now + self.ttl).timestamp(),
        };
        let payload = serde_json::to_vec(&claims).expect("infallible: claims are plain data");
        let mut mac = self.mac();
        mac.update(&payload);
        let sig = mac.finalize().into_bytes();
        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(sig)
        )
    }

    pub fn verify(&self, token: &str) -> Option<Claims> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Option<Claims> {
        let (payload, sig) = token.split_once('.')?;
        let payload = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let sig = URL_SAFE_NO_PAD.decode(sig).ok()?;

        let mut mac = self.mac();
        mac.update(&payload);
        mac.verify_slice(&sig).ok()?;

        let claims: Claims = serde_json::from_slice(&payload).ok()?;
        (claims.exp > now.timestamp()).then_some(claims)
    }
}

/// Random signing key for when no secret is configured. Tokens do not survive
/// a restart.
pub fn ephemeral_secret() -> Vec<u8> {
    let mut key = vec![0u8; 32];
    rand::thread_rng().fill_bytes(&mut key);
    key
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

/// Account id of the bearer, inserted into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthAccount(pub String);

fn bearer(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
}

pub async fn require_auth(State(app): State<AppState>, mut req: Request, next: Next) -> Response {
    let claims = bearer(&req).and_then(|token| app.tokens.verify(token));
    match claims {
        Some(claims) => {
            req.extensions_mut().insert(AuthAccount(claims.sub));
            next.run(req).await
        }
        None => {
            tracing::debug!(path = %req.uri().path(), "rejected request without valid token");
            AppError::unauthorized("unauthorized").into_response()
        }
    }
}
