//! Bearer Token Service
//!
//! Stateless, time-limited bearer tokens proving an authenticated identity
//! without server-side session state. A token is three dot-separated
//! segments:
//!
//! ```text
//! {user_id}.{expires_at_ms}.{base64url(hmac_sha256(secret, "{user_id}.{expires_at_ms}"))}
//! ```
//!
//! There is no revocation list; logout is client-side token deletion.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Default token lifetime: 7 days.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Token verification errors.
///
/// All variants surface to clients the same way (401); the distinction is
/// for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not three segments, or unparsable identity/expiry
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Token signature mismatch")]
    BadSignature,

    /// Expiry timestamp has passed
    #[error("Token expired")]
    Expired,
}

/// Issues and verifies signed bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    secret: [u8; 32],
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Create a service with a random secret (for development).
    ///
    /// Tokens do not survive a restart with a random secret.
    pub fn with_random_secret(ttl: Duration) -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self { secret, ttl }
    }

    /// Issue a token for the given user, expiring `ttl` from now.
    pub fn issue(&self, user_id: Uuid) -> String {
        let expires_at = Utc::now()
            + chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::zero());
        self.issue_expiring_at(user_id, expires_at)
    }

    fn issue_expiring_at(&self, user_id: Uuid, expires_at: DateTime<Utc>) -> String {
        let payload = format!("{}.{}", user_id, expires_at.timestamp_millis());
        format!("{}.{}", payload, self.sign(&payload))
    }

    /// Verify a token and return the user identity it carries.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(TokenError::Malformed);
        }

        let payload = format!("{}.{}", parts[0], parts[1]);

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());

        let signature = URL_SAFE_NO_PAD
            .decode(parts[2])
            .map_err(|_| TokenError::BadSignature)?;

        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let user_id: Uuid = parts[0].parse().map_err(|_| TokenError::Malformed)?;
        let expires_at_ms: i64 = parts[1].parse().map_err(|_| TokenError::Malformed)?;

        if Utc::now().timestamp_millis() >= expires_at_ms {
            return Err(TokenError::Expired);
        }

        Ok(user_id)
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
