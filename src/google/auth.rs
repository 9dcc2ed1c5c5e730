//! OAuth2 access tokens for a service account (JWT bearer grant).

use crate::errors::{AppError, AppResult};
use crate::google::credentials::ServiceAccountKey;
use crate::google::http::read_checked;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use ureq::Agent;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: String,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Hands out bearer tokens, exchanging a fresh signed assertion when the
/// cached one is about to expire.
pub struct TokenSource {
    key: ServiceAccountKey,
    scopes: Vec<String>,
    agent: Agent,
    cache: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    pub fn new(key: ServiceAccountKey, scopes: &[&str], agent: Agent) -> Self {
        Self {
            key,
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
            agent,
            cache: Mutex::new(None),
        }
    }

    /// Seed the cache with an already issued token, valid until `expires_at`.
    pub fn with_token(self, token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        *self.cache.lock() = Some(CachedToken {
            value: token.into(),
            expires_at,
        });
        self
    }

    /// Signed RS256 assertion for the token endpoint.
    pub fn assertion(&self, now: DateTime<Utc>) -> AppResult<String> {
        let claims = Claims {
            iss: &self.key.client_email,
            scope: self.scopes.join(" "),
            aud: &self.key.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        let signing_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| AppError::Credentials(format!("unusable private key: {}", e)))?;

        jsonwebtoken::encode(&header, &claims, &signing_key)
            .map_err(|e| AppError::Credentials(format!("cannot sign assertion: {}", e)))
    }

    /// Current access token, fetching a new one when needed.
    pub fn token(&self) -> AppResult<String> {
        let now = Utc::now();
        let mut cache = self.cache.lock();

        if let Some(cached) = cache.as_ref()
            && cached.expires_at - Duration::seconds(EXPIRY_MARGIN_SECS) > now
        {
            return Ok(cached.value.clone());
        }

        let assertion = self.assertion(now)?;
        tracing::debug!(account = %self.key.client_email, "requesting access token");

        let response = self
            .agent
            .post(&self.key.token_uri)
            .send_form([("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])?;
        let token: TokenResponse = read_checked("Token exchange", response)?;

        let fresh = CachedToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        };
        let value = fresh.value.clone();
        *cache = Some(fresh);
        Ok(value)
    }
}
