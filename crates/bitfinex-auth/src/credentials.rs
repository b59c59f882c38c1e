//! Authentication credentials for the Bitfinex API
//!
//! # Security
//!
//! The API secret is wrapped in [`secrecy::SecretString`], which zeroizes the
//! backing memory on drop and is excluded from `Debug` output. Only the
//! signing routine ever exposes the raw bytes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha384;

use crate::error::{AuthError, AuthResult};

type HmacSha384 = Hmac<Sha384>;

/// Header carrying the API key.
pub const HEADER_API_KEY: &str = "X-BFX-APIKEY";

/// Header carrying the base64-encoded request payload.
pub const HEADER_PAYLOAD: &str = "X-BFX-PAYLOAD";

/// Header carrying the hex-encoded HMAC-SHA384 signature of the payload.
pub const HEADER_SIGNATURE: &str = "X-BFX-SIGNATURE";

/// API credentials for authenticated endpoints.
pub struct Credentials {
    /// API key (public identifier)
    api_key: String,
    /// API secret, used as the HMAC key
    api_secret: SecretString,
}

impl Credentials {
    /// Creates credentials from an API key and secret.
    ///
    /// No local validation is performed. The exchange is the authority on
    /// whether a key pair is valid, and it reports rejections in the response
    /// body.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Creates empty credentials for clients that only call public endpoints.
    ///
    /// Signing still works (HMAC accepts an empty key), so a private call made
    /// with anonymous credentials reaches the exchange and comes back as an
    /// API error rather than failing locally.
    pub fn anonymous() -> Self {
        Self::new("", "")
    }

    /// Loads credentials from the `BITFINEX_API_KEY` and `BITFINEX_API_SECRET`
    /// environment variables.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("BITFINEX_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("BITFINEX_API_KEY".to_string()))?;
        let api_secret = std::env::var("BITFINEX_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("BITFINEX_API_SECRET".to_string()))?;
        Ok(Self::new(api_key, api_secret))
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Signs a JSON request payload for the `X-BFX-*` headers.
    ///
    /// The payload is base64-encoded, then the base64 string itself is
    /// HMAC-SHA384 signed with the raw secret bytes. The exchange verifies
    /// the signature against the payload header, so both travel together in
    /// [`SignedPayload`].
    pub fn sign(&self, payload_json: &str) -> SignedPayload {
        let payload = BASE64.encode(payload_json);

        let mut mac = HmacSha384::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        SignedPayload { payload, signature }
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", &self.api_key.chars().take(8).collect::<String>()))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// A signed request payload ready to be placed in the auth headers.
#[derive(Debug, Clone)]
pub struct SignedPayload {
    /// Base64-encoded JSON payload for `X-BFX-PAYLOAD`
    pub payload: String,
    /// Lowercase hex HMAC-SHA384 signature for `X-BFX-SIGNATURE`
    pub signature: String,
}
