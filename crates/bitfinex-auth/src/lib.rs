//! Authentication primitives for the Bitfinex v1 REST API
//!
//! This crate holds the credential type, the HMAC-SHA384 payload signer and
//! the nonce generator used by `bitfinex-rest` for private endpoints. It
//! performs no I/O of its own.
//!
//! # Example
//!
//! ```
//! use bitfinex_auth::{next_nonce, Credentials};
//!
//! let creds = Credentials::new("api-key", "api-secret");
//!
//! let payload = format!(r#"{{"request":"/v1/balances","nonce":"{}"}}"#, next_nonce());
//! let signed = creds.sign(&payload);
//!
//! // 48-byte HMAC-SHA384 digest, hex encoded
//! assert_eq!(signed.signature.len(), 96);
//! ```

mod credentials;
mod error;
mod nonce;

pub use credentials::{
    Credentials, SignedPayload, HEADER_API_KEY, HEADER_PAYLOAD, HEADER_SIGNATURE,
};
pub use error::{AuthError, AuthResult};
pub use nonce::next_nonce;
