//! Salted HMAC-SHA1 signing.
//!
//! `key = SHA1(salt || secret)`, `mac = HMAC-SHA1(key, message)`, rendered
//! as 40 lowercase hex characters. This is the scheme existing deployments
//! signed their forms with, so it cannot change without invalidating them.

use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use reviews_core::errors::ConfigError;

use crate::secret::SecretKey;

pub(crate) type HmacSha1 = Hmac<Sha1>;

/// Build a keyed MAC from a salt and secret. Clone it per signature.
pub(crate) fn keyed_mac(salt: &str, secret: &SecretKey) -> Result<HmacSha1, ConfigError> {
    let mut hasher = Sha1::new();
    hasher.update(salt.as_bytes());
    hasher.update(secret.expose());
    let key: Zeroizing<[u8; 20]> = Zeroizing::new(hasher.finalize().into());

    HmacSha1::new_from_slice(&key[..]).map_err(|e| ConfigError::ValidationFailed {
        field: "security.secret_key".to_string(),
        message: e.to_string(),
    })
}

/// Sign `message` with a keyed MAC, returning lowercase hex.
pub(crate) fn sign(mac: &HmacSha1, message: &str) -> String {
    let mut mac = mac.clone();
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Compare without short-circuiting on the first differing byte.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
