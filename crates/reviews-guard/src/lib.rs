//! # reviews-guard
//!
//! Anti-spoofing tokens for review forms.
//! A token binds a target's type and key to the time the form was shown,
//! signed with a salted HMAC-SHA1 so the verifier needs no session state.

pub mod guard;
pub mod secret;
mod signature;
pub mod token;

pub use guard::TokenGuard;
pub use secret::SecretKey;
pub use token::SecurityToken;
