use serde::{Deserialize, Serialize};

use reviews_core::constants::{
    FIELD_CONTENT_TYPE, FIELD_OBJECT_PK, FIELD_SECURITY_HASH, FIELD_TIMESTAMP, SIGNATURE_HEX_LEN,
};
use reviews_core::errors::VerifyError;
use reviews_core::TargetReference;

/// A signed, self-describing proof that a submission refers to the target
/// it claims to. Travels as hidden form fields for one request/response
/// round trip and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityToken {
    pub target_type: String,
    pub target_key: String,
    /// Unix seconds at which the form was issued.
    pub timestamp: i64,
    /// 40-character lowercase hex signature.
    pub signature: String,
}

impl SecurityToken {
    /// The message the signature covers: `type-key-timestamp`.
    pub fn signed_message(&self) -> String {
        signed_message(&self.target_type, &self.target_key, self.timestamp)
    }

    pub fn target(&self) -> TargetReference {
        TargetReference::new(self.target_type.clone(), self.target_key.clone())
    }

    /// Hidden form fields carrying this token.
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (FIELD_CONTENT_TYPE, self.target_type.clone()),
            (FIELD_OBJECT_PK, self.target_key.clone()),
            (FIELD_TIMESTAMP, self.timestamp.to_string()),
            (FIELD_SECURITY_HASH, self.signature.clone()),
        ]
    }

    /// Rebuild a token from submitted hidden fields.
    ///
    /// A hash that is not exactly 40 characters long is a signature
    /// mismatch, not a formatting error: it can never verify.
    pub fn from_form_fields(
        content_type: Option<&str>,
        object_pk: Option<&str>,
        timestamp: Option<&str>,
        security_hash: Option<&str>,
    ) -> Result<Self, VerifyError> {
        let target_type = required(content_type, FIELD_CONTENT_TYPE)?;
        let target_key = required(object_pk, FIELD_OBJECT_PK)?;
        let raw_timestamp = required(timestamp, FIELD_TIMESTAMP)?;
        let signature = required(security_hash, FIELD_SECURITY_HASH)?;

        let timestamp = raw_timestamp
            .trim()
            .parse::<i64>()
            .map_err(|_| VerifyError::MalformedTimestamp {
                value: raw_timestamp.to_string(),
            })?;

        if signature.chars().count() != SIGNATURE_HEX_LEN {
            return Err(VerifyError::SignatureMismatch);
        }

        Ok(Self {
            target_type: target_type.to_string(),
            target_key: target_key.to_string(),
            timestamp,
            signature: signature.to_string(),
        })
    }
}

pub(crate) fn signed_message(target_type: &str, target_key: &str, timestamp: i64) -> String {
    format!("{target_type}-{target_key}-{timestamp}")
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, VerifyError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(VerifyError::MissingField { field }),
    }
}
