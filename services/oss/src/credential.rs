use ossign_core::utils::Redact;
use ossign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key pair used to sign oss requests.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id, sent in clear inside the `Authorization` header.
    pub access_key_id: String,
    /// Access key secret, used as the HMAC key and never sent.
    pub access_key_secret: String,
    /// Security token for STS credentials.
    pub security_token: Option<String>,
}

impl Credential {
    /// Create a new credential from an access key pair.
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: access_key_secret.into(),
            security_token: None,
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("access_key_secret", &Redact::from(&self.access_key_secret))
            .field("security_token", &Redact::from(&self.security_token))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.access_key_secret.is_empty()
    }
}
