use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Transaction family whose state this crate manages.
pub const FAMILY_NAME: &str = "simplewallet";

const PREFIX_LEN: usize = 6;
const IDENTITY_DIGEST_LEN: usize = 64;

/// Namespace prefix shared by every key of this family: the first six hex
/// characters of the family name digest.
pub fn namespace_prefix() -> String {
    let digest = Sha512::digest(FAMILY_NAME.as_bytes());
    hex::encode(digest)[..PREFIX_LEN].to_string()
}

/// State store key for one account, derived on demand from the submitter
/// identity. 70 lowercase hex characters: namespace prefix plus the first
/// 64 hex characters of the identity digest.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKey {
    value: String,
}

impl AccountKey {
    pub fn from_identity(identity: &str) -> Self {
        let digest = Sha512::digest(identity.as_bytes());
        let mut value = namespace_prefix();
        value.push_str(&hex::encode(digest)[..IDENTITY_DIGEST_LEN]);
        Self { value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
