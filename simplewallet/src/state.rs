use std::collections::HashMap;

use crate::address::AccountKey;
use crate::error::WalletError;

/// Batched key/value access to this family's slice of the external state
/// store, scoped by the host to one transaction's execution context.
pub trait StateAccess {
    /// Current values for the requested keys. A key absent from the
    /// result, or mapped to an empty string, has never been written.
    fn read(&self, keys: &[AccountKey]) -> HashMap<AccountKey, String>;

    /// Persists the given entries. Atomic per call.
    fn write(&mut self, entries: HashMap<AccountKey, String>);
}

/// Decodes the stored balance for `key` out of a batched read result.
/// Absent and empty both mean the account does not exist.
pub(crate) fn decode_balance(
    values: &HashMap<AccountKey, String>,
    key: &AccountKey,
) -> Result<Option<u64>, WalletError> {
    let Some(value) = values.get(key) else {
        return Ok(None);
    };
    if value.is_empty() {
        return Ok(None);
    }
    let balance = value
        .parse()
        .map_err(|_| WalletError::CorruptedBalance(value.clone()))?;
    Ok(Some(balance))
}

pub(crate) fn encode_balance(balance: u64) -> String {
    balance.to_string()
}

/// HashMap-backed state view for tests and in-process hosts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryState {
    entries: HashMap<AccountKey, String>,
}

impl InMemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance currently stored for an identity, if the account exists.
    pub fn balance_of(&self, identity: &str) -> Option<u64> {
        let key = AccountKey::from_identity(identity);
        self.entries
            .get(&key)
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse().ok())
    }
}

impl StateAccess for InMemoryState {
    fn read(&self, keys: &[AccountKey]) -> HashMap<AccountKey, String> {
        keys.iter()
            .filter_map(|key| {
                self.entries
                    .get(key)
                    .map(|value| (key.clone(), value.clone()))
            })
            .collect()
    }

    fn write(&mut self, entries: HashMap<AccountKey, String>) {
        self.entries.extend(entries);
    }
}

// Test utils
#[cfg(test)]
impl InMemoryState {
    /// Seed a raw entry, bypassing balance encoding.
    pub fn with_raw_entry(mut self, identity: &str, value: &str) -> Self {
        self.entries
            .insert(AccountKey::from_identity(identity), value.to_string());
        self
    }
}
