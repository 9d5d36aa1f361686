use std::collections::HashMap;
use std::slice;

use log::info;

use crate::address::{namespace_prefix, AccountKey, FAMILY_NAME};
use crate::error::WalletError;
use crate::payload::{Operation, OperationRequest};
use crate::state::{decode_balance, encode_balance, StateAccess};

const FAMILY_VERSION: &str = "1.0";

/// Ledger transition engine for the wallet family. Applies one validated
/// [`OperationRequest`] per invocation against a [`StateAccess`] view.
///
/// Validation always precedes mutation: an error return means no write was
/// issued during the invocation.
pub struct WalletTransactionHandler {
    family_name: String,
    family_versions: Vec<String>,
    namespaces: Vec<String>,
}

impl WalletTransactionHandler {
    pub fn new() -> Self {
        Self {
            family_name: FAMILY_NAME.to_string(),
            family_versions: vec![FAMILY_VERSION.to_string()],
            namespaces: vec![namespace_prefix()],
        }
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn family_versions(&self) -> &[String] {
        &self.family_versions
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn apply(
        &self,
        request: &OperationRequest,
        store: &mut impl StateAccess,
    ) -> Result<(), WalletError> {
        info!(
            "applying {:?} of {} for {}",
            request.operation(),
            request.amount(),
            request.source(),
        );

        // The decoder already rejects non-positive amounts; re-checked here
        // so the rule holds for requests constructed by other hosts.
        ensure_positive(request.amount())?;

        match request.operation() {
            Operation::Deposit => self.deposit(request.amount(), request.source(), store),
            Operation::Withdraw => self.withdraw(request.amount(), request.source(), store),
            Operation::Transfer => {
                let destination = request.destination().ok_or_else(|| {
                    WalletError::MalformedPayload("transfer requires a destination field".into())
                })?;
                self.transfer(request.amount(), request.source(), destination, store)
            }
        }
    }

    /// Credits `amount` to the source account, creating it on first use.
    fn deposit(
        &self,
        amount: u64,
        source: &str,
        store: &mut impl StateAccess,
    ) -> Result<(), WalletError> {
        let key = AccountKey::from_identity(source);
        let values = store.read(slice::from_ref(&key));
        let current = match decode_balance(&values, &key)? {
            Some(balance) => balance,
            None => {
                info!("first deposit for {source}, creating account");
                0
            }
        };
        let new_balance = checked_credit(current, amount)?;

        store.write(HashMap::from([(key, encode_balance(new_balance))]));
        Ok(())
    }

    /// Debits `amount` from the source account, which must exist and cover
    /// the amount.
    fn withdraw(
        &self,
        amount: u64,
        source: &str,
        store: &mut impl StateAccess,
    ) -> Result<(), WalletError> {
        let key = AccountKey::from_identity(source);
        let values = store.read(slice::from_ref(&key));
        let current = decode_balance(&values, &key)?
            .ok_or_else(|| WalletError::UnknownAccount(source.to_string()))?;
        if amount > current {
            return Err(WalletError::InsufficientFunds {
                requested: amount,
                available: current,
            });
        }

        store.write(HashMap::from([(key, encode_balance(current - amount))]));
        Ok(())
    }

    /// Moves `amount` from the source to the destination account. Both
    /// accounts must exist; transfer never creates one.
    fn transfer(
        &self,
        amount: u64,
        source: &str,
        destination: &str,
        store: &mut impl StateAccess,
    ) -> Result<(), WalletError> {
        let key_from = AccountKey::from_identity(source);
        let key_to = AccountKey::from_identity(destination);
        let values = store.read(&[key_from.clone(), key_to.clone()]);

        let from_balance = decode_balance(&values, &key_from)?
            .ok_or_else(|| WalletError::UnknownAccount(source.to_string()))?;
        if amount > from_balance {
            return Err(WalletError::InsufficientFunds {
                requested: amount,
                available: from_balance,
            });
        }
        let to_balance = decode_balance(&values, &key_to)?
            .ok_or_else(|| WalletError::UnknownAccount(destination.to_string()))?;
        let new_to = checked_credit(to_balance, amount)?;

        // Debit and credit are separate write calls; the host commits the
        // whole invocation atomically or not at all.
        store.write(HashMap::from([(
            key_from,
            encode_balance(from_balance - amount),
        )]));
        store.write(HashMap::from([(key_to, encode_balance(new_to))]));
        Ok(())
    }
}

impl Default for WalletTransactionHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_positive(amount: u64) -> Result<(), WalletError> {
    if amount == 0 {
        return Err(WalletError::InvalidAmount(amount.to_string()));
    }
    Ok(())
}

fn checked_credit(balance: u64, amount: u64) -> Result<u64, WalletError> {
    balance.checked_add(amount).ok_or_else(|| {
        WalletError::InvalidAmount(format!("crediting {amount} overflows balance {balance}"))
    })
}
