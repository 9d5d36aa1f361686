use std::str;

use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Balance mutations accepted by the wallet family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Deposit,
    Withdraw,
    Transfer,
}

impl Operation {
    fn from_name(name: &str) -> Result<Self, WalletError> {
        match name {
            "deposit" => Ok(Operation::Deposit),
            "withdraw" => Ok(Operation::Withdraw),
            "transfer" => Ok(Operation::Transfer),
            other => Err(WalletError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// One decoded transaction. Built fresh per invocation by [`decode`] and
/// consumed by the transition engine; never persisted.
///
/// [`decode`]: OperationRequest::decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    operation: Operation,
    amount: u64,
    source: String,
    destination: Option<String>,
}

impl OperationRequest {
    /// Parses a raw payload together with the submitter identity taken
    /// from the transaction envelope.
    ///
    /// The payload is a UTF-8 string of comma-separated fields:
    /// `<operation>,<amount>`, or `transfer,<amount>,<destination>`.
    pub fn decode(raw: &[u8], submitter: &str) -> Result<Self, WalletError> {
        let text = str::from_utf8(raw)
            .map_err(|_| WalletError::MalformedPayload("payload is not valid UTF-8".into()))?;

        let fields: Vec<&str> = text.split(',').collect();
        match fields.len() {
            2 => {}
            3 if fields[0] == "transfer" => {}
            count => {
                return Err(WalletError::MalformedPayload(format!(
                    "expected 2 fields, or 3 for transfer, got {count}"
                )))
            }
        }

        let operation = Operation::from_name(fields[0])?;
        let amount = decode_amount(fields[1])?;

        let destination = match operation {
            Operation::Transfer => Some(decode_destination(&fields, submitter)?),
            Operation::Deposit | Operation::Withdraw => None,
        };

        Ok(Self {
            operation,
            amount,
            source: submitter.to_string(),
            destination,
        })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}

fn decode_amount(field: &str) -> Result<u64, WalletError> {
    let amount: u64 = field
        .parse()
        .map_err(|_| WalletError::InvalidAmount(field.to_string()))?;
    if amount == 0 {
        return Err(WalletError::InvalidAmount(field.to_string()));
    }
    Ok(amount)
}

fn decode_destination(fields: &[&str], submitter: &str) -> Result<String, WalletError> {
    let Some(destination) = fields.get(2) else {
        return Err(WalletError::MalformedPayload(
            "transfer requires a destination field".into(),
        ));
    };
    if destination.is_empty() {
        return Err(WalletError::MalformedPayload(
            "transfer destination is empty".into(),
        ));
    }
    // A self-transfer would debit and credit the same key and mint funds
    // under the two-write scheme.
    if *destination == submitter {
        return Err(WalletError::MalformedPayload(
            "transfer destination is the submitter".into(),
        ));
    }
    Ok(destination.to_string())
}
