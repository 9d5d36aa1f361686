use thiserror::Error;

/// Rejection reasons surfaced to the host. Every variant is terminal for
/// the transaction and is raised before any write is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown account for identity {0}")]
    UnknownAccount(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },

    #[error("Stored balance is not a decimal integer: {0:?}")]
    CorruptedBalance(String),
}
