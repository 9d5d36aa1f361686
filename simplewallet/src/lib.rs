pub mod address;
pub mod error;
mod handler;
mod payload;
mod state;

pub use address::AccountKey;
pub use error::WalletError;
pub use handler::WalletTransactionHandler;
pub use payload::Operation;
pub use payload::OperationRequest;
pub use state::InMemoryState;
pub use state::StateAccess;

#[cfg(test)]
mod tests;
