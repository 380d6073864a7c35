use thiserror::Error;
use uuid::Uuid;

/// Error type that captures store mutations addressing a missing record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transaction {0} not found")]
    TransactionNotFound(Uuid),
}
