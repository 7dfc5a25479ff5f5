pub mod aggregate;
pub mod seed;

pub use aggregate::{Transaction, TransactionStatus, TransactionType};
