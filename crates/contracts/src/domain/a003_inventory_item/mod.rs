pub mod aggregate;
pub mod seed;

pub use aggregate::{InventoryItem, StockLevel, StockStatus};
