pub mod aggregate;
pub mod seed;

pub use aggregate::{PurchaseOrder, PurchaseOrderStatus};
