pub mod aggregate;
pub mod seed;

pub use aggregate::{Supplier, SupplierStatus, MAX_RATING};
