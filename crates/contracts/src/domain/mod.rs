pub mod common;

pub mod a001_project;
pub mod a002_purchase_order;
pub mod a003_inventory_item;
pub mod a004_supplier;
pub mod a005_transaction;
