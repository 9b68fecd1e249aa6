//! 下游服务客户端

pub mod inventory;

pub use inventory::{HttpInventoryClient, InventoryApi, InventoryError};
