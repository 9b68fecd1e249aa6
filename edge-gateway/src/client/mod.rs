//! 下游服务 HTTP 客户端

pub mod downstream;

pub use downstream::ServiceClient;
