//! 订单核心逻辑
//!
//! 下单流水线: [`validate`] → [`aggregate`] → 仓库持久化。
//! 状态变更走 [`status`]，金额运算统一经过 [`money`]。

pub mod aggregate;
pub mod money;
pub mod status;
pub mod validate;

pub use aggregate::{OrderAggregator, PricedOrder};
pub use status::transition;
pub use validate::validate_create_order;
