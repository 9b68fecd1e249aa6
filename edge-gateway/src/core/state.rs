use std::time::Duration;

use shared::ErrorCode;

use crate::client::ServiceClient;
use crate::core::Config;

/// 服务器状态 - 持有配置和两个下游客户端
///
/// 使用 Clone 实现浅拷贝 (reqwest::Client 内部是 Arc)。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 库存服务客户端
    pub inventory: ServiceClient,
    /// 订单服务客户端
    pub orders: ServiceClient,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替；测试用它
    /// 指向桩实现的下游地址。
    pub fn new(config: Config, inventory: ServiceClient, orders: ServiceClient) -> Self {
        Self {
            config,
            inventory,
            orders,
        }
    }

    /// 初始化服务器状态
    ///
    /// 并发探测两个下游服务，二者都可达后才返回：
    /// 1. 库存服务 (INVENTORY_URL)
    /// 2. 订单服务 (ORDER_URL)
    ///
    /// # Panics
    ///
    /// 任一下游服务不可达时 panic
    pub async fn initialize(config: &Config) -> Self {
        let timeout = Duration::from_millis(config.request_timeout_ms);

        let inventory = ServiceClient::new(
            "inventory-server",
            config.inventory_url.clone(),
            timeout,
            ErrorCode::InventoryUnavailable,
        );
        let orders = ServiceClient::new(
            "order-server",
            config.order_url.clone(),
            timeout,
            ErrorCode::NetworkError,
        );

        let (inventory_health, order_health) =
            tokio::join!(inventory.check_health(), orders.check_health());

        inventory_health.expect("Inventory service is unreachable");
        order_health.expect("Order service is unreachable");
        tracing::info!("Inventory service reachable at {}", config.inventory_url);
        tracing::info!("Order service reachable at {}", config.order_url);

        Self::new(config.clone(), inventory, orders)
    }
}
