use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::client::{HttpInventoryClient, InventoryApi};
use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有配置、数据库和库存客户端的共享引用
///
/// 使用 Clone 实现浅拷贝 (Surreal<Db> 内部是 Arc，客户端是 Arc)。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 库存服务客户端
    pub inventory: Arc<dyn InventoryApi>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替；测试用它
    /// 注入脚本化的库存实现。
    pub fn new(config: Config, db: Surreal<Db>, inventory: Arc<dyn InventoryApi>) -> Self {
        Self {
            config,
            db,
            inventory,
        }
    }

    /// 初始化服务器状态
    ///
    /// 两个下游依赖并发建立，二者都成功后才返回：
    /// 1. 嵌入式数据库 (work_dir/database/orders.db)
    /// 2. 库存服务健康探测 (INVENTORY_URL)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败或库存服务不可达时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("orders.db");
        let db_path_str = db_path.to_string_lossy();

        let client = HttpInventoryClient::new(
            config.inventory_url.clone(),
            Duration::from_millis(config.inventory_timeout_ms),
        );

        let (db_service, inventory_health) =
            tokio::join!(DbService::new(&db_path_str), client.check_health());

        let db_service = db_service.expect("Failed to initialize database");
        inventory_health.expect("Inventory service is unreachable");
        tracing::info!("Inventory service reachable at {}", config.inventory_url);

        Self::new(config.clone(), db_service.db, Arc::new(client))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
