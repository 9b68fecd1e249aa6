//! Shop Order Server - 订单服务
//!
//! 接收下单请求，逐项向库存服务查询商品快照并核对库存，
//! 聚合出带价格的订单后写入嵌入式 SurrealDB。
//! 订单状态机、按用户分页查询也在这里。
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── client/        # 库存服务 HTTP 客户端
//! ├── orders/        # 订单校验、聚合、状态机
//! ├── db/            # 数据库层 (repositories)
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod client;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// 准备进程环境: 加载 .env 并初始化日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    if let Some(ref dir) = log_dir {
        std::fs::create_dir_all(dir)?;
    }
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_  ____  ____
  \__ \/ __ \/ __ \/ __ \
 ___/ / / / / /_/ / /_/ /
/____/_/ /_/\____/ .___/
                /_/
          Order Service
    "#
    );
}
