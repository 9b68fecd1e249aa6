//! Shop Edge Gateway - 边缘网关
//!
//! 对外唯一的 HTTP 入口。`/api/v1/**` 按路由转发到库存服务或订单服务，
//! 把下游信封里的错误码翻译成边缘 HTTP 响应。不做反向代理式的盲转发，
//! 每条路由都显式声明。
//!
//! # 模块结构
//!
//! ```text
//! edge-gateway/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── client/        # 下游服务 HTTP 客户端
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod client;
pub mod core;
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
          Edge Gateway
    "#
    );
}
