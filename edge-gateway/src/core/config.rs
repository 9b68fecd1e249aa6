/// 服务器配置 - 边缘网关的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | INVENTORY_URL | http://localhost:8081 | 库存服务基础地址 |
/// | ORDER_URL | http://localhost:8082 | 订单服务基础地址 |
/// | REQUEST_TIMEOUT_MS | 10000 | 单次下游调用超时 (毫秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录 (设置后按天滚动) |
///
/// # 示例
///
/// ```ignore
/// INVENTORY_URL=http://inventory:8081 ORDER_URL=http://orders:8082 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 库存服务基础地址
    pub inventory_url: String,
    /// 订单服务基础地址
    pub order_url: String,
    /// 单次下游调用超时 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            inventory_url: std::env::var("INVENTORY_URL")
                .unwrap_or_else(|_| "http://localhost:8081".into()),
            order_url: std::env::var("ORDER_URL")
                .unwrap_or_else(|_| "http://localhost:8082".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义下游地址覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        inventory_url: impl Into<String>,
        order_url: impl Into<String>,
        http_port: u16,
    ) -> Self {
        let mut config = Self::from_env();
        config.inventory_url = inventory_url.into();
        config.order_url = order_url.into();
        config.http_port = http_port;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::with_overrides("http://inv:1", "http://ord:2", 9999);
        assert_eq!(config.inventory_url, "http://inv:1");
        assert_eq!(config.order_url, "http://ord:2");
        assert_eq!(config.http_port, 9999);
    }
}
