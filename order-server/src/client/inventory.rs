//! 库存服务客户端
//!
//! 订单聚合时逐项查询商品快照，带单次调用超时。
//! 判定全部基于响应信封里的数字错误码和 HTTP 状态，不解析错误文本。

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use shared::models::ProductSnapshot;
use shared::{ApiResponse, ErrorCode};

/// Inventory lookup failure modes
///
/// `NotFound` is a definitive "no such product" answer from the inventory
/// service; everything else (timeout, transport failure, unexpected reply)
/// is `Unavailable` with the cause kept for logging.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("product not found")]
    NotFound,
    #[error("inventory service unavailable: {0}")]
    Unavailable(String),
}

/// Read-side interface to the inventory service
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Fetch the current snapshot (price, stock) of one product
    async fn fetch_product(&self, product_id: &str) -> Result<ProductSnapshot, InventoryError>;
}

/// HTTP 实现
///
/// # 示例
///
/// ```ignore
/// let client = HttpInventoryClient::new("http://localhost:8081", Duration::from_secs(5));
/// let snapshot = client.fetch_product("product:espresso").await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    /// HTTP 客户端
    client: Client,
    /// 库存服务基础地址
    base_url: String,
}

impl HttpInventoryClient {
    /// 创建库存客户端，每次调用受 `timeout` 约束
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// 探测库存服务的健康端点
    pub async fn check_health(&self) -> Result<(), InventoryError> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| InventoryError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(InventoryError::Unavailable(format!(
                "health probe returned {}",
                response.status()
            )))
        }
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn fetch_product(&self, product_id: &str) -> Result<ProductSnapshot, InventoryError> {
        let url = format!(
            "{}/api/products/{}",
            self.base_url.trim_end_matches('/'),
            product_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| InventoryError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(InventoryError::NotFound);
        }

        let envelope: ApiResponse<ProductSnapshot> = response
            .json()
            .await
            .map_err(|e| InventoryError::Unavailable(format!("undecodable reply: {}", e)))?;

        match envelope.code {
            Some(0) | None => envelope
                .data
                .ok_or_else(|| InventoryError::Unavailable("reply carried no data".to_string())),
            Some(code) if code == ErrorCode::NotFound.code() => Err(InventoryError::NotFound),
            Some(code) => Err(InventoryError::Unavailable(format!(
                "inventory replied code {}: {}",
                code, envelope.message
            ))),
        }
    }
}
