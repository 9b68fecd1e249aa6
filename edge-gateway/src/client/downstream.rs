//! 下游服务客户端
//!
//! 网关与库存服务、订单服务之间的 RPC 通道。响应一律按信封
//! (`ApiResponse`) 解码，错误分类只看信封里的数字错误码，
//! 不解析错误文本。连不上下游或回复无法解码时，降级为该
//! 通道的保底错误码 (502 档)，原因只进日志。

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use shared::{ApiResponse, AppError, AppResult, ErrorCode};

/// 单个下游服务的 HTTP 客户端
///
/// # 示例
///
/// ```ignore
/// let inventory = ServiceClient::new(
///     "inventory-server",
///     "http://localhost:8081",
///     Duration::from_secs(10),
///     ErrorCode::InventoryUnavailable,
/// );
/// let envelope = inventory.get("api/products", None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ServiceClient {
    /// HTTP 客户端
    client: Client,
    /// 下游服务基础地址
    base_url: String,
    /// 日志里使用的服务名
    name: &'static str,
    /// 下游不可达或回复不可用时对外呈现的错误码
    unreachable: ErrorCode,
}

impl ServiceClient {
    /// 创建下游客户端，每次调用受 `timeout` 约束
    pub fn new(
        name: &'static str,
        base_url: impl Into<String>,
        timeout: Duration,
        unreachable: ErrorCode,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            name,
            unreachable,
        }
    }

    /// 下游服务基础地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// 探测下游服务的健康端点
    pub async fn check_health(&self) -> Result<(), String> {
        let response = self
            .client
            .get(self.url("health"))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("health probe returned {}", response.status()))
        }
    }

    /// GET 转发，原样携带查询字符串
    pub async fn get(&self, path: &str, raw_query: Option<&str>) -> AppResult<ApiResponse<Value>> {
        let url = match raw_query {
            Some(query) if !query.is_empty() => format!("{}?{}", self.url(path), query),
            _ => self.url(path),
        };
        self.dispatch(self.client.get(url)).await
    }

    /// POST 转发，JSON 请求体原样传递
    pub async fn post(&self, path: &str, body: &Value) -> AppResult<ApiResponse<Value>> {
        self.dispatch(self.client.post(self.url(path)).json(body))
            .await
    }

    /// PUT 转发
    pub async fn put(&self, path: &str, body: &Value) -> AppResult<ApiResponse<Value>> {
        self.dispatch(self.client.put(self.url(path)).json(body))
            .await
    }

    /// PATCH 转发
    pub async fn patch(&self, path: &str, body: &Value) -> AppResult<ApiResponse<Value>> {
        self.dispatch(self.client.patch(self.url(path)).json(body))
            .await
    }

    /// DELETE 转发
    pub async fn delete(&self, path: &str) -> AppResult<ApiResponse<Value>> {
        self.dispatch(self.client.delete(self.url(path))).await
    }

    /// 发送请求并把下游信封翻译为网关结果
    ///
    /// - 成功信封 (code 0) 原样返回，交由上层决定 HTTP 状态
    /// - 错误信封翻译成 [`AppError`]，HTTP 状态由错误码表重新推导
    /// - 传输失败 / 信封无法解码 → 本通道的保底错误码，原因记入日志
    async fn dispatch(&self, request: RequestBuilder) -> AppResult<ApiResponse<Value>> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("{} request failed: {}", self.name, e);
            AppError::new(self.unreachable)
        })?;

        let envelope: ApiResponse<Value> = response.json().await.map_err(|e| {
            tracing::error!("{} returned an undecodable reply: {}", self.name, e);
            AppError::new(self.unreachable)
        })?;

        match envelope.code {
            Some(0) | None => Ok(envelope),
            Some(raw) => match ErrorCode::try_from(raw) {
                Ok(code) => Err(AppError {
                    code,
                    message: envelope.message,
                    details: envelope.details,
                }),
                Err(_) => {
                    tracing::warn!(
                        "{} replied with unrecognized code {}: {}",
                        self.name,
                        raw,
                        envelope.message
                    );
                    Err(AppError::new(ErrorCode::Unknown))
                }
            },
        }
    }
}
