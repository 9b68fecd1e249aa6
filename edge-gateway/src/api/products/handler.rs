//! Product 转发处理器
//!
//! 所有路由转发到库存服务，响应信封原样回传，
//! 错误码在 [`ServiceClient`](crate::client::ServiceClient) 里统一翻译。

use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use serde_json::Value;

use crate::core::ServerState;
use shared::{ApiResponse, AppResult};

/// GET /api/v1/products - 商品分页列表 (查询参数透传)
pub async fn list(
    State(state): State<ServerState>,
    RawQuery(query): RawQuery,
) -> AppResult<ApiResponse<Value>> {
    state.inventory.get("api/products", query.as_deref()).await
}

/// POST /api/v1/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Value>,
) -> AppResult<ApiResponse<Value>> {
    state.inventory.post("api/products", &payload).await
}

/// GET /api/v1/products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Value>> {
    state
        .inventory
        .get(&format!("api/products/{}", id), None)
        .await
}

/// PUT /api/v1/products/{id} - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> AppResult<ApiResponse<Value>> {
    state
        .inventory
        .put(&format!("api/products/{}", id), &payload)
        .await
}

/// DELETE /api/v1/products/{id} - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Value>> {
    state
        .inventory
        .delete(&format!("api/products/{}", id))
        .await
}
