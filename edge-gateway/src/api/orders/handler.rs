//! Order 转发处理器
//!
//! 所有路由转发到订单服务。除创建订单回 201 外，
//! HTTP 状态由信封错误码推导。

use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use http::StatusCode;
use serde_json::Value;

use crate::core::ServerState;
use shared::{ApiResponse, AppResult};

/// GET /api/v1/orders - 按用户分页查询订单
pub async fn list(
    State(state): State<ServerState>,
    RawQuery(query): RawQuery,
) -> AppResult<ApiResponse<Value>> {
    state.orders.get("api/orders", query.as_deref()).await
}

/// POST /api/v1/orders - 创建订单 (成功时 201)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, ApiResponse<Value>)> {
    let envelope = state.orders.post("api/orders", &payload).await?;
    Ok((StatusCode::CREATED, envelope))
}

/// GET /api/v1/orders/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Value>> {
    state.orders.get(&format!("api/orders/{}", id), None).await
}

/// PATCH /api/v1/orders/{id}/status - 更新订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> AppResult<ApiResponse<Value>> {
    state
        .orders
        .patch(&format!("api/orders/{}/status", id), &payload)
        .await
}
