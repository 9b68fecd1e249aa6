//! Category 转发处理器
//!
//! 所有路由转发到库存服务。

use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use serde_json::Value;

use crate::core::ServerState;
use shared::{ApiResponse, AppResult};

/// GET /api/v1/categories - 分类列表
pub async fn list(
    State(state): State<ServerState>,
    RawQuery(query): RawQuery,
) -> AppResult<ApiResponse<Value>> {
    state
        .inventory
        .get("api/categories", query.as_deref())
        .await
}

/// POST /api/v1/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Value>,
) -> AppResult<ApiResponse<Value>> {
    state.inventory.post("api/categories", &payload).await
}

/// GET /api/v1/categories/{id} - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Value>> {
    state
        .inventory
        .get(&format!("api/categories/{}", id), None)
        .await
}

/// PUT /api/v1/categories/{id} - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> AppResult<ApiResponse<Value>> {
    state
        .inventory
        .put(&format!("api/categories/{}", id), &payload)
        .await
}

/// DELETE /api/v1/categories/{id} - 删除分类
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Value>> {
    state
        .inventory
        .delete(&format!("api/categories/{}", id))
        .await
}
