//! Order API Handlers
//!
//! 下单流水线: 校验 → 库存聚合 → 持久化。状态与查询接口直达仓库。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{OrderRepository, RepoError};
use crate::orders::{OrderAggregator, transition, validate_create_order};
use shared::models::{CreateOrderRequest, Order, OrderStatus, UpdateOrderStatusRequest};
use shared::request::{PageQuery, Pagination};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// 所属用户 (必填)
    pub user_id: Option<String>,
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

/// One page of a user's orders plus pagination metadata
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}

/// Map repository errors onto the order error space
fn map_repo_error(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::OrderNotFound, msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}

// =============================================================================
// Order Handlers
// =============================================================================

/// POST /api/orders - 下单
///
/// 校验请求后逐项查询库存聚合价格；任何一项失败则整单失败，什么都不落库。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, ApiResponse<Order>)> {
    validate_create_order(&payload)?;

    let aggregator = OrderAggregator::new(state.inventory.clone());
    let priced = aggregator.build(&payload.items).await?;

    let order = Order {
        id: None,
        user_id: payload.user_id,
        items: priced.items,
        total_amount: priced.total_amount,
        status: OrderStatus::Pending,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(order).await.map_err(map_repo_error)?;

    Ok((StatusCode::CREATED, ApiResponse::success(order)))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.get_by_id(&id).await.map_err(map_repo_error)?;
    Ok(ApiResponse::success(order))
}

/// PATCH /api/orders/:id/status - 更新订单状态
///
/// 未知目标状态被拒绝，存储的状态保持不变。
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<ApiResponse<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let current = repo.get_by_id(&id).await.map_err(map_repo_error)?;

    let next = transition(current.status, &payload.status)?;

    let order = repo
        .update_status(&id, next)
        .await
        .map_err(map_repo_error)?;
    Ok(ApiResponse::success(order))
}

/// GET /api/orders?user_id=...&limit=...&offset=... - 按用户分页查询
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<ApiResponse<OrderListResponse>> {
    let user_id = query
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::validation("user_id is required"))?;

    let page = PageQuery::new(query.limit, query.offset);
    let limit = page.effective_limit();
    let offset = page.effective_offset();

    let repo = OrderRepository::new(state.db.clone());
    let (orders, total) = repo
        .list_by_user(user_id, limit, offset)
        .await
        .map_err(map_repo_error)?;

    Ok(ApiResponse::success(OrderListResponse {
        orders,
        pagination: Pagination {
            total,
            limit,
            offset,
        },
    }))
}
