//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{ProductRepository, RepoError};
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::request::{PageQuery, Pagination};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

/// Query params for listing products
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
    /// Optional category filter ("category:xyz" or bare key)
    pub category: Option<String>,
}

/// One page of products plus pagination metadata
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// Map repository errors onto the product error space
fn map_repo_error(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
        RepoError::MissingReference(msg) => {
            AppError::with_message(ErrorCode::CategoryNotFound, msg)
        }
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}

// =============================================================================
// Product Handlers
// =============================================================================

/// GET /api/products - 获取商品分页列表 (可选分类过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<ApiResponse<ProductListResponse>> {
    let page = PageQuery::new(query.limit, query.offset);
    let limit = page.effective_limit();
    let offset = page.effective_offset();

    let repo = ProductRepository::new(state.db.clone());
    let (products, total) = repo
        .find_page(query.category.as_deref(), limit, offset)
        .await
        .map_err(map_repo_error)?;

    Ok(ApiResponse::success(ProductListResponse {
        products,
        pagination: Pagination {
            total,
            limit,
            offset,
        },
    }))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await
        .map_err(map_repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;
    Ok(ApiResponse::success(product))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<ApiResponse<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await.map_err(map_repo_error)?;
    Ok(ApiResponse::success(product))
}

/// PUT /api/products/:id - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<ApiResponse<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.update(&id, payload).await.map_err(map_repo_error)?;
    Ok(ApiResponse::success(product))
}

/// DELETE /api/products/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = ProductRepository::new(state.db.clone());
    repo.delete(&id).await.map_err(map_repo_error)?;
    Ok(ApiResponse::ok())
}
