//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, RepoError};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

/// Map repository errors onto the category error space
fn map_repo_error(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) | RepoError::MissingReference(msg) => {
            AppError::with_message(ErrorCode::CategoryNotFound, msg)
        }
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::CategoryNameExists, msg),
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}

// =============================================================================
// Category Handlers
// =============================================================================

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await.map_err(map_repo_error)?;
    Ok(ApiResponse::success(categories))
}

/// GET /api/categories/:id - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(&id)
        .await
        .map_err(map_repo_error)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category {} not found", id),
            )
        })?;
    Ok(ApiResponse::success(category))
}

/// POST /api/categories - 创建分类 (名称唯一)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<ApiResponse<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await.map_err(map_repo_error)?;
    Ok(ApiResponse::success(category))
}

/// PUT /api/categories/:id - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<ApiResponse<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.update(&id, payload).await.map_err(map_repo_error)?;
    Ok(ApiResponse::success(category))
}

/// DELETE /api/categories/:id - 删除分类
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = CategoryRepository::new(state.db.clone());
    repo.delete(&id).await.map_err(map_repo_error)?;
    Ok(ApiResponse::ok())
}
