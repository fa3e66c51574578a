//! 认证相关的 HTTP 处理器

use crate::{error::AppError, middleware::AppState, models::auth::*};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

/// 注册
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuthRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let response = state.auth_service.register(req).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// 登录
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuthRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}

/// 受限资源
///
/// 令牌仍然有效则原样回显；过期与无效/伪造返回可区分的 401。
pub async fn restricted(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    state.auth_service.check_access(&req.token)?;

    Ok(Json(TokenResponse { token: req.token }))
}
