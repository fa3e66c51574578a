//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

use crate::{handlers, middleware::AppState};

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查）
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // 认证端点
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/authenticate", post(handlers::auth::authenticate))
        .route("/restricted", post(handlers::auth::restricted));

    // 跨域：对所有来源开放，与浏览器端调用方约定一致
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(16 * 1024))
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}
