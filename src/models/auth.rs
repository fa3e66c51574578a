//! Authentication-related models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 注册/登录请求
///
/// 凭据尝试是请求期临时值，不落盘，不打日志。
#[derive(Debug, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// 受限资源访问请求
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1, message = "token must not be empty"))]
    pub token: String,
}

/// 令牌响应
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
