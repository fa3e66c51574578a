//! 错误模型测试
//!
//! 验证结果分类到 HTTP 状态码的映射以及对外消息不泄露内部细节

use jotserver::error::AppError;

#[test]
fn test_status_code_mapping() {
    assert_eq!(AppError::Conflict.code(), 409);
    assert_eq!(AppError::InvalidCredential.code(), 403);
    assert_eq!(AppError::Unauthorized.code(), 401);
    assert_eq!(AppError::TokenExpired.code(), 401);
    assert_eq!(AppError::BadRequest("bad".to_string()).code(), 400);
    assert_eq!(AppError::Internal.code(), 500);
    assert_eq!(AppError::Config("oops".to_string()).code(), 500);
    assert_eq!(AppError::Database(sqlx::Error::RowNotFound).code(), 500);
}

#[test]
fn test_internal_errors_are_opaque() {
    // 存储与配置错误对外只有笼统消息
    let db_error = AppError::Database(sqlx::Error::PoolTimedOut);
    assert_eq!(db_error.user_message(), "Database error occurred");

    let config_error = AppError::Config("JOT_SECURITY__JWT_SECRET missing".to_string());
    assert_eq!(config_error.user_message(), "Configuration error");
    assert!(!config_error.user_message().contains("JWT_SECRET"));
}

#[test]
fn test_invalid_credential_message_uniform() {
    // 消息不暗示用户是否存在
    let message = AppError::InvalidCredential.user_message();
    assert_eq!(message, "Username or password is not valid");
}

#[test]
fn test_expired_and_unauthorized_share_status_not_message() {
    assert_eq!(
        AppError::TokenExpired.code(),
        AppError::Unauthorized.code()
    );
    assert_ne!(
        AppError::TokenExpired.user_message(),
        AppError::Unauthorized.user_message()
    );
}
