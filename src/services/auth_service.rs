//! 认证服务：注册、登录、受限访问检查

use crate::{
    auth::jwt::{Claims, JwtService},
    auth::password::PasswordHasher,
    config::AppConfig,
    error::AppError,
    models::auth::*,
    repository::user_repo::UserRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct AuthService {
    db: SqlitePool,
    jwt_service: Arc<JwtService>,
    config: Arc<AppConfig>,
}

impl AuthService {
    pub fn new(db: SqlitePool, jwt_service: Arc<JwtService>, config: Arc<AppConfig>) -> Self {
        Self {
            db,
            jwt_service,
            config,
        }
    }

    /// 用户注册
    ///
    /// 创建成功后立刻登录签发令牌（注册即持有会话），两步作为一个工作流，
    /// 不留下"账户已建但调用方拿不到令牌"的窗口。
    pub async fn register(&self, req: AuthRequest) -> Result<TokenResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        // 快路径检查，已存在直接报 Conflict
        if user_repo.find_by_username(&req.username).await?.is_some() {
            tracing::info!(username = %req.username, "Registration rejected, user already exists");
            return Err(AppError::Conflict);
        }

        // 哈希密码
        let hasher = PasswordHasher::from_config(&self.config);
        let digest = hasher.hash(&req.password);

        // 并发注册同名用户时由 UNIQUE 约束裁决，插入同样报告 Conflict
        let user = user_repo.create(&req.username, &digest).await?;

        tracing::info!(username = %user.username, user_id = %user.id, "New user registered");

        // 注册即登录；刚建的账户登录失败说明存储不一致，属内部错误而非用户错误
        match self.login(req).await {
            Ok(response) => Ok(response),
            Err(AppError::InvalidCredential) => {
                tracing::error!(
                    username = %user.username,
                    "Post-registration login failed, store inconsistent"
                );
                Err(AppError::Internal)
            }
            Err(e) => Err(e),
        }
    }

    /// 用户登录
    pub async fn login(&self, req: AuthRequest) -> Result<TokenResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        // 每次凭据比较都经由同一个哈希构造
        let hasher = PasswordHasher::from_config(&self.config);
        let digest = hasher.hash(&req.password);

        // 用户不存在与密码错误统一报告为 InvalidCredential，防止用户名枚举
        let user_id = user_repo
            .match_credentials(&req.username, &digest)
            .await?
            .ok_or_else(|| {
                tracing::info!(username = %req.username, "Login failed");
                AppError::InvalidCredential
            })?;

        // 签发令牌
        let token = self.jwt_service.issue(&req.username)?;

        tracing::info!(username = %req.username, user_id = %user_id, "Login succeeded");

        Ok(TokenResponse { token })
    }

    /// 受限资源访问检查
    ///
    /// 只做令牌验证，不查凭据存储：令牌签发后账户的任何变化在过期前不可见，
    /// 这是无状态令牌接受的有界陈旧窗口。
    pub fn check_access(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.jwt_service.validate(token)?;

        tracing::debug!(subject = %claims.sub, "Restricted access granted");

        Ok(claims)
    }
}
