//! 测试公共模块
//! 提供测试辅助函数和测试工具

use jotserver::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    config::{AppConfig, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig},
    db,
    middleware::AppState,
    repository::user_repo::UserRepository,
    services::AuthService,
};
use secrecy::Secret;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Instant;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only-min-32-chars";
pub const TEST_SALT: &str = "test-salt";

/// 创建测试配置
pub fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".to_string(), // 使用随机端口
            graceful_shutdown_timeout_secs: 5,
        },
        database: DatabaseConfig {
            // 内存库 + 单连接：每个测试一份独立数据库，无需清理
            url: Secret::new("sqlite::memory:".to_string()),
            max_connections: 1,
            acquire_timeout_secs: 5,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            jwt_secret: Secret::new(TEST_JWT_SECRET.to_string()),
            password_salt: Secret::new(TEST_SALT.to_string()),
            token_ttl_secs: 300, // 5分钟用于测试
        },
    }
}

/// 初始化测试数据库
pub async fn setup_test_db(config: &AppConfig) -> SqlitePool {
    let pool = db::create_pool(&config.database)
        .await
        .expect("Failed to create test database pool");

    // 运行迁移
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// 创建测试应用状态
pub async fn create_test_app_state(pool: SqlitePool) -> Arc<AppState> {
    let config = create_test_config();
    let jwt_service =
        Arc::new(JwtService::from_config(&config).expect("Failed to create JWT service"));
    let auth_service = Arc::new(AuthService::new(
        pool.clone(),
        jwt_service.clone(),
        Arc::new(config.clone()),
    ));

    Arc::new(AppState {
        config,
        db: pool,
        auth_service,
        jwt_service,
        started_at: Instant::now(),
    })
}

/// 创建测试用户（摘要构造与服务端一致）
pub async fn create_test_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> uuid::Uuid {
    let hasher = PasswordHasher::new(Secret::new(TEST_SALT.to_string()));
    let digest = hasher.hash(password);

    let repo = UserRepository::new(pool.clone());
    let user = repo
        .create(username, &digest)
        .await
        .expect("Failed to create test user");

    user.id
}
