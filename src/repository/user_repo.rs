//! User repository (数据库访问层)
//!
//! 凭据存储的三个操作：存在性查询、创建、凭据匹配。
//! 底层存储不可用时错误原样上抛，不在此层吞掉。

use crate::{error::AppError, models::user::User};
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    db: SqlitePool,
}

impl UserRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// 根据用户名查找用户，纯查询无副作用
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_digest, created_at FROM users WHERE username = ?"
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    /// 创建用户
    ///
    /// 用户名唯一性由存储层 UNIQUE 约束裁决：并发注册同名用户至多一个成功，
    /// 违反约束报告为 Conflict。
    pub async fn create(&self, username: &str, password_digest: &str) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_digest: password_digest.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_digest, created_at)
            VALUES (?, ?, ?, ?)
            "#
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_digest)
        .bind(user.created_at)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|db_err| db_err.is_unique_violation()) {
                AppError::Conflict
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(user)
    }

    /// 凭据匹配
    ///
    /// 单条查询同时匹配用户名与摘要：用户名不存在与摘要不匹配
    /// 返回完全一致的 None，调用方无从区分（防枚举契约）。
    pub async fn match_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<Uuid>, AppError> {
        let row = sqlx::query(
            "SELECT id FROM users WHERE username = ? AND password_digest = ?"
        )
        .bind(username)
        .bind(password_digest)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| r.get::<Uuid, _>("id")))
    }

    /// 统计用户数量
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await?
            .get(0);

        Ok(count)
    }
}
