//! JWT token generation and validation
//!
//! 无状态签名令牌：服务端不保存会话表，有效性由签名 + 过期时间完全决定。
//! 签发和验证都是纯计算，密钥不可变，天然并发安全。

use crate::{config::AppConfig, error::AppError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// 令牌验证失败的三种互斥终态
///
/// 调用方必须区分：Expired 是正常的、重新登录即可恢复的状态；
/// Malformed/Signature 意味着无效或伪造的令牌，不能按"差一点有效"处理。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// 结构不合法，解析即失败
    #[error("token is malformed")]
    Malformed,

    /// 签名重算不匹配
    #[error("token signature mismatch")]
    Signature,

    /// 签名有效但已过期
    #[error("token expired")]
    Expired,
}

/// JWT service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: u64,
}

impl JwtService {
    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        Ok(Self {
            encoding_key,
            decoding_key,
            token_ttl_secs: config.security.token_ttl_secs,
        })
    }

    /// 签发令牌，exp = now + ttl
    ///
    /// 不保留签发历史：同一主体签发两次会得到两个互相独立、同样有效的令牌。
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.token_ttl_secs as i64);

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal
        })
    }

    /// 验证令牌：结构 → 签名 → 过期，三个检查依次失败为三种互斥终态
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {:?}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::Signature,
                    ErrorKind::InvalidToken
                    | ErrorKind::Base64(_)
                    | ErrorKind::Json(_)
                    | ErrorKind::Utf8(_) => TokenError::Malformed,
                    _ => TokenError::Signature,
                }
            })
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => AppError::TokenExpired,
            TokenError::Malformed | TokenError::Signature => AppError::Unauthorized,
        }
    }
}
