//! 认证模块：密码哈希与 JWT 令牌

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService, TokenError};
pub use password::PasswordHasher;
