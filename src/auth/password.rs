//! 密码哈希
//!
//! 摘要为 SHA-256(salt || password) 的十六进制编码，确定性单向变换。
//! 盐值是进程级固定配置（所有账户共享），注册与登录必须使用同一构造，
//! 否则登录永远不会成功。摘要与明文密码都不允许出现在日志中。

use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};

/// 摘要的十六进制长度固定，存储列宽一次定死
pub const DIGEST_HEX_LEN: usize = 64;

/// 密码哈希器，盐值在构造时注入
pub struct PasswordHasher {
    salt: Secret<String>,
}

impl PasswordHasher {
    pub fn new(salt: Secret<String>) -> Self {
        Self { salt }
    }

    /// 从应用配置创建
    pub fn from_config(config: &crate::config::AppConfig) -> Self {
        Self::new(config.security.password_salt.clone())
    }

    /// 计算密码摘要
    ///
    /// 对合法的字节串输入没有调用方可见的失败模式。
    pub fn hash(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.expose_secret().as_bytes());
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(Secret::new("test-salt".to_string()))
    }

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = test_hasher();

        assert_eq!(hasher.hash("coffee"), hasher.hash("coffee"));
    }

    #[test]
    fn test_hash_differs_for_different_passwords() {
        let hasher = test_hasher();

        assert_ne!(hasher.hash("coffee"), hasher.hash("tea"));
    }

    #[test]
    fn test_hash_has_fixed_length() {
        let hasher = test_hasher();

        assert_eq!(hasher.hash("").len(), DIGEST_HEX_LEN);
        assert_eq!(hasher.hash("coffee").len(), DIGEST_HEX_LEN);
        assert_eq!(hasher.hash(&"a".repeat(1000)).len(), DIGEST_HEX_LEN);
    }

    #[test]
    fn test_hash_depends_on_salt() {
        let hasher1 = PasswordHasher::new(Secret::new("salt-one".to_string()));
        let hasher2 = PasswordHasher::new(Secret::new("salt-two".to_string()));

        assert_ne!(hasher1.hash("coffee"), hasher2.hash("coffee"));
    }

    #[test]
    fn test_hash_unicode() {
        let hasher = test_hasher();

        let digest = hasher.hash("密码测试🔒");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert_eq!(digest, hasher.hash("密码测试🔒"));
    }
}
