//! 密码哈希功能单元测试
//!
//! 验证盐化 SHA-256 摘要的确定性与定长属性

use jotserver::auth::password::{PasswordHasher, DIGEST_HEX_LEN};
use secrecy::Secret;

fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(Secret::new("test-salt".to_string()))
}

#[test]
fn test_hash_is_deterministic() {
    let hasher = test_hasher();

    // 注册与登录两个调用点必须得到字节一致的摘要
    assert_eq!(hasher.hash("coffee"), hasher.hash("coffee"));
}

#[test]
fn test_hash_differs_for_different_passwords() {
    let hasher = test_hasher();

    assert_ne!(hasher.hash("coffee"), hasher.hash("tea"));
    assert_ne!(hasher.hash("coffee"), hasher.hash("coffe"));
    assert_ne!(hasher.hash(""), hasher.hash(" "));
}

#[test]
fn test_hash_fixed_length_hex() {
    let hasher = test_hasher();

    let long = "x".repeat(1000);
    for password in ["", "a", "coffee", "密码测试🔒", long.as_str()] {
        let digest = hasher.hash(password);
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn test_hash_depends_on_salt() {
    let hasher1 = PasswordHasher::new(Secret::new("salt-one".to_string()));
    let hasher2 = PasswordHasher::new(Secret::new("salt-two".to_string()));

    assert_ne!(hasher1.hash("coffee"), hasher2.hash("coffee"));
}

#[test]
fn test_hash_matches_known_construction() {
    use sha2::{Digest, Sha256};

    // 摘要构造固定为 SHA-256(salt || password)
    let hasher = test_hasher();

    let mut reference = Sha256::new();
    reference.update(b"test-salt");
    reference.update(b"coffee");

    assert_eq!(hasher.hash("coffee"), hex::encode(reference.finalize()));
}
